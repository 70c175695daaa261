//! Item catalog.
//!
//! The catalog is generated once per run and is read-only afterwards. An
//! item's index is its identity: gene `i` of every candidate refers to
//! `catalog[i]`.

use rand::Rng;
use std::ops::{Index, RangeInclusive};

/// Range values are drawn from when generating a catalog.
pub const VALUE_RANGE: RangeInclusive<u32> = 2..=10;

/// Range weights are drawn from when generating a catalog.
pub const WEIGHT_RANGE: RangeInclusive<u32> = 1..=5;

/// A packable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub value: u32,
    pub weight: u32,
}

impl Item {
    pub fn new(value: u32, weight: u32) -> Self {
        Self { value, weight }
    }
}

/// Immutable, index-addressed list of items.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemCatalog {
    items: Vec<Item>,
}

impl ItemCatalog {
    /// Wraps a fixed item list.
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Generates `num_items` items with value uniform in [`VALUE_RANGE`] and
    /// weight uniform in [`WEIGHT_RANGE`], drawn independently.
    ///
    /// Each item consumes two draws from `rng`: value first, then weight.
    pub fn generate<R: Rng>(num_items: usize, rng: &mut R) -> Self {
        let items = (0..num_items)
            .map(|_| {
                let value = rng.random_range(VALUE_RANGE);
                let weight = rng.random_range(WEIGHT_RANGE);
                Item { value, weight }
            })
            .collect();
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }
}

impl Index<usize> for ItemCatalog {
    type Output = Item;

    fn index(&self, index: usize) -> &Item {
        &self.items[index]
    }
}

impl<'a> IntoIterator for &'a ItemCatalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl From<Vec<Item>> for ItemCatalog {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}
