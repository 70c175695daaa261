//! Knapsack instance and fitness evaluation.

use super::catalog::{Item, ItemCatalog};
use super::config::GaConfig;
use super::types::{Candidate, Fitness};
use rand::Rng;

/// A knapsack instance: item catalog plus capacity.
///
/// Fitness is a hard-penalty objective: a candidate whose packed weight
/// exceeds the capacity scores exactly 0, otherwise it scores its packed
/// value. Higher is better.
///
/// # Examples
///
/// ```
/// use knapsack_ga::ga::{Candidate, Item, ItemCatalog, KnapsackProblem};
///
/// let catalog = ItemCatalog::new(vec![Item::new(5, 4), Item::new(6, 5), Item::new(3, 2)]);
/// let problem = KnapsackProblem::new(catalog, 8);
///
/// assert_eq!(problem.fitness(&Candidate::from_bits(&[1, 0, 1])), 8);
/// assert_eq!(problem.fitness(&Candidate::from_bits(&[1, 1, 0])), 0); // weight 9 > 8
/// ```
#[derive(Debug, Clone)]
pub struct KnapsackProblem {
    catalog: ItemCatalog,
    capacity: u64,
}

impl KnapsackProblem {
    pub fn new(catalog: ItemCatalog, capacity: u64) -> Self {
        Self { catalog, capacity }
    }

    /// Generates a random catalog of `config.num_items` items with
    /// `config.capacity`.
    pub fn generate<R: Rng>(config: &GaConfig, rng: &mut R) -> Self {
        Self {
            catalog: ItemCatalog::generate(config.num_items, rng),
            capacity: config.capacity,
        }
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn num_items(&self) -> usize {
        self.catalog.len()
    }

    /// Sum of weights of packed items.
    pub fn total_weight(&self, candidate: &Candidate) -> u64 {
        self.packed(candidate).map(|item| u64::from(item.weight)).sum()
    }

    /// Sum of values of packed items, regardless of feasibility.
    pub fn total_value(&self, candidate: &Candidate) -> u64 {
        self.packed(candidate).map(|item| u64::from(item.value)).sum()
    }

    /// Whether the packed weight fits within the capacity.
    pub fn is_feasible(&self, candidate: &Candidate) -> bool {
        self.total_weight(candidate) <= self.capacity
    }

    /// Scores a candidate: 0 when overweight, total value otherwise.
    ///
    /// Recomputed from scratch on every call.
    pub fn fitness(&self, candidate: &Candidate) -> Fitness {
        debug_assert_eq!(
            candidate.len(),
            self.catalog.len(),
            "candidate length must match catalog size"
        );
        let (value, weight) = self
            .packed(candidate)
            .fold((0u64, 0u64), |(v, w), item| {
                (v + u64::from(item.value), w + u64::from(item.weight))
            });
        if weight > self.capacity {
            0
        } else {
            value
        }
    }

    /// Exact optimum by exhaustive enumeration.
    ///
    /// Only meant for tiny instances (tests, sanity checks).
    ///
    /// # Panics
    /// Panics if the catalog has more than 24 items.
    pub fn brute_force_optimum(&self) -> Fitness {
        let n = self.catalog.len();
        assert!(n <= 24, "brute force is limited to 24 items, got {n}");
        (0u32..(1u32 << n))
            .map(|mask| {
                let genes = (0..n).map(|i| mask & (1 << i) != 0).collect();
                self.fitness(&Candidate::new(genes))
            })
            .max()
            .unwrap_or(0)
    }

    fn packed<'a>(
        &'a self,
        candidate: &'a Candidate,
    ) -> impl Iterator<Item = &'a Item> + 'a {
        candidate
            .genes()
            .iter()
            .zip(self.catalog.iter())
            .filter(|(g, _)| **g)
            .map(|(_, item)| item)
    }
}
