//! Candidate representation.
//!
//! A [`Candidate`] is a fixed-length binary inclusion vector: gene `i` is
//! set when item `i` of the catalog is packed. Genes are stored as `bool`,
//! so no value outside {0, 1} can ever be represented.

/// Fitness score of a candidate: total packed value, or 0 when overweight.
pub type Fitness = u64;

/// A candidate solution: one gene per catalog item.
///
/// # Examples
///
/// ```
/// use knapsack_ga::ga::Candidate;
///
/// let c = Candidate::from_bits(&[1, 0, 1, 1]);
/// assert_eq!(c.len(), 4);
/// assert_eq!(c.packed_items().collect::<Vec<_>>(), vec![0, 2, 3]);
/// assert_eq!(c.to_bits(), vec![1, 0, 1, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    genes: Vec<bool>,
}

impl Candidate {
    /// Wraps a gene vector.
    pub fn new(genes: Vec<bool>) -> Self {
        Self { genes }
    }

    /// Builds a candidate from `0/1` bytes; any non-zero byte is a set gene.
    pub fn from_bits(bits: &[u8]) -> Self {
        Self {
            genes: bits.iter().map(|&b| b != 0).collect(),
        }
    }

    /// A candidate of length `n` with nothing packed.
    pub fn empty(n: usize) -> Self {
        Self {
            genes: vec![false; n],
        }
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns `true` when the candidate has no genes at all.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// The gene slice.
    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    /// Mutable access for operators working on a freshly built child.
    pub(crate) fn genes_mut(&mut self) -> &mut [bool] {
        &mut self.genes
    }

    /// Whether item `index` is packed.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn is_packed(&self, index: usize) -> bool {
        self.genes[index]
    }

    /// Indices of packed items, ascending.
    pub fn packed_items(&self) -> impl Iterator<Item = usize> + '_ {
        self.genes
            .iter()
            .enumerate()
            .filter(|(_, g)| **g)
            .map(|(i, _)| i)
    }

    /// Number of packed items.
    pub fn packed_count(&self) -> usize {
        self.genes.iter().filter(|&&g| g).count()
    }

    /// The genes as `0/1` bytes.
    pub fn to_bits(&self) -> Vec<u8> {
        self.genes.iter().map(|&g| u8::from(g)).collect()
    }
}

impl From<Vec<bool>> for Candidate {
    fn from(genes: Vec<bool>) -> Self {
        Self::new(genes)
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &g in &self.genes {
            f.write_str(if g { "1" } else { "0" })?;
        }
        Ok(())
    }
}
