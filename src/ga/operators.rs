//! Binary-string genetic operators for knapsack candidates.
//!
//! # Initialization
//!
//! - [`random_population`]: every gene set independently with probability 1/2
//!
//! # Crossover
//!
//! - [`uniform_crossover`]: each child gene taken from either parent with
//!   probability 1/2, independently per position
//!
//! # Mutation
//!
//! - [`swap_mutation`]: with probability `rate`, exchange two random positions
//!
//! # Repair
//!
//! - [`repair`]: single probabilistic drop pass over an overweight candidate
//!
//! Mutation and repair modify their argument in place. They are applied to
//! freshly built children only, before the children join a population.
//!
//! # References
//!
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"
//! - Michalewicz (1996), *Genetic Algorithms + Data Structures = Evolution
//!   Programs*, ch. 4 (repair for the knapsack problem)

use super::problem::KnapsackProblem;
use super::types::Candidate;
use rand::Rng;

/// Probability that a gene is set in a random candidate.
pub const INITIAL_GENE_PROBABILITY: f64 = 0.5;

/// Probability that repair clears a packed gene.
pub const REPAIR_DROP_PROBABILITY: f64 = 0.5;

// ============================================================================
// Initialization
// ============================================================================

/// Creates one random candidate of length `num_items`.
pub fn random_candidate<R: Rng>(num_items: usize, rng: &mut R) -> Candidate {
    (0..num_items)
        .map(|_| rng.random_bool(INITIAL_GENE_PROBABILITY))
        .collect::<Vec<_>>()
        .into()
}

/// Creates `population_size` random candidates of length `num_items`.
pub fn random_population<R: Rng>(
    population_size: usize,
    num_items: usize,
    rng: &mut R,
) -> Vec<Candidate> {
    (0..population_size)
        .map(|_| random_candidate(num_items, rng))
        .collect()
}

// ============================================================================
// Crossover
// ============================================================================

/// Uniform crossover.
///
/// For every position independently, the child takes `parent1`'s gene with
/// probability 1/2, otherwise `parent2`'s. Parents are not modified; two
/// calls with the same parents generally yield different children.
///
/// # Complexity
/// O(n)
///
/// # Panics
/// Panics if parents have different lengths.
pub fn uniform_crossover<R: Rng>(
    parent1: &Candidate,
    parent2: &Candidate,
    rng: &mut R,
) -> Candidate {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );

    parent1
        .genes()
        .iter()
        .zip(parent2.genes())
        .map(|(&a, &b)| if rng.random_bool(0.5) { a } else { b })
        .collect::<Vec<_>>()
        .into()
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation.
///
/// With probability `rate`, picks two positions uniformly and independently
/// and swaps their genes. The positions may coincide, in which case nothing
/// changes. With probability `1 - rate` no draw beyond the coin flip is made.
///
/// # Complexity
/// O(1)
///
/// # Panics
/// Panics if `rate` is outside `[0, 1]`.
pub fn swap_mutation<R: Rng>(candidate: &mut Candidate, rate: f64, rng: &mut R) {
    if !rng.random_bool(rate) {
        return;
    }
    let n = candidate.len();
    if n == 0 {
        return;
    }
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    candidate.genes_mut().swap(i, j);
}

// ============================================================================
// Repair
// ============================================================================

/// Probabilistic repair of an overweight candidate.
///
/// When the packed weight is within capacity this is a no-op. Otherwise each
/// packed gene is cleared independently with probability 1/2, in one pass.
/// Weight is not re-checked afterwards, so the result may still be
/// overweight (and will then score 0). Genes are only ever cleared.
///
/// Returns `true` if the candidate was overweight and a drop pass ran.
pub fn repair<R: Rng>(candidate: &mut Candidate, problem: &KnapsackProblem, rng: &mut R) -> bool {
    if problem.total_weight(candidate) <= problem.capacity() {
        return false;
    }
    for gene in candidate.genes_mut().iter_mut().filter(|g| **g) {
        if rng.random_bool(REPAIR_DROP_PROBABILITY) {
            *gene = false;
        }
    }
    true
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::{Item, ItemCatalog};
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn uniform_problem(n: usize, weight: u32, capacity: u64) -> KnapsackProblem {
        let catalog = ItemCatalog::new((0..n).map(|_| Item::new(3, weight)).collect());
        KnapsackProblem::new(catalog, capacity)
    }

    // ---- Initialization ----

    #[test]
    fn test_random_population_shape() {
        let mut rng = create_rng(42);
        let pop = random_population(30, 17, &mut rng);
        assert_eq!(pop.len(), 30);
        assert!(pop.iter().all(|c| c.len() == 17));
    }

    #[test]
    fn test_random_population_gene_balance() {
        let mut rng = create_rng(42);
        let pop = random_population(100, 100, &mut rng);
        let set: usize = pop.iter().map(Candidate::packed_count).sum();
        let ratio = set as f64 / 10_000.0;
        assert!(
            (0.45..0.55).contains(&ratio),
            "expected about half the genes set, got {ratio}"
        );
    }

    #[test]
    fn test_random_population_empty() {
        let mut rng = create_rng(1);
        assert!(random_population(0, 10, &mut rng).is_empty());
    }

    // ---- Crossover ----

    #[test]
    fn test_crossover_identical_parents() {
        let mut rng = create_rng(42);
        let p = Candidate::from_bits(&[1, 0, 1, 1, 0]);
        assert_eq!(uniform_crossover(&p, &p, &mut rng), p);
    }

    #[test]
    fn test_crossover_complementary_parents_mix() {
        let mut rng = create_rng(42);
        let a = Candidate::new(vec![true; 64]);
        let b = Candidate::new(vec![false; 64]);
        let child = uniform_crossover(&a, &b, &mut rng);
        let from_a = child.packed_count();
        assert!(from_a > 10 && from_a < 54, "expected a mix, got {from_a}/64");
    }

    #[test]
    fn test_crossover_children_differ_across_calls() {
        let mut rng = create_rng(7);
        let a = Candidate::new(vec![true; 64]);
        let b = Candidate::new(vec![false; 64]);
        let c1 = uniform_crossover(&a, &b, &mut rng);
        let c2 = uniform_crossover(&a, &b, &mut rng);
        assert_ne!(c1, c2);
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_crossover_length_mismatch_panics() {
        let mut rng = create_rng(42);
        uniform_crossover(&Candidate::empty(3), &Candidate::empty(4), &mut rng);
    }

    // ---- Mutation ----

    #[test]
    fn test_mutation_rate_zero_is_noop() {
        let mut rng = create_rng(42);
        let original = Candidate::from_bits(&[1, 0, 0, 1, 1, 0]);
        for _ in 0..200 {
            let mut c = original.clone();
            swap_mutation(&mut c, 0.0, &mut rng);
            assert_eq!(c, original);
        }
    }

    #[test]
    fn test_mutation_rate_one_preserves_gene_multiset() {
        let mut rng = create_rng(42);
        let original = Candidate::from_bits(&[1, 0, 0, 1, 1, 0, 0, 0]);
        let mut changed = false;
        for _ in 0..200 {
            let mut c = original.clone();
            swap_mutation(&mut c, 1.0, &mut rng);
            assert_eq!(c.len(), original.len());
            assert_eq!(c.packed_count(), original.packed_count());
            let diff = (0..c.len())
                .filter(|&i| c.is_packed(i) != original.is_packed(i))
                .count();
            assert!(diff == 0 || diff == 2, "a swap changes 0 or 2 positions");
            changed |= diff == 2;
        }
        assert!(changed, "rate 1.0 should eventually swap unequal genes");
    }

    #[test]
    fn test_mutation_uniform_candidate_unchanged() {
        let mut rng = create_rng(42);
        for bit in [0u8, 1] {
            let original = Candidate::from_bits(&[bit; 12]);
            let mut c = original.clone();
            for _ in 0..100 {
                swap_mutation(&mut c, 1.0, &mut rng);
            }
            assert_eq!(c, original);
        }
    }

    #[test]
    fn test_mutation_empty_candidate() {
        let mut rng = create_rng(42);
        let mut c = Candidate::empty(0);
        swap_mutation(&mut c, 1.0, &mut rng);
        assert!(c.is_empty());
    }

    // ---- Repair ----

    #[test]
    fn test_repair_feasible_is_noop() {
        let problem = uniform_problem(10, 2, 20);
        let mut rng = create_rng(42);
        let original = Candidate::new(vec![true; 10]);
        let mut c = original.clone();
        assert!(!repair(&mut c, &problem, &mut rng));
        assert_eq!(c, original);
    }

    #[test]
    fn test_repair_overweight_drops_about_half() {
        let problem = uniform_problem(200, 1, 10);
        let mut rng = create_rng(42);
        let mut c = Candidate::new(vec![true; 200]);
        assert!(repair(&mut c, &problem, &mut rng));
        let kept = c.packed_count();
        assert!(kept > 70 && kept < 130, "expected about half kept, got {kept}");
    }

    #[test]
    fn test_repair_single_pass_may_stay_infeasible() {
        // 200 unit items, capacity 10: one halving pass cannot get under 10.
        let problem = uniform_problem(200, 1, 10);
        let mut rng = create_rng(3);
        let mut c = Candidate::new(vec![true; 200]);
        repair(&mut c, &problem, &mut rng);
        assert!(!problem.is_feasible(&c));
        assert_eq!(problem.fitness(&c), 0);
    }

    // ---- Properties ----

    fn bits(n: std::ops::Range<usize>) -> impl Strategy<Value = Vec<bool>> {
        prop::collection::vec(any::<bool>(), n)
    }

    proptest! {
        #[test]
        fn prop_crossover_genes_come_from_parents(
            pair in (1usize..80).prop_flat_map(|n| (bits(n..n + 1), bits(n..n + 1))),
            seed in any::<u64>(),
        ) {
            let (a, b) = (Candidate::new(pair.0), Candidate::new(pair.1));
            let mut rng = create_rng(seed);
            let child = uniform_crossover(&a, &b, &mut rng);
            prop_assert_eq!(child.len(), a.len());
            for i in 0..child.len() {
                prop_assert!(child.is_packed(i) == a.is_packed(i) || child.is_packed(i) == b.is_packed(i));
            }
        }

        #[test]
        fn prop_mutation_keeps_length_and_count(
            genes in bits(0..80),
            rate in 0.0f64..=1.0,
            seed in any::<u64>(),
        ) {
            let original = Candidate::new(genes);
            let mut c = original.clone();
            let mut rng = create_rng(seed);
            swap_mutation(&mut c, rate, &mut rng);
            prop_assert_eq!(c.len(), original.len());
            prop_assert_eq!(c.packed_count(), original.packed_count());
        }

        #[test]
        fn prop_repair_only_clears_genes(
            genes in bits(1..80),
            weight in 1u32..=5,
            capacity in 0u64..150,
            seed in any::<u64>(),
        ) {
            let problem = uniform_problem(genes.len(), weight, capacity);
            let original = Candidate::new(genes);
            let mut c = original.clone();
            let mut rng = create_rng(seed);
            repair(&mut c, &problem, &mut rng);

            prop_assert!(problem.total_weight(&c) <= problem.total_weight(&original));
            for i in 0..c.len() {
                if !original.is_packed(i) {
                    prop_assert!(!c.is_packed(i));
                }
            }
            if problem.is_feasible(&original) {
                prop_assert_eq!(&c, &original);
            }
        }
    }
}
