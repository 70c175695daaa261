//! Tournament selection.
//!
//! Selection picks parents by index into a population whose fitness values
//! were computed once for the generation. Higher fitness is better.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::Fitness;
use rand::Rng;

/// Tournament size used by the evolution driver.
pub const TOURNAMENT_SIZE: usize = 2;

/// Tournament selection: draw `k` indices uniformly with replacement and
/// return the one with the highest fitness.
///
/// A later draw only replaces the current winner when its fitness is
/// strictly greater, so ties go to the earliest draw. The same index may
/// be drawn more than once.
///
/// # Complexity
/// O(k) per selection
///
/// # Panics
/// Panics if `fitness` is empty.
pub fn tournament<R: Rng>(fitness: &[Fitness], k: usize, rng: &mut R) -> usize {
    assert!(!fitness.is_empty(), "cannot select from empty population");

    let k = k.max(1);
    let n = fitness.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if fitness[idx] > fitness[best_idx] {
            best_idx = idx;
        }
    }
    best_idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_tournament_favors_best() {
        let fitness = [10, 5, 1, 8];
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            counts[tournament(&fitness, TOURNAMENT_SIZE, &mut rng)] += 1;
        }
        // P(best wins) = 1 - (3/4)^2 = 7/16
        assert!(
            counts[0] > 4000,
            "expected best to win ~44% of tournaments, got {counts:?}"
        );
        // P(worst wins) = (1/4)^2 = 1/16
        assert!(counts[2] < 1000, "worst won too often: {counts:?}");
    }

    #[test]
    fn test_tournament_size_1_is_random() {
        let fitness = [10, 5, 1, 8];
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            counts[tournament(&fitness, 1, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 2000, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_tie_goes_to_first_draw() {
        // Equal fitness everywhere, so only the tie-break decides.
        let fitness = [7, 7, 7, 7];
        let mut rng = create_rng(5);
        for _ in 0..1000 {
            let mut probe = rng.clone();
            let first = probe.random_range(0..fitness.len());
            let chosen = tournament(&fitness, TOURNAMENT_SIZE, &mut rng);
            assert_eq!(chosen, first, "equal fitness must keep the first draw");
        }
    }

    #[test]
    fn test_strictly_better_second_draw_wins() {
        let fitness = [3, 9];
        let mut rng = create_rng(11);
        for _ in 0..1000 {
            let mut probe = rng.clone();
            let a = probe.random_range(0..2);
            let b = probe.random_range(0..2);
            let chosen = tournament(&fitness, TOURNAMENT_SIZE, &mut rng);
            let expected = if fitness[b] > fitness[a] { b } else { a };
            assert_eq!(chosen, expected);
        }
    }

    #[test]
    fn test_single_individual() {
        let mut rng = create_rng(42);
        assert_eq!(tournament(&[5], TOURNAMENT_SIZE, &mut rng), 0);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let mut rng = create_rng(42);
        tournament(&[], TOURNAMENT_SIZE, &mut rng);
    }
}
