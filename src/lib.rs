//! Genetic-algorithm heuristic for the 0/1 knapsack problem.
//!
//! The solver evolves a population of binary inclusion vectors over a fixed
//! item catalog:
//!
//! - **Selection**: size-2 tournament, ties go to the first draw.
//! - **Crossover**: uniform, every gene picked independently from either parent.
//! - **Mutation**: with a fixed probability, swap two random genes.
//! - **Repair**: overweight children drop each packed item with probability
//!   one half, in a single pass that does not guarantee feasibility.
//!
//! Overweight candidates score 0; feasible ones score their total value.
//! The driver tracks the best candidate seen across all generations and
//! samples its fitness every few iterations into a history series that a
//! [`HistorySink`](ga::HistorySink) can consume.
//!
//! # Quick start
//!
//! ```
//! use knapsack_ga::ga::GaConfig;
//!
//! let config = GaConfig::default().with_max_iterations(100).with_seed(7);
//! let (problem, result) = knapsack_ga::solve(&config).expect("valid config");
//! assert_eq!(result.generations, 100);
//! assert_eq!(result.history.len(), 5);
//! assert!(result.best_fitness == 0 || problem.is_feasible(result.best.as_ref().unwrap()));
//! ```

pub mod ga;
pub mod random;

use ga::{ConfigError, GaConfig, GaResult, GaRunner, KnapsackProblem};

/// Generates a random catalog from `config` and runs the GA on it.
///
/// The catalog and the evolution share one generator, seeded from
/// [`GaConfig::seed`] when set, so seeded calls are fully reproducible.
pub fn solve(config: &GaConfig) -> Result<(KnapsackProblem, GaResult), ConfigError> {
    config.validate()?;
    let mut rng = GaRunner::rng_for(config);
    let problem = KnapsackProblem::generate(config, &mut rng);
    let result = GaRunner::run_with_rng(&problem, config, &mut rng)?;
    Ok((problem, result))
}
