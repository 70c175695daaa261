//! Genetic Algorithm for the 0/1 knapsack problem.
//!
//! # Key Types
//!
//! - [`ItemCatalog`]: Immutable `(value, weight)` list, one item per gene
//! - [`KnapsackProblem`]: Catalog plus capacity; computes fitness
//! - [`Candidate`]: Binary inclusion vector over the catalog
//! - [`GaConfig`]: Run parameters (capacity, sizes, rates, seed)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`EvolutionState`]: Steppable per-run state (population, best, history)
//! - [`GaResult`]: Best solution and sampled fitness history
//!
//! # Submodules
//!
//! - [`operators`]: Population generation, uniform crossover, swap mutation, repair
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Martello & Toth (1990), *Knapsack Problems: Algorithms and Computer Implementations*

mod catalog;
mod config;
mod history;
pub mod operators;
mod problem;
mod runner;
mod selection;
mod types;

pub use catalog::{Item, ItemCatalog};
pub use config::{ConfigError, GaConfig};
pub use history::{HistorySample, HistorySink};
pub use problem::KnapsackProblem;
pub use runner::{EvolutionState, GaResult, GaRunner};
pub use selection::{tournament, TOURNAMENT_SIZE};
pub use types::{Candidate, Fitness};
