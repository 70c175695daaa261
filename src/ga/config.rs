//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control a run: the knapsack
//! instance dimensions, population sizing, the mutation rate and the
//! history sampling interval.

use super::problem::KnapsackProblem;

/// A rejected configuration value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("population_size must be even, got {0}")]
    OddPopulationSize(usize),
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),
    #[error("num_items must be at least 1")]
    NoItems,
    #[error("max_iterations must be at least 1")]
    ZeroIterations,
    #[error("history_interval must be at least 1")]
    ZeroHistoryInterval,
    #[error("mutation_rate must be between 0.0 and 1.0, got: {0}")]
    MutationRateOutOfRange(f64),
    #[error("catalog has {actual} items but num_items is {expected}")]
    CatalogSizeMismatch { expected: usize, actual: usize },
    #[error("problem capacity is {actual} but capacity is {expected}")]
    CapacityMismatch { expected: u64, actual: u64 },
}

/// Configuration for the knapsack GA.
///
/// # Defaults
///
/// ```
/// use knapsack_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.capacity, 150);
/// assert_eq!(config.num_items, 100);
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_iterations, 800);
/// assert_eq!(config.history_interval, 20);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use knapsack_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_capacity(60)
///     .with_num_items(40)
///     .with_population_size(50)
///     .with_mutation_rate(0.1)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// assert!(config.clone().with_population_size(51).validate().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Knapsack capacity `P`: maximum total weight of a feasible candidate.
    pub capacity: u64,

    /// Number of items in a generated catalog (and genes per candidate).
    pub num_items: usize,

    /// Number of candidates per generation. Must be even: each generation
    /// is built from `population_size / 2` parent pairs, two children each.
    pub population_size: usize,

    /// Number of generations to run. The only termination condition.
    pub max_iterations: usize,

    /// Probability (0.0–1.0) that a child gets a single swap mutation.
    pub mutation_rate: f64,

    /// A history sample is recorded every `history_interval` iterations.
    pub history_interval: usize,

    /// Whether to evaluate fitness in parallel with rayon.
    ///
    /// Only has an effect with the `parallel` feature enabled. Results are
    /// identical to the sequential path for the same seed.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            capacity: 150,
            num_items: 100,
            population_size: 100,
            max_iterations: 800,
            mutation_rate: 0.05,
            history_interval: 20,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the knapsack capacity.
    pub fn with_capacity(mut self, capacity: u64) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the catalog size.
    pub fn with_num_items(mut self, n: usize) -> Self {
        self.num_items = n;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the mutation rate. Out-of-range values are rejected by
    /// [`validate`](Self::validate), not clamped.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the history sampling interval.
    pub fn with_history_interval(mut self, n: usize) -> Self {
        self.history_interval = n;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of history samples a full run produces.
    pub fn expected_history_len(&self) -> usize {
        if self.history_interval == 0 {
            0
        } else {
            self.max_iterations / self.history_interval
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.population_size % 2 != 0 {
            return Err(ConfigError::OddPopulationSize(self.population_size));
        }
        if self.num_items == 0 {
            return Err(ConfigError::NoItems);
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        if self.history_interval == 0 {
            return Err(ConfigError::ZeroHistoryInterval);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRateOutOfRange(self.mutation_rate));
        }
        Ok(())
    }

    /// Validates the configuration and checks that `problem` matches its
    /// catalog size and capacity.
    pub fn validate_for(&self, problem: &KnapsackProblem) -> Result<(), ConfigError> {
        self.validate()?;
        if problem.num_items() != self.num_items {
            return Err(ConfigError::CatalogSizeMismatch {
                expected: self.num_items,
                actual: problem.num_items(),
            });
        }
        if problem.capacity() != self.capacity {
            return Err(ConfigError::CapacityMismatch {
                expected: self.capacity,
                actual: problem.capacity(),
            });
        }
        Ok(())
    }
}
