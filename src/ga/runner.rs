//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation → repair
//! → replacement → best tracking → repeat.
//!
//! All per-run state lives in an [`EvolutionState`], so the loop can also be
//! driven one generation at a time with [`GaRunner::step`].

use super::config::{ConfigError, GaConfig};
use super::history::{HistorySample, HistorySink};
use super::operators::{random_population, repair, swap_mutation, uniform_crossover};
use super::problem::KnapsackProblem;
use super::selection::{tournament, TOURNAMENT_SIZE};
use super::types::{Candidate, Fitness};
use crate::random::create_rng;
use rand::rngs::StdRng;
use rand::Rng;
use tracing::instrument;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The best candidate found during the entire run.
    ///
    /// `None` when no generation ever produced a candidate with positive
    /// fitness.
    pub best: Option<Candidate>,

    /// Fitness of `best`, or 0 when there is none.
    pub best_fitness: Fitness,

    /// Total number of generations executed.
    pub generations: usize,

    /// Best-so-far fitness sampled every `history_interval` iterations.
    pub history: Vec<HistorySample>,
}

/// Mutable state of one run.
///
/// Candidates are never modified once they are part of `population` or
/// `best`; each generation builds a fresh population.
#[derive(Debug, Clone)]
pub struct EvolutionState {
    population: Vec<Candidate>,
    fitness: Vec<Fitness>,
    iteration: usize,
    best: Option<Candidate>,
    best_fitness: Fitness,
    history: Vec<HistorySample>,
}

impl EvolutionState {
    /// Creates the state with a random initial population.
    pub fn new<R: Rng>(problem: &KnapsackProblem, config: &GaConfig, rng: &mut R) -> Self {
        let population = random_population(config.population_size, problem.num_items(), rng);
        Self::from_population(problem, population, config.parallel)
    }

    /// Creates the state from a given initial population.
    ///
    /// The initial population does not count as a generation and does not
    /// contribute to the best-so-far.
    pub fn from_population(
        problem: &KnapsackProblem,
        population: Vec<Candidate>,
        parallel: bool,
    ) -> Self {
        let fitness = evaluate_population(problem, &population, parallel);
        Self {
            population,
            fitness,
            iteration: 0,
            best: None,
            best_fitness: 0,
            history: Vec::new(),
        }
    }

    /// Current population.
    pub fn population(&self) -> &[Candidate] {
        &self.population
    }

    /// Fitness of each member of [`population`](Self::population), same order.
    pub fn fitness(&self) -> &[Fitness] {
        &self.fitness
    }

    /// Number of generations completed so far.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Best candidate seen so far.
    pub fn best(&self) -> Option<&Candidate> {
        self.best.as_ref()
    }

    pub fn best_fitness(&self) -> Fitness {
        self.best_fitness
    }

    /// Samples recorded so far.
    pub fn history(&self) -> &[HistorySample] {
        &self.history
    }

    /// Consumes the state into a result.
    pub fn into_result(self) -> GaResult {
        GaResult {
            best: self.best,
            best_fitness: self.best_fitness,
            generations: self.iteration,
            history: self.history,
        }
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use knapsack_ga::ga::{GaConfig, GaRunner, Item, ItemCatalog, KnapsackProblem};
///
/// let catalog = ItemCatalog::new(vec![Item::new(5, 4), Item::new(6, 5), Item::new(3, 2), Item::new(4, 3)]);
/// let problem = KnapsackProblem::new(catalog, 10);
/// let config = GaConfig::default()
///     .with_capacity(10)
///     .with_num_items(4)
///     .with_population_size(4)
///     .with_max_iterations(20)
///     .with_seed(42);
///
/// let result = GaRunner::run(&problem, &config).unwrap();
/// assert_eq!(result.generations, 20);
/// assert!(result.best_fitness <= 13);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Builds the generator for a run: seeded from `config.seed`, or from
    /// a fresh random seed.
    pub fn rng_for(config: &GaConfig) -> StdRng {
        match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        }
    }

    /// Runs the GA optimization.
    pub fn run(problem: &KnapsackProblem, config: &GaConfig) -> Result<GaResult, ConfigError> {
        let mut rng = Self::rng_for(config);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs the GA with a caller-supplied random source.
    pub fn run_with_rng<R: Rng>(
        problem: &KnapsackProblem,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult, ConfigError> {
        let mut samples: Vec<HistorySample> = Vec::new();
        Self::run_with_sink(problem, config, rng, &mut samples)
    }

    /// Runs the GA, forwarding each history sample to `sink` as it is
    /// recorded. The returned result carries the full history as well.
    #[instrument(
        level = "info",
        skip_all,
        fields(
            num_items = problem.num_items(),
            capacity = problem.capacity(),
            population_size = config.population_size,
            max_iterations = config.max_iterations,
            mutation_rate = config.mutation_rate,
        )
    )]
    pub fn run_with_sink<R: Rng, S: HistorySink + ?Sized>(
        problem: &KnapsackProblem,
        config: &GaConfig,
        rng: &mut R,
        sink: &mut S,
    ) -> Result<GaResult, ConfigError> {
        config.validate_for(problem)?;

        tracing::info!("Generating initial population");
        let mut state = EvolutionState::new(problem, config, rng);

        while state.iteration < config.max_iterations {
            if let Some(sample) = Self::step(problem, config, &mut state, rng) {
                sink.record(sample);
            }
        }

        tracing::info!(
            best_fitness = state.best_fitness,
            generations = state.iteration,
            "Evolution finished"
        );
        Ok(state.into_result())
    }

    /// Advances `state` by one generation.
    ///
    /// Returns the history sample recorded at this iteration, if any. The
    /// caller is expected to have validated `config` against `problem`.
    pub fn step<R: Rng>(
        problem: &KnapsackProblem,
        config: &GaConfig,
        state: &mut EvolutionState,
        rng: &mut R,
    ) -> Option<HistorySample> {
        let mut next_gen: Vec<Candidate> = Vec::with_capacity(config.population_size);

        for _ in 0..config.population_size / 2 {
            let p1 = tournament(&state.fitness, TOURNAMENT_SIZE, rng);
            let p2 = tournament(&state.fitness, TOURNAMENT_SIZE, rng);
            let (parent1, parent2) = (&state.population[p1], &state.population[p2]);

            let mut child1 = uniform_crossover(parent1, parent2, rng);
            let mut child2 = uniform_crossover(parent1, parent2, rng);

            swap_mutation(&mut child1, config.mutation_rate, rng);
            swap_mutation(&mut child2, config.mutation_rate, rng);

            repair(&mut child1, problem, rng);
            repair(&mut child2, problem, rng);

            next_gen.push(child1);
            next_gen.push(child2);
        }

        state.fitness = evaluate_population(problem, &next_gen, config.parallel);
        state.population = next_gen;
        state.iteration += 1;

        let gen_best = find_best(&state.fitness);
        let gen_best_fitness = state.fitness[gen_best];
        if gen_best_fitness > state.best_fitness {
            tracing::debug!(
                iteration = state.iteration,
                previous = state.best_fitness,
                best_fitness = gen_best_fitness,
                "Best-so-far improved"
            );
            state.best_fitness = gen_best_fitness;
            state.best = Some(state.population[gen_best].clone());
        }

        if state.iteration % config.history_interval == 0 {
            let sample = HistorySample {
                iteration: state.iteration,
                fitness: state.best_fitness,
            };
            tracing::debug!(
                iteration = sample.iteration,
                fitness = sample.fitness,
                "History sample recorded"
            );
            state.history.push(sample);
            Some(sample)
        } else {
            None
        }
    }
}

/// Evaluate all candidates in the population.
fn evaluate_population(
    problem: &KnapsackProblem,
    population: &[Candidate],
    parallel: bool,
) -> Vec<Fitness> {
    if parallel {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            return population.par_iter().map(|c| problem.fitness(c)).collect();
        }
    }
    population.iter().map(|c| problem.fitness(c)).collect()
}

/// Index of the first candidate with the highest fitness.
///
/// # Panics
/// Panics if `fitness` is empty.
fn find_best(fitness: &[Fitness]) -> usize {
    assert!(!fitness.is_empty(), "population must not be empty");
    let mut best = 0;
    for (i, &f) in fitness.iter().enumerate().skip(1) {
        if f > fitness[best] {
            best = i;
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================
