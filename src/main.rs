//! Command-line front end: runs the knapsack GA and prints the convergence
//! history, either as a text chart or as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use knapsack_ga::ga::{Candidate, Fitness, GaConfig, HistorySample};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

const BAR_WIDTH: usize = 50;

#[derive(Parser, Debug)]
#[command(
    name = "knapsack-ga",
    version,
    about = "Genetic-algorithm heuristic for the 0/1 knapsack problem"
)]
struct Args {
    /// Knapsack capacity
    #[arg(short = 'P', long, default_value_t = 150)]
    capacity: u64,

    /// Number of randomly generated items
    #[arg(short = 'n', long, default_value_t = 100)]
    num_items: usize,

    /// Candidates per generation (must be even)
    #[arg(short = 'p', long, default_value_t = 100)]
    population_size: usize,

    /// Number of generations
    #[arg(short = 'i', long, default_value_t = 800)]
    max_iterations: usize,

    /// Per-child probability of a swap mutation
    #[arg(short = 'm', long, default_value_t = 0.05)]
    mutation_rate: f64,

    /// Record best-so-far fitness every this many iterations
    #[arg(long, default_value_t = 20)]
    history_interval: usize,

    /// Seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Evaluate fitness in parallel (requires the `parallel` feature)
    #[arg(long)]
    parallel: bool,

    /// Print the result as JSON instead of a text chart
    #[arg(long)]
    json: bool,
}

impl Args {
    fn to_config(&self) -> GaConfig {
        let mut config = GaConfig::default()
            .with_capacity(self.capacity)
            .with_num_items(self.num_items)
            .with_population_size(self.population_size)
            .with_max_iterations(self.max_iterations)
            .with_mutation_rate(self.mutation_rate)
            .with_history_interval(self.history_interval)
            .with_parallel(self.parallel);
        config.seed = self.seed;
        config
    }
}

#[derive(Serialize)]
struct Report<'a> {
    best_fitness: Fitness,
    best_weight: u64,
    best_solution: Option<Vec<u8>>,
    generations: usize,
    history: &'a [HistorySample],
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.to_config();

    let (problem, result) = knapsack_ga::solve(&config).context("invalid configuration")?;
    let best_weight = result
        .best
        .as_ref()
        .map(|c| problem.total_weight(c))
        .unwrap_or(0);

    if args.json {
        let report = Report {
            best_fitness: result.best_fitness,
            best_weight,
            best_solution: result.best.as_ref().map(Candidate::to_bits),
            generations: result.generations,
            history: &result.history,
        };
        let json = serde_json::to_string_pretty(&report).context("serializing report")?;
        println!("{json}");
        return Ok(());
    }

    println!("{:>9}  {:>7}", "iteration", "fitness");
    let max = result.history.iter().map(|s| s.fitness).max().unwrap_or(0);
    for sample in &result.history {
        println!(
            "{:>9}  {:>7}  {}",
            sample.iteration,
            sample.fitness,
            bar(sample.fitness, max)
        );
    }
    println!();
    println!(
        "best fitness {} (weight {}/{}) after {} generations",
        result.best_fitness,
        best_weight,
        problem.capacity(),
        result.generations
    );
    if let Some(best) = &result.best {
        println!("best solution {best}");
    }
    Ok(())
}

fn bar(value: Fitness, max: Fitness) -> String {
    if max == 0 {
        return String::new();
    }
    let len = (value as u128 * BAR_WIDTH as u128 / max as u128) as usize;
    "#".repeat(len)
}
