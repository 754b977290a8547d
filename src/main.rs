//! knapsack-ga CLI - evolve a 0/1 knapsack packing with a genetic algorithm.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use knapsack_ga::{
    evolution::{EvolutionLauncher, EvolutionOptions, KnapsackChallenge, LogLevel},
    rng::RandomNumberGenerator,
    Catalog,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "knapsack-ga")]
#[command(about = "Solve a 0/1 knapsack instance with a genetic algorithm", long_about = None)]
struct Cli {
    /// JSON item catalog; defaults to the built-in 22-item inventory
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Bag capacity, overrides the catalog's own
    #[arg(long)]
    capacity: Option<u64>,
    /// Number of fittest chromosomes carried over unchanged
    #[arg(long, default_value = "4")]
    elitism: usize,
    /// Chromosomes per generation
    #[arg(long, default_value = "200")]
    population_size: usize,
    /// Mutation probability in percent (0-100)
    #[arg(long, default_value = "10")]
    mutation: u8,
    /// Number of generations
    #[arg(long, default_value = "3000")]
    iterations: usize,
    /// Probability that a gene starts out selected
    #[arg(long, default_value = "0.5")]
    inclusion_probability: f64,
    /// Population size from which fitness is evaluated in parallel
    #[arg(long, default_value = "1000")]
    parallel_threshold: usize,
    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
    /// Only print the final solution
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut catalog = match &cli.catalog {
        Some(path) => Catalog::from_json_file(path)
            .with_context(|| format!("failed to load catalog from {}", path.display()))?,
        None => Catalog::reference(),
    };
    if let Some(capacity) = cli.capacity {
        catalog = catalog.with_capacity(capacity);
    }

    let options = EvolutionOptions::builder()
        .num_generations(cli.iterations)
        .population_size(cli.population_size)
        .elitism(cli.elitism)
        .mutation_percent(cli.mutation)
        .inclusion_probability(cli.inclusion_probability)
        .parallel_threshold(cli.parallel_threshold)
        .log_level(LogLevel::None)
        .build();

    let mut rng = match cli.seed {
        Some(seed) => RandomNumberGenerator::from_seed(seed),
        None => RandomNumberGenerator::new(),
    };

    info!(items = catalog.len(), capacity = catalog.capacity(), "loaded catalog");

    let launcher = EvolutionLauncher::with_default_strategy(KnapsackChallenge::new(catalog));
    let result = launcher.evolve_with(&options, &mut rng, |report| {
        if !cli.quiet {
            println!(
                "ITERATION[{}] Best result -> {}",
                report.generation, report.best_fitness
            );
        }
    })?;

    let catalog = launcher.challenge().catalog();
    let best = &result.best_ever;
    println!(
        "Best packing: value {}, weight {}/{}",
        best.fitness,
        best.chromosome.total_weight(catalog),
        catalog.capacity()
    );
    for item in best.chromosome.selected_items(catalog) {
        println!("  {} (weight {}, value {})", item.name, item.weight, item.value);
    }

    Ok(())
}
