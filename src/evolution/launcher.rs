use tracing::{debug, info, instrument};

use super::{
    challenge::KnapsackChallenge,
    options::{EvolutionOptions, LogLevel},
};
use crate::{
    error::{GeneticError, OptionExt, Result},
    population::{Population, RankedPopulation, ScoredChromosome},
    rng::RandomNumberGenerator,
    strategy::{BreedStrategy, ElitistStrategy},
};

/// Best fitness of one generation, reported before the next generation is bred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationReport {
    pub generation: usize,
    pub best_fitness: u64,
}

/// Represents the result of an evolution run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionResult {
    /// The fittest chromosome of the final population.
    pub best: ScoredChromosome,
    /// The fittest chromosome seen in any generation.
    pub best_ever: ScoredChromosome,
    /// One report per generation, in order.
    pub generations: Vec<GenerationReport>,
    /// The final population, evaluated and sorted.
    pub population: RankedPopulation,
}

/// Drives the evolution: evaluate, rank, report, breed, repeated for a fixed
/// number of generations.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<Strategy = ElitistStrategy>
where
    Strategy: BreedStrategy,
{
    strategy: Strategy,
    challenge: KnapsackChallenge,
}

impl EvolutionLauncher<ElitistStrategy> {
    /// Creates a launcher with roulette-wheel elitist breeding.
    pub fn with_default_strategy(challenge: KnapsackChallenge) -> Self {
        Self::new(ElitistStrategy::new(), challenge)
    }
}

impl<Strategy> EvolutionLauncher<Strategy>
where
    Strategy: BreedStrategy,
{
    /// Creates a new `EvolutionLauncher` instance with the specified breeding strategy and challenge.
    pub fn new(strategy: Strategy, challenge: KnapsackChallenge) -> Self {
        Self {
            strategy,
            challenge,
        }
    }

    pub fn challenge(&self) -> &KnapsackChallenge {
        &self.challenge
    }

    /// Evolves a random initial population and collects every generation report.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `options` are invalid for the catalog.
    pub fn evolve(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult> {
        self.evolve_with(options, rng, |_| {})
    }

    /// Like [`evolve`](Self::evolve), additionally handing each report to
    /// `on_generation` as soon as the generation has been ranked.
    pub fn evolve_with<F>(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
        on_generation: F,
    ) -> Result<EvolutionResult>
    where
        F: FnMut(&GenerationReport),
    {
        options.validate(self.challenge.catalog())?;

        let population = Population::random(
            options.get_population_size(),
            self.challenge.catalog().len(),
            options.get_inclusion_probability(),
            rng,
        );

        self.run(options, population, rng, on_generation)
    }

    /// Evolves starting from `population` instead of a random one.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `options` are invalid or the
    /// population size differs from the configured one, and
    /// `GeneticError::GeneLength` if a chromosome does not match the catalog.
    pub fn evolve_from<F>(
        &self,
        options: &EvolutionOptions,
        population: Population,
        rng: &mut RandomNumberGenerator,
        on_generation: F,
    ) -> Result<EvolutionResult>
    where
        F: FnMut(&GenerationReport),
    {
        let catalog = self.challenge.catalog();
        options.validate(catalog)?;

        if population.len() != options.get_population_size() {
            return Err(GeneticError::Configuration(format!(
                "Initial population has {} members, expected {}",
                population.len(),
                options.get_population_size()
            )));
        }
        if let Some(bad) = population.members().iter().find(|c| c.len() != catalog.len()) {
            return Err(GeneticError::GeneLength {
                expected: catalog.len(),
                actual: bad.len(),
            });
        }

        self.run(options, population, rng, on_generation)
    }

    /// Runs the generation loop over an already validated configuration and population.
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            population_size = options.get_population_size(),
            generations = options.get_num_generations()
        )
    )]
    fn run<F>(
        &self,
        options: &EvolutionOptions,
        mut population: Population,
        rng: &mut RandomNumberGenerator,
        mut on_generation: F,
    ) -> Result<EvolutionResult>
    where
        F: FnMut(&GenerationReport),
    {
        let catalog = self.challenge.catalog();

        debug!(
            items = catalog.len(),
            capacity = catalog.capacity(),
            elitism = options.get_elitism(),
            mutation_percent = options.get_mutation_percent(),
            "starting evolution"
        );

        let threshold = options.get_parallel_threshold();
        let mut generations = Vec::with_capacity(options.get_num_generations());
        let mut best_ever: Option<ScoredChromosome> = None;

        for generation in 0..options.get_num_generations() {
            let ranked = population.evaluate(&self.challenge, threshold);
            let best = ranked
                .best()
                .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;

            let report = GenerationReport {
                generation,
                best_fitness: best.fitness,
            };

            match options.get_log_level() {
                LogLevel::Minimal => info!(generation, best_fitness = best.fitness, "generation ranked"),
                LogLevel::Verbose => {
                    info!(generation, best_fitness = best.fitness, "generation ranked");
                    let items: Vec<&str> = best
                        .chromosome
                        .selected_items(catalog)
                        .map(|item| item.name.as_str())
                        .collect();
                    debug!(generation, genes = ?best.chromosome.genes(), ?items, "best chromosome");
                }
                LogLevel::None => {}
            }

            if best_ever.as_ref().map_or(true, |b| best.fitness > b.fitness) {
                best_ever = Some(best.clone());
            }

            on_generation(&report);
            generations.push(report);

            population = self.strategy.breed(&ranked, options, rng)?;
        }

        let ranked = population.evaluate(&self.challenge, threshold);
        let best = ranked
            .best()
            .cloned()
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;

        let best_ever = match best_ever {
            Some(previous) if previous.fitness >= best.fitness => previous,
            _ => best.clone(),
        };

        debug!(
            best_fitness = best.fitness,
            best_ever_fitness = best_ever.fitness,
            "evolution finished"
        );

        Ok(EvolutionResult {
            best,
            best_ever,
            generations,
            population: ranked,
        })
    }
}
