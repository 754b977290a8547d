//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct represents the hyper-parameters of a run: the number
//! of generations, population size, elitism count, mutation percentage, the
//! probability that a gene starts out `true`, logging level and the population size
//! from which fitness evaluation goes parallel.
//!
//! ## Example
//!
//! ```rust
//! use knapsack_ga::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // Create a new EvolutionOptions instance with custom parameters
//! let custom_options = EvolutionOptions::new(500, LogLevel::Minimal, 100, 2, 5);
//! assert_eq!(custom_options.get_elitism(), 2);
//!
//! // Create a new EvolutionOptions instance with default parameters
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.get_population_size(), 200);
//! ```
//!
//! ## Defaults
//!
//! - `num_generations`: 3000
//! - `population_size`: 200
//! - `elitism`: 4
//! - `mutation_percent`: 10
//! - `inclusion_probability`: 0.5
//! - `log_level`: `LogLevel::None`
//! - `parallel_threshold`: 1000

use crate::{
    catalog::Catalog,
    error::{GeneticError, Result},
};

const DEFAULT_NUM_GENERATIONS: usize = 3000;
const DEFAULT_POPULATION_SIZE: usize = 200;
const DEFAULT_ELITISM: usize = 4;
const DEFAULT_MUTATION_PERCENT: u8 = 10;
const DEFAULT_INCLUSION_PROBABILITY: f64 = 0.5;
const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

/// How much the evolution loop logs per generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogLevel {
    /// Generation index, best fitness and the best chromosome's genes.
    Verbose,
    /// Generation index and best fitness.
    Minimal,
    None,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionOptions {
    num_generations: usize,
    log_level: LogLevel,
    population_size: usize,
    elitism: usize,
    mutation_percent: u8,
    inclusion_probability: f64,
    /// Minimum population size evaluated in parallel
    parallel_threshold: usize,
}

impl EvolutionOptions {
    pub fn new(
        num_generations: usize,
        log_level: LogLevel,
        population_size: usize,
        elitism: usize,
        mutation_percent: u8,
    ) -> Self {
        Self {
            num_generations,
            log_level,
            population_size,
            elitism,
            mutation_percent,
            inclusion_probability: DEFAULT_INCLUSION_PROBABILITY,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_elitism(&self) -> usize {
        self.elitism
    }

    pub fn get_mutation_percent(&self) -> u8 {
        self.mutation_percent
    }

    pub fn get_inclusion_probability(&self) -> f64 {
        self.inclusion_probability
    }

    /// Returns the minimum population size evaluated in parallel.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn set_num_generations(&mut self, num_generations: usize) {
        self.num_generations = num_generations;
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    pub fn set_elitism(&mut self, elitism: usize) {
        self.elitism = elitism;
    }

    pub fn set_mutation_percent(&mut self, mutation_percent: u8) {
        self.mutation_percent = mutation_percent;
    }

    pub fn set_inclusion_probability(&mut self, inclusion_probability: f64) {
        self.inclusion_probability = inclusion_probability;
    }

    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    /// Checks these options against `catalog` before a run.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the population size is zero, elitism
    /// exceeds the population size, the catalog is empty, the mutation percentage is
    /// above 100 or the inclusion probability is outside `[0, 1]`.
    pub fn validate(&self, catalog: &Catalog) -> Result<()> {
        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        if self.elitism > self.population_size {
            return Err(GeneticError::Configuration(format!(
                "Elitism ({}) cannot exceed population size ({})",
                self.elitism, self.population_size
            )));
        }

        if catalog.is_empty() {
            return Err(GeneticError::Configuration(
                "Item catalog cannot be empty".to_string(),
            ));
        }

        if self.mutation_percent > 100 {
            return Err(GeneticError::Configuration(format!(
                "Mutation percentage must be in [0, 100], got {}",
                self.mutation_percent
            )));
        }

        if !(0.0..=1.0).contains(&self.inclusion_probability) {
            return Err(GeneticError::Configuration(format!(
                "Inclusion probability must be in [0, 1], got {}",
                self.inclusion_probability
            )));
        }

        Ok(())
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use knapsack_ga::evolution::options::{EvolutionOptions, LogLevel};
    ///
    /// let options = EvolutionOptions::builder()
    ///     .num_generations(200)
    ///     .log_level(LogLevel::Minimal)
    ///     .population_size(50)
    ///     .elitism(2)
    ///     .mutation_percent(5)
    ///     .build();
    ///
    /// assert_eq!(options.get_num_generations(), 200);
    /// assert_eq!(options.get_inclusion_probability(), 0.5);
    /// ```
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self::new(
            DEFAULT_NUM_GENERATIONS,
            LogLevel::None,
            DEFAULT_POPULATION_SIZE,
            DEFAULT_ELITISM,
            DEFAULT_MUTATION_PERCENT,
        )
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
/// Unset fields take their defaults.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    num_generations: Option<usize>,
    log_level: Option<LogLevel>,
    population_size: Option<usize>,
    elitism: Option<usize>,
    mutation_percent: Option<u8>,
    inclusion_probability: Option<f64>,
    parallel_threshold: Option<usize>,
}

impl EvolutionOptionsBuilder {
    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn elitism(mut self, value: usize) -> Self {
        self.elitism = Some(value);
        self
    }

    pub fn mutation_percent(mut self, value: u8) -> Self {
        self.mutation_percent = Some(value);
        self
    }

    pub fn inclusion_probability(mut self, value: f64) -> Self {
        self.inclusion_probability = Some(value);
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        EvolutionOptions {
            num_generations: self.num_generations.unwrap_or(DEFAULT_NUM_GENERATIONS),
            log_level: self.log_level.unwrap_or(LogLevel::None),
            population_size: self.population_size.unwrap_or(DEFAULT_POPULATION_SIZE),
            elitism: self.elitism.unwrap_or(DEFAULT_ELITISM),
            mutation_percent: self.mutation_percent.unwrap_or(DEFAULT_MUTATION_PERCENT),
            inclusion_probability: self
                .inclusion_probability
                .unwrap_or(DEFAULT_INCLUSION_PROBABILITY),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(DEFAULT_PARALLEL_THRESHOLD),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = EvolutionOptions::default();

        assert_eq!(options.get_num_generations(), 3000);
        assert_eq!(options.get_population_size(), 200);
        assert_eq!(options.get_elitism(), 4);
        assert_eq!(options.get_mutation_percent(), 10);
        assert_eq!(options.get_inclusion_probability(), 0.5);
        assert_eq!(options.get_log_level(), LogLevel::None);
        assert_eq!(options.get_parallel_threshold(), 1000);
        assert_eq!(EvolutionOptions::builder().build(), options);
    }

    #[test]
    fn test_setters() {
        let mut options = EvolutionOptions::default();
        options.set_num_generations(10);
        options.set_population_size(20);
        options.set_elitism(1);
        options.set_mutation_percent(50);
        options.set_inclusion_probability(0.25);
        options.set_log_level(LogLevel::Verbose);
        options.set_parallel_threshold(8);

        assert_eq!(options.get_num_generations(), 10);
        assert_eq!(options.get_population_size(), 20);
        assert_eq!(options.get_elitism(), 1);
        assert_eq!(options.get_mutation_percent(), 50);
        assert_eq!(options.get_inclusion_probability(), 0.25);
        assert_eq!(options.get_log_level(), LogLevel::Verbose);
        assert_eq!(options.get_parallel_threshold(), 8);
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(EvolutionOptions::default()
            .validate(&Catalog::reference())
            .is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_configuration() {
        let catalog = Catalog::reference();
        let cases = [
            (EvolutionOptions::builder().population_size(0).elitism(0).build(), "Population size cannot be zero"),
            (EvolutionOptions::builder().population_size(3).elitism(4).build(), "cannot exceed population size"),
            (EvolutionOptions::builder().mutation_percent(101).build(), "Mutation percentage"),
            (EvolutionOptions::builder().inclusion_probability(1.5).build(), "Inclusion probability"),
            (EvolutionOptions::builder().inclusion_probability(f64::NAN).build(), "Inclusion probability"),
        ];

        for (options, expected) in cases {
            match options.validate(&catalog) {
                Err(GeneticError::Configuration(msg)) => {
                    assert!(msg.contains(expected), "{} does not mention {}", msg, expected)
                }
                other => panic!("Expected Configuration error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_validate_rejects_empty_catalog() {
        let result = EvolutionOptions::default().validate(&Catalog::new(Vec::new(), 400));
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_elitism_equal_to_population_is_valid() {
        let options = EvolutionOptions::builder()
            .population_size(4)
            .elitism(4)
            .build();
        assert!(options.validate(&Catalog::reference()).is_ok());
    }
}
