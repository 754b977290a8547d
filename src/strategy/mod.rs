//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for strategies responsible for breeding
//! the next population from a ranked (evaluated and sorted) one.
pub mod elitist;

use std::fmt::Debug;

use crate::{
    error::Result,
    evolution::options::EvolutionOptions,
    population::{Population, RankedPopulation},
    rng::RandomNumberGenerator,
};

/// # BreedStrategy
///
/// Breeds a new population based on the ranked current one and evolution options.
pub trait BreedStrategy
where
    Self: Debug + Clone + Send + Sync,
{
    /// Produces the next generation.
    ///
    /// ## Parameters
    ///
    /// - `ranked`: The current population, sorted best first.
    /// - `evol_options`: A reference to the evolution options specifying algorithm parameters.
    /// - `rng`: A mutable reference to the random number generator used for generating
    ///   random values during breeding.
    ///
    /// ## Returns
    ///
    /// A population of exactly `evol_options.get_population_size()` chromosomes.
    ///
    /// ## Errors
    ///
    /// This method fails if `ranked` is empty.
    fn breed(
        &self,
        ranked: &RankedPopulation,
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population>;
}

pub use elitist::ElitistStrategy;
