use std::fmt::Debug;

use crate::error::Result;
use crate::rng::RandomNumberGenerator;

/// Trait for selection strategies in genetic algorithms.
///
/// A selection strategy picks the index of one parent from a ranked population,
/// given the fitness of every member in population order.
///
/// # Examples
///
/// ```
/// use knapsack_ga::selection::{RouletteWheelSelection, SelectionStrategy};
/// use knapsack_ga::rng::RandomNumberGenerator;
/// use knapsack_ga::error::Result;
///
/// fn main() -> Result<()> {
///     let fitness = vec![150, 35, 0, 80];
///     let mut rng = RandomNumberGenerator::from_seed(42);
///
///     let selection = RouletteWheelSelection::new();
///     let index = selection.select_index(&fitness, &mut rng)?;
///
///     assert!(index < fitness.len());
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Selects one individual and returns its index.
    ///
    /// The returned index is always smaller than `fitness.len()`.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::EmptyPopulation` if `fitness` is empty.
    fn select_index(&self, fitness: &[u64], rng: &mut RandomNumberGenerator) -> Result<usize>;
}
