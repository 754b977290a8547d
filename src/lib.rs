pub mod breeding;
pub mod catalog;
pub mod chromosome;
pub mod error;
pub mod evolution;
pub mod population;
pub mod rng;
pub mod selection;
pub mod strategy;

// Re-export commonly used types for convenience
pub use catalog::{Catalog, Item};
pub use chromosome::Chromosome;
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{EvolutionLauncher, EvolutionOptions, EvolutionResult, GenerationReport};
