pub mod challenge;
pub mod launcher;
pub mod options;

pub use challenge::{evaluate, Challenge, KnapsackChallenge};
pub use launcher::{EvolutionLauncher, EvolutionResult, GenerationReport};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};
