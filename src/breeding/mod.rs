//! Genetic operators applied to a single offspring: single-point crossover of two
//! parents and probabilistic single-bit mutation.
pub mod crossover;
pub mod mutation;

pub use crossover::SinglePointCrossover;
pub use mutation::BitFlipMutation;
