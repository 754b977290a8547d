//! # Error Types
//!
//! This module defines the error type for the knapsack solver. Configuration
//! problems are reported before the evolutionary loop starts; once the loop is
//! running no recoverable errors are expected.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use knapsack_ga::error::{GeneticError, Result};
//!
//! fn check_population(size: usize) -> Result<()> {
//!     if size == 0 {
//!         return Err(GeneticError::Configuration(
//!             "Population size cannot be zero".to_string(),
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_population(0).is_err());
//! assert!(check_population(10).is_ok());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use knapsack_ga::error::{GeneticError, OptionExt};
//!
//! fn best_score(scores: &[u64]) -> knapsack_ga::error::Result<u64> {
//!     scores.iter().max().copied().ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert_eq!(best_score(&[3, 9, 4]).unwrap(), 9);
//! assert!(best_score(&[]).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur while configuring or running the solver.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a gene vector does not match the catalog size.
    #[error("Gene length error: expected {expected} genes, found {actual}")]
    GeneLength { expected: usize, actual: usize },

    /// Error that occurs when an item catalog cannot be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Error that occurs when an I/O operation fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for solver operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
