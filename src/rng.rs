//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the single random source threaded through
//! population initialization, selection, crossover and mutation. Seeding it makes a
//! whole run reproducible.
//!
//! ## Example
//!
//! ```rust
//! use knapsack_ga::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let index = rng.gen_index(22);
//! assert!(index < 22);
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` exposing the draws the
/// genetic operators need.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible runs, tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws a uniformly random index in `[0, upper)`.
    ///
    /// # Panics
    ///
    /// Panics if `upper` is zero.
    pub fn gen_index(&mut self, upper: usize) -> usize {
        assert!(upper > 0, "cannot draw an index from an empty range");
        self.rng.gen_range(0..upper)
    }

    /// Draws a uniformly random integer in `[0, upper]`, both ends inclusive.
    pub fn gen_inclusive(&mut self, upper: u128) -> u128 {
        self.rng.gen_range(0..=upper)
    }

    /// Returns `true` with probability `p`. `p` must lie in `[0, 1]`.
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p)
    }

    /// Returns `true` with probability `percent / 100`.
    ///
    /// Values above 100 always succeed.
    pub fn gen_percent_chance(&mut self, percent: u8) -> bool {
        self.rng.gen_range(0..100u8) < percent
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gen_index_in_range() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        for _ in 0..1000 {
            assert!(rng.gen_index(5) < 5);
        }
    }

    #[test]
    #[should_panic]
    fn test_gen_index_empty_range() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        rng.gen_index(0);
    }

    #[test]
    fn test_gen_inclusive_reaches_upper_bound() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let draws: Vec<u128> = (0..1000).map(|_| rng.gen_inclusive(3)).collect();

        assert!(draws.iter().all(|&d| d <= 3));
        assert!(draws.contains(&0));
        assert!(draws.contains(&3));
    }

    #[test]
    fn test_gen_inclusive_zero() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        assert_eq!(rng.gen_inclusive(0), 0);
    }

    #[test]
    fn test_percent_chance_extremes() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        for _ in 0..500 {
            assert!(!rng.gen_percent_chance(0));
            assert!(rng.gen_percent_chance(100));
        }
    }

    #[test]
    fn test_clone() {
        let mut rng1 = RandomNumberGenerator::from_seed(42);
        let mut rng2 = rng1.clone();

        // Both RNGs should generate the same sequence after cloning
        let nums1: Vec<usize> = (0..5).map(|_| rng1.gen_index(1000)).collect();
        let nums2: Vec<usize> = (0..5).map(|_| rng2.gen_index(1000)).collect();

        assert_eq!(nums1, nums2);
    }
}
