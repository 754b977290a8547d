//! # Challenge
//!
//! A `Challenge` assigns a fitness score to a chromosome. `KnapsackChallenge` scores
//! an inclusion mask by the total value it packs, or zero when the packed weight
//! exceeds the catalog capacity.

use crate::catalog::Catalog;
use crate::chromosome::Chromosome;

pub trait Challenge<P> {
    fn score(&self, candidate: &P) -> u64;
}

/// Scores `genes` against `catalog`.
///
/// Items are accumulated in index order and the scan stops with a score of `0` as
/// soon as the running weight exceeds the capacity. An empty selection also scores
/// `0`, so it cannot be told apart from an overweight one. A weight sum that does
/// not fit in `u64` is overweight; a value sum saturates at `u64::MAX`.
///
/// ```rust
/// use knapsack_ga::catalog::{Catalog, Item};
/// use knapsack_ga::evolution::challenge::evaluate;
///
/// let catalog = Catalog::new(vec![Item::new("map", 9, 150), Item::new("compass", 13, 35)], 20);
/// assert_eq!(evaluate(&[true, false], &catalog), 150);
/// assert_eq!(evaluate(&[true, true], &catalog), 0);
/// ```
pub fn evaluate(genes: &[bool], catalog: &Catalog) -> u64 {
    debug_assert_eq!(genes.len(), catalog.len(), "gene length must match catalog size");

    let mut total_weight = 0u64;
    let mut total_value = 0u64;
    for (item, _) in catalog
        .items()
        .iter()
        .zip(genes)
        .filter(|(_, included)| **included)
    {
        total_weight = match total_weight.checked_add(item.weight) {
            Some(weight) if weight <= catalog.capacity() => weight,
            _ => return 0,
        };
        total_value = total_value.saturating_add(item.value);
    }
    total_value
}

/// Knapsack fitness over a fixed catalog.
#[derive(Debug, Clone)]
pub struct KnapsackChallenge {
    catalog: Catalog,
}

impl KnapsackChallenge {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl Challenge<Chromosome> for KnapsackChallenge {
    fn score(&self, candidate: &Chromosome) -> u64 {
        evaluate(candidate.genes(), &self.catalog)
    }
}
