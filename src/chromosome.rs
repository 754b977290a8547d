//! # Chromosome
//!
//! A `Chromosome` is an inclusion mask over a [`Catalog`]: gene `i` is `true` when
//! item `i` goes into the knapsack. A chromosome carries no fitness of its own;
//! scores are attached only when a population is evaluated (see
//! [`crate::population::RankedPopulation`]), so a score can never outlive the genes
//! it was computed from.

use crate::catalog::{Catalog, Item};
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chromosome {
    genes: Vec<bool>,
}

impl Chromosome {
    pub fn new(genes: Vec<bool>) -> Self {
        Self { genes }
    }

    /// Creates a chromosome after checking that it has one gene per catalog item.
    pub fn for_catalog(genes: Vec<bool>, catalog: &Catalog) -> Result<Self> {
        if genes.len() != catalog.len() {
            return Err(GeneticError::GeneLength {
                expected: catalog.len(),
                actual: genes.len(),
            });
        }
        Ok(Self::new(genes))
    }

    /// Draws `length` independent genes, each `true` with probability `inclusion_probability`.
    ///
    /// # Panics
    ///
    /// Panics if `inclusion_probability` is outside `[0, 1]`.
    pub fn random(length: usize, inclusion_probability: f64, rng: &mut RandomNumberGenerator) -> Self {
        let genes = (0..length)
            .map(|_| rng.gen_bool(inclusion_probability))
            .collect();
        Self { genes }
    }

    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Inverts the gene at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn flip(&mut self, index: usize) {
        self.genes[index] = !self.genes[index];
    }

    /// Items of `catalog` selected by this chromosome, in catalog order.
    pub fn selected_items<'a>(&'a self, catalog: &'a Catalog) -> impl Iterator<Item = &'a Item> + 'a {
        self.genes
            .iter()
            .zip(catalog.items())
            .filter(|(included, _)| **included)
            .map(|(_, item)| item)
    }

    /// Combined weight of the selected items, saturating at `u64::MAX`.
    pub fn total_weight(&self, catalog: &Catalog) -> u64 {
        self.selected_items(catalog)
            .fold(0u64, |total, item| total.saturating_add(item.weight))
    }

    /// Combined value of the selected items, saturating at `u64::MAX`.
    pub fn total_value(&self, catalog: &Catalog) -> u64 {
        self.selected_items(catalog)
            .fold(0u64, |total, item| total.saturating_add(item.value))
    }
}
