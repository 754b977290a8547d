//! # ElitistStrategy
//!
//! Copies the fittest chromosomes into the next generation unchanged and fills the
//! remaining slots with mutated single-point crossovers of parents picked by a
//! selection strategy.
use super::BreedStrategy;
use crate::{
    breeding::{BitFlipMutation, SinglePointCrossover},
    error::{GeneticError, Result},
    evolution::options::EvolutionOptions,
    population::{Population, RankedPopulation},
    rng::RandomNumberGenerator,
    selection::{RouletteWheelSelection, SelectionStrategy},
};

#[derive(Debug, Clone)]
pub struct ElitistStrategy<S = RouletteWheelSelection>
where
    S: SelectionStrategy + Clone,
{
    selection: S,
    crossover: SinglePointCrossover,
}

impl ElitistStrategy<RouletteWheelSelection> {
    /// Creates a strategy that picks parents by roulette wheel.
    pub fn new() -> Self {
        Self::with_selection(RouletteWheelSelection::new())
    }
}

impl Default for ElitistStrategy<RouletteWheelSelection> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> ElitistStrategy<S>
where
    S: SelectionStrategy + Clone,
{
    pub fn with_selection(selection: S) -> Self {
        Self {
            selection,
            crossover: SinglePointCrossover::new(),
        }
    }

    pub fn selection(&self) -> &S {
        &self.selection
    }

    /// Picks two parent indices. When both draws land on the same individual the
    /// second one is redrawn uniformly over the whole population.
    fn select_parents(
        &self,
        fitness: &[u64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<(usize, usize)> {
        let first = self.selection.select_index(fitness, rng)?;
        let mut second = self.selection.select_index(fitness, rng)?;
        if first == second {
            second = rng.gen_index(fitness.len());
        }
        Ok((first, second))
    }
}

impl<S> BreedStrategy for ElitistStrategy<S>
where
    S: SelectionStrategy + Clone,
{
    fn breed(
        &self,
        ranked: &RankedPopulation,
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population> {
        if ranked.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let population_size = evol_options.get_population_size();
        let mutation = BitFlipMutation::new(evol_options.get_mutation_percent());
        let fitness = ranked.fitness_values();
        let members = ranked.members();

        let mut next = Vec::with_capacity(population_size);
        next.extend(
            ranked
                .elites(evol_options.get_elitism().min(population_size))
                .cloned(),
        );

        while next.len() < population_size {
            let (first, second) = self.select_parents(&fitness, rng)?;
            let mut child =
                self.crossover
                    .cross(&members[first].chromosome, &members[second].chromosome, rng);
            mutation.mutate(&mut child, rng);
            next.push(child);
        }

        Ok(Population::from_members(next))
    }
}
