//! # Population
//!
//! A `Population` is an ordered collection of chromosomes awaiting evaluation.
//! Evaluating it consumes the population and yields a `RankedPopulation`: every
//! chromosome paired with a freshly computed fitness, sorted best first.

use rayon::prelude::*;

use crate::{
    chromosome::Chromosome,
    error::{GeneticError, Result},
    evolution::Challenge,
    rng::RandomNumberGenerator,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population {
    members: Vec<Chromosome>,
}

impl Population {
    /// Creates a population from existing chromosomes.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::EmptyPopulation` when `members` is empty and
    /// `GeneticError::GeneLength` when any chromosome does not have `gene_length` genes.
    pub fn new(members: Vec<Chromosome>, gene_length: usize) -> Result<Self> {
        if members.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }
        if let Some(bad) = members.iter().find(|c| c.len() != gene_length) {
            return Err(GeneticError::GeneLength {
                expected: gene_length,
                actual: bad.len(),
            });
        }
        Ok(Self { members })
    }

    /// Creates `size` random chromosomes of `gene_length` genes each.
    ///
    /// # Panics
    ///
    /// Panics if `inclusion_probability` is outside `[0, 1]`.
    pub fn random(
        size: usize,
        gene_length: usize,
        inclusion_probability: f64,
        rng: &mut RandomNumberGenerator,
    ) -> Self {
        let members = (0..size)
            .map(|_| Chromosome::random(gene_length, inclusion_probability, rng))
            .collect();
        Self { members }
    }

    pub(crate) fn from_members(members: Vec<Chromosome>) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[Chromosome] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Scores every chromosome with `challenge` and sorts them by descending fitness.
    ///
    /// Scoring runs on the rayon pool when the population has at least
    /// `parallel_threshold` members.
    pub fn evaluate<C>(self, challenge: &C, parallel_threshold: usize) -> RankedPopulation
    where
        C: Challenge<Chromosome> + Sync,
    {
        let score = |chromosome: Chromosome| {
            let fitness = challenge.score(&chromosome);
            ScoredChromosome {
                chromosome,
                fitness,
            }
        };

        let mut members: Vec<ScoredChromosome> = if self.members.len() >= parallel_threshold {
            self.members.into_par_iter().map(score).collect()
        } else {
            self.members.into_iter().map(score).collect()
        };

        members.sort_by(|a, b| b.fitness.cmp(&a.fitness));

        RankedPopulation { members }
    }
}

/// A chromosome paired with the fitness computed for its current genes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredChromosome {
    pub chromosome: Chromosome,
    pub fitness: u64,
}

/// An evaluated population, sorted by descending fitness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedPopulation {
    members: Vec<ScoredChromosome>,
}

impl RankedPopulation {
    pub fn members(&self) -> &[ScoredChromosome] {
        &self.members
    }

    pub fn get(&self, index: usize) -> Option<&ScoredChromosome> {
        self.members.get(index)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The fittest member, or `None` for an empty population.
    pub fn best(&self) -> Option<&ScoredChromosome> {
        self.members.first()
    }

    /// Fitness values in rank order.
    pub fn fitness_values(&self) -> Vec<u64> {
        self.members.iter().map(|m| m.fitness).collect()
    }

    /// The `count` fittest chromosomes, best first.
    pub fn elites(&self, count: usize) -> impl Iterator<Item = &Chromosome> + '_ {
        self.members.iter().take(count).map(|m| &m.chromosome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Item};
    use crate::evolution::KnapsackChallenge;

    fn challenge() -> KnapsackChallenge {
        KnapsackChallenge::new(Catalog::new(
            vec![
                Item::new("a", 5, 10),
                Item::new("b", 5, 20),
                Item::new("c", 5, 40),
            ],
            10,
        ))
    }

    fn population() -> Population {
        Population::new(
            vec![
                Chromosome::new(vec![true, false, false]),
                Chromosome::new(vec![true, true, true]),
                Chromosome::new(vec![false, true, true]),
                Chromosome::new(vec![false, true, false]),
            ],
            3,
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(matches!(
            Population::new(Vec::new(), 3),
            Err(GeneticError::EmptyPopulation)
        ));
    }

    #[test]
    fn test_new_rejects_wrong_gene_length() {
        let result = Population::new(
            vec![
                Chromosome::new(vec![true, false, false]),
                Chromosome::new(vec![true]),
            ],
            3,
        );
        assert!(matches!(
            result,
            Err(GeneticError::GeneLength {
                expected: 3,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_random_population_shape() {
        let mut rng = RandomNumberGenerator::from_seed(9);
        let population = Population::random(50, 22, 0.5, &mut rng);

        assert_eq!(population.len(), 50);
        assert!(population.members().iter().all(|c| c.len() == 22));
    }

    #[test]
    fn test_evaluate_sorts_descending() {
        let ranked = population().evaluate(&challenge(), 1000);

        assert_eq!(ranked.len(), 4);
        assert_eq!(ranked.fitness_values(), vec![60, 20, 10, 0]);
        assert_eq!(
            ranked.best().unwrap().chromosome.genes(),
            &[false, true, true]
        );
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let mut rng = RandomNumberGenerator::from_seed(5);
        let population = Population::random(200, 3, 0.5, &mut rng);

        let sequential = population.clone().evaluate(&challenge(), usize::MAX);
        let parallel = population.evaluate(&challenge(), 0);

        assert_eq!(sequential.fitness_values(), parallel.fitness_values());
    }

    #[test]
    fn test_elites() {
        let ranked = population().evaluate(&challenge(), 1000);

        let elites: Vec<&Chromosome> = ranked.elites(2).collect();
        assert_eq!(elites.len(), 2);
        assert_eq!(elites[0].genes(), &[false, true, true]);
        assert_eq!(elites[1].genes(), &[false, true, false]);
        assert_eq!(ranked.elites(10).count(), 4);
    }
}
