use tracing::trace;

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that selects individuals through roulette wheel selection.
///
/// Roulette wheel selection (also known as fitness proportionate selection) selects
/// individuals with probability proportional to their fitness. A target is drawn
/// uniformly from `[0, total]` and the first individual whose cumulative fitness
/// reaches it wins, so the scan always stops inside the population.
///
/// When every individual has zero fitness the wheel has no area and the strategy
/// falls back to a uniformly random index.
#[derive(Debug, Clone, Default)]
pub struct RouletteWheelSelection;

impl RouletteWheelSelection {
    pub fn new() -> Self {
        Self
    }

    /// Returns the index of the first individual whose cumulative fitness is at
    /// least `target`, clamped to the last index.
    ///
    /// Sums are taken in `u128` so that any population of `u64` scores fits.
    fn spin(fitness: &[u64], target: u128) -> usize {
        let mut cumulative = 0u128;
        for (i, &value) in fitness.iter().enumerate() {
            cumulative += u128::from(value);
            if cumulative >= target {
                return i;
            }
        }

        // Unreachable while target <= total, kept so no caller ever sees an out-of-range index
        fitness.len() - 1
    }
}

impl SelectionStrategy for RouletteWheelSelection {
    fn select_index(&self, fitness: &[u64], rng: &mut RandomNumberGenerator) -> Result<usize> {
        if fitness.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let total: u128 = fitness.iter().map(|&f| u128::from(f)).sum();
        if total == 0 {
            trace!(
                population = fitness.len(),
                "all fitness values are zero, selecting uniformly"
            );
            return Ok(rng.gen_index(fitness.len()));
        }

        let target = rng.gen_inclusive(total);
        Ok(Self::spin(fitness, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spin_picks_first_reaching_target() {
        let fitness = vec![10, 0, 5, 20];

        assert_eq!(RouletteWheelSelection::spin(&fitness, 0), 0);
        assert_eq!(RouletteWheelSelection::spin(&fitness, 10), 0);
        assert_eq!(RouletteWheelSelection::spin(&fitness, 11), 2);
        assert_eq!(RouletteWheelSelection::spin(&fitness, 15), 2);
        assert_eq!(RouletteWheelSelection::spin(&fitness, 16), 3);
        assert_eq!(RouletteWheelSelection::spin(&fitness, 35), 3);
    }

    #[test]
    fn test_spin_clamps_past_total() {
        let fitness = vec![1, 2, 3];
        assert_eq!(RouletteWheelSelection::spin(&fitness, 100), 2);
    }

    #[test]
    fn test_select_never_out_of_range() {
        let fitness = vec![5, 0, 0, 1, 9];
        let mut rng = RandomNumberGenerator::from_seed(42);
        let selection = RouletteWheelSelection::new();

        for _ in 0..10_000 {
            let idx = selection.select_index(&fitness, &mut rng).unwrap();
            assert!(idx < fitness.len());
        }
    }

    #[test]
    fn test_select_is_fitness_proportional() {
        let fitness = vec![100, 300];
        let mut rng = RandomNumberGenerator::from_seed(7);
        let selection = RouletteWheelSelection::new();

        let trials = 20_000;
        let second = (0..trials)
            .filter(|_| selection.select_index(&fitness, &mut rng).unwrap() == 1)
            .count();

        let share = second as f64 / trials as f64;
        assert!((share - 0.75).abs() < 0.03, "share = {}", share);
    }

    #[test]
    fn test_uniform_fitness_selects_roughly_uniformly() {
        let fitness = vec![50; 5];
        let mut rng = RandomNumberGenerator::from_seed(11);
        let selection = RouletteWheelSelection::new();

        let trials = 25_000;
        let mut counts = [0usize; 5];
        for _ in 0..trials {
            counts[selection.select_index(&fitness, &mut rng).unwrap()] += 1;
        }

        let expected = trials as f64 / 5.0;
        for count in counts {
            assert!(
                (count as f64 - expected).abs() < expected * 0.1,
                "counts = {:?}",
                counts
            );
        }
    }

    #[test]
    fn test_zero_fitness_falls_back_to_uniform() {
        let fitness = vec![0; 4];
        let mut rng = RandomNumberGenerator::from_seed(3);
        let selection = RouletteWheelSelection::new();

        let mut seen = [false; 4];
        for _ in 0..1_000 {
            seen[selection.select_index(&fitness, &mut rng).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_huge_fitness_values_do_not_overflow() {
        let fitness = vec![u64::MAX / 2, u64::MAX / 2, 10];
        let mut rng = RandomNumberGenerator::from_seed(13);
        let selection = RouletteWheelSelection::new();

        let mut seen = [false; 3];
        for _ in 0..1_000 {
            seen[selection.select_index(&fitness, &mut rng).unwrap()] = true;
        }
        assert!(seen[0] && seen[1]);

        let saturated = vec![u64::MAX; 200];
        for _ in 0..1_000 {
            assert!(selection.select_index(&saturated, &mut rng).unwrap() < saturated.len());
        }
    }

    #[test]
    fn test_spin_past_u64_range() {
        let fitness = vec![u64::MAX, u64::MAX, u64::MAX];
        let max = u128::from(u64::MAX);

        assert_eq!(RouletteWheelSelection::spin(&fitness, max), 0);
        assert_eq!(RouletteWheelSelection::spin(&fitness, max + 1), 1);
        assert_eq!(RouletteWheelSelection::spin(&fitness, 3 * max), 2);
    }

    #[test]
    fn test_empty_population() {
        let mut rng = RandomNumberGenerator::from_seed(3);
        let result = RouletteWheelSelection::new().select_index(&[], &mut rng);
        assert!(matches!(result, Err(GeneticError::EmptyPopulation)));
    }

    #[test]
    fn test_zero_fitness_individual_never_selected_past_zero_target() {
        // Index 1 has zero fitness; it can only win if the running total already
        // reached the target at index 0, which then wins first.
        let fitness = vec![4, 0, 4];
        let mut rng = RandomNumberGenerator::from_seed(21);
        let selection = RouletteWheelSelection::new();

        for _ in 0..5_000 {
            assert_ne!(selection.select_index(&fitness, &mut rng).unwrap(), 1);
        }
    }
}
