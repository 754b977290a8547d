use crate::chromosome::Chromosome;
use crate::rng::RandomNumberGenerator;

/// Single-point crossover producing one offspring.
///
/// A cut point `c` is drawn uniformly from `[0, len)`; the offspring takes genes
/// `[0, c)` from the first parent and `[c, len)` from the second.
///
/// ```rust
/// use knapsack_ga::breeding::SinglePointCrossover;
/// use knapsack_ga::chromosome::Chromosome;
///
/// let a = Chromosome::new(vec![true, true, true, true]);
/// let b = Chromosome::new(vec![false, false, false, false]);
///
/// let child = SinglePointCrossover::new().cross_at(&a, &b, 1);
/// assert_eq!(child.genes(), &[true, false, false, false]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SinglePointCrossover;

impl SinglePointCrossover {
    pub fn new() -> Self {
        Self
    }

    /// Crosses `first` and `second` at a random cut point.
    ///
    /// # Panics
    ///
    /// Panics if the parents are empty or differ in length.
    pub fn cross(
        &self,
        first: &Chromosome,
        second: &Chromosome,
        rng: &mut RandomNumberGenerator,
    ) -> Chromosome {
        let cut = rng.gen_index(first.len());
        self.cross_at(first, second, cut)
    }

    /// Crosses `first` and `second` at `cut`. Any cut in `[0, len]` is valid:
    /// `0` copies `second`, `len` copies `first`.
    ///
    /// # Panics
    ///
    /// Panics if the parents differ in length or `cut > len`.
    pub fn cross_at(&self, first: &Chromosome, second: &Chromosome, cut: usize) -> Chromosome {
        assert_eq!(
            first.len(),
            second.len(),
            "crossover parents must have the same gene length"
        );
        assert!(cut <= first.len(), "cut point {} out of range", cut);

        let genes = first.genes()[..cut]
            .iter()
            .chain(&second.genes()[cut..])
            .copied()
            .collect();
        Chromosome::new(genes)
    }
}
