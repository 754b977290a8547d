use crate::chromosome::Chromosome;
use crate::rng::RandomNumberGenerator;

/// Flips at most one gene per call.
///
/// With probability `percent / 100` a gene position is drawn uniformly and
/// inverted; otherwise the chromosome is left untouched.
#[derive(Debug, Clone)]
pub struct BitFlipMutation {
    percent: u8,
}

impl BitFlipMutation {
    /// `percent` is the mutation probability as an integer percentage in `[0, 100]`.
    pub fn new(percent: u8) -> Self {
        Self { percent }
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// Mutates `chromosome` in place and returns the flipped position, if any.
    pub fn mutate(
        &self,
        chromosome: &mut Chromosome,
        rng: &mut RandomNumberGenerator,
    ) -> Option<usize> {
        if chromosome.is_empty() || !rng.gen_percent_chance(self.percent) {
            return None;
        }

        let position = rng.gen_index(chromosome.len());
        chromosome.flip(position);
        Some(position)
    }
}
