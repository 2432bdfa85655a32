use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};

/// Source of the random choices made by the patterned generator.
///
/// Every [`rand::Rng`] implements it; tests substitute scripted sequences.
pub trait RandomSource {
    /// Uniform integer in `low..=high`.
    fn uniform(&mut self, low: u32, high: u32) -> u32;

    /// `true` with the given probability, which must lie in `0.0..=1.0`.
    fn chance(&mut self, probability: f64) -> bool;

    /// Index into `weights`, drawn proportionally to each weight.
    fn weighted(&mut self, weights: &[u32]) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn uniform(&mut self, low: u32, high: u32) -> u32 {
        self.gen_range(low..=high)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.gen_bool(probability)
    }

    fn weighted(&mut self, weights: &[u32]) -> usize {
        // An empty or all-zero table has nothing to choose from.
        WeightedIndex::new(weights).map_or(0, |dist| dist.sample(self))
    }
}
