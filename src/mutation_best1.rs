//! Best/1 mutation: the best individual plus one scaled difference vector.

use ndarray::Zip;
use rand::RngCore;

use crate::distinct_indices::distinct_indices;
use crate::mutation::{MutationStrategy, MAX_MUTATION_FACTOR, MIN_MUTATION_FACTOR};
use crate::population::Population;
use crate::strategy::Strategy;

/// Best/1 mutation.
///
/// For each target index `i`, builds the donor `x_best + f * (x_r1 - x_r2)`
/// from two distinct indices different from both the target and the best
/// individual. The engine keeps the actual population sorted best-first
/// between generations, so the best individual sits at index 0.
#[derive(Debug, Clone)]
pub struct MutationBest1 {
    factor: f64,
    best_index: usize,
}

impl MutationBest1 {
    /// Creates the strategy with the given mutation factor, clamped to
    /// `[0, 2]`.
    pub fn new(factor: f64) -> Self {
        Self {
            factor: factor.clamp(MIN_MUTATION_FACTOR, MAX_MUTATION_FACTOR),
            best_index: 0,
        }
    }
}

impl Default for MutationBest1 {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl Strategy for MutationBest1 {
    fn name(&self) -> &str {
        "Best/1"
    }

    fn summary(&self) -> &str {
        "Best individual plus one difference vector"
    }

    fn description(&self) -> &str {
        "Builds each donor as x_best + f * (x_r1 - x_r2), pulling the whole \
         population toward the current best individual. Converges faster \
         than Rand/1 at the cost of exploration."
    }
}

impl MutationStrategy for MutationBest1 {
    fn mutation_factor(&self) -> f64 {
        self.factor
    }

    fn set_mutation_factor(&mut self, f: f64) {
        self.factor = f.clamp(MIN_MUTATION_FACTOR, MAX_MUTATION_FACTOR);
    }

    fn prepare(&mut self, _actual: &Population, _rng: &mut dyn RngCore) {
        // The actual population is sorted best-first before every
        // generation step.
        self.best_index = 0;
    }

    fn process(&mut self, actual: &Population, mutant: &mut Population, rng: &mut dyn RngCore) {
        let f = self.factor;
        let best = &actual[self.best_index];
        for i in 0..actual.len() {
            let indices = distinct_indices(&[i, self.best_index], 2, actual.len(), rng);
            let donor = Zip::from(best.values())
                .and(actual[indices[0]].values())
                .and(actual[indices[1]].values())
                .map_collect(|&xb, &x1, &x2| xb + f * (x1 - x2));
            mutant[i].assign(&donor);
        }
    }
}
