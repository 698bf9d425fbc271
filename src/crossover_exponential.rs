//! Exponential crossover.

use rand::{Rng, RngCore};

use crate::crossover::{CrossoverStrategy, MAX_CROSSOVER_RATE, MIN_CROSSOVER_RATE};
use crate::population::Population;
use crate::strategy::Strategy;

/// Exponential crossover.
///
/// Picks a uniformly random start dimension and copies a contiguous run of
/// mutant values, wrapping around the vector end. The run continues while a
/// uniform draw stays below `R`, so its length is geometrically distributed
/// and always at least 1.
#[derive(Debug, Clone)]
pub struct CrossoverExponential {
    rate: f64,
}

impl CrossoverExponential {
    /// Creates the strategy with the given crossover rate, clamped to
    /// `[0, 1]`.
    pub fn new(rate: f64) -> Self {
        Self {
            rate: rate.clamp(MIN_CROSSOVER_RATE, MAX_CROSSOVER_RATE),
        }
    }
}

impl Default for CrossoverExponential {
    fn default() -> Self {
        Self::new(0.75)
    }
}

impl Strategy for CrossoverExponential {
    fn name(&self) -> &str {
        "Exponential"
    }

    fn summary(&self) -> &str {
        "Contiguous run of mutant values with wrap-around"
    }

    fn description(&self) -> &str {
        "Copies a geometrically distributed contiguous run of mutant values \
         starting at a random dimension, wrapping if necessary; the \
         remaining dimensions keep the target values."
    }
}

impl CrossoverStrategy for CrossoverExponential {
    fn crossover_rate(&self) -> f64 {
        self.rate
    }

    fn set_crossover_rate(&mut self, rate: f64) {
        self.rate = rate.clamp(MIN_CROSSOVER_RATE, MAX_CROSSOVER_RATE);
    }

    fn process(
        &mut self,
        actual: &Population,
        mutant: &Population,
        trial: &mut Population,
        rng: &mut dyn RngCore,
    ) {
        for i in 0..actual.len() {
            let dims = actual[i].len();
            for j in 0..dims {
                trial[i][j] = actual[i][j];
            }
            let mut j = rng.random_range(0..dims);
            let mut copied = 0;
            // at least one dimension comes from the mutant
            loop {
                trial[i][j] = mutant[i][j];
                copied += 1;
                j = (j + 1) % dims;
                if rng.random::<f64>() >= self.rate || copied >= dims {
                    break;
                }
            }
        }
    }
}
