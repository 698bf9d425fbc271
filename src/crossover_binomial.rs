//! Binomial (uniform) crossover.

use rand::{Rng, RngCore};

use crate::crossover::{CrossoverStrategy, MAX_CROSSOVER_RATE, MIN_CROSSOVER_RATE};
use crate::population::Population;
use crate::strategy::Strategy;

/// Binomial crossover.
///
/// For each dimension independently, the trial takes the mutant value with
/// probability `R` and the target value otherwise. One uniformly chosen
/// forced dimension always comes from the mutant, so the trial differs from
/// the target in at least one dimension for any rate, including 0.
#[derive(Debug, Clone)]
pub struct CrossoverBinomial {
    rate: f64,
}

impl CrossoverBinomial {
    /// Creates the strategy with the given crossover rate, clamped to
    /// `[0, 1]`.
    pub fn new(rate: f64) -> Self {
        Self {
            rate: rate.clamp(MIN_CROSSOVER_RATE, MAX_CROSSOVER_RATE),
        }
    }
}

impl Default for CrossoverBinomial {
    fn default() -> Self {
        Self::new(0.75)
    }
}

impl Strategy for CrossoverBinomial {
    fn name(&self) -> &str {
        "Binomial"
    }

    fn summary(&self) -> &str {
        "Per-dimension coin-flip mix of target and mutant"
    }

    fn description(&self) -> &str {
        "Takes each trial dimension from the mutant with probability R and \
         from the target otherwise. A uniformly chosen forced dimension \
         always comes from the mutant so the trial is never identical to \
         the target."
    }
}

impl CrossoverStrategy for CrossoverBinomial {
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
            let forced = rng.random_range(0..dims);
            for j in 0..dims {
                trial[i][j] = if j == forced || rng.random::<f64>() < self.rate {
                    mutant[i][j]
                } else {
                    actual[i][j]
                };
            }
        }
    }
}
