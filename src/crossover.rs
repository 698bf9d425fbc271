//! Crossover strategies: how trial vectors mix target and mutant
//! components.

use rand::RngCore;

use crate::population::Population;
use crate::strategy::Strategy;

/// Lowest accepted crossover rate.
pub const MIN_CROSSOVER_RATE: f64 = 0.0;
/// Highest accepted crossover rate.
pub const MAX_CROSSOVER_RATE: f64 = 1.0;

/// Produces one trial vector per individual by mixing the target (actual)
/// and mutant vectors.
///
/// `prepare` runs once per generation with read access to the trial
/// population; `process` reads the actual and mutant populations and writes
/// only the trial population. The crossover rate `R` is clamped to `[0, 1]`
/// by the setter.
pub trait CrossoverStrategy: Strategy {
    /// Returns the crossover rate `R`.
    fn crossover_rate(&self) -> f64;

    /// Sets the crossover rate `R`, clamped to `[0, 1]`.
    fn set_crossover_rate(&mut self, rate: f64);

    /// Once-per-generation setup with read access to the population.
    fn prepare(&mut self, _trial: &Population, _rng: &mut dyn RngCore) {}

    /// Writes one trial vector per individual into `trial`.
    fn process(
        &mut self,
        actual: &Population,
        mutant: &Population,
        trial: &mut Population,
        rng: &mut dyn RngCore,
    );
}

dyn_clone::clone_trait_object!(CrossoverStrategy);
