//! Mutation strategies: how donor vectors are built from the actual
//! population.

use rand::RngCore;

use crate::population::Population;
use crate::strategy::Strategy;

/// Lowest accepted mutation factor.
pub const MIN_MUTATION_FACTOR: f64 = 0.0;
/// Highest accepted mutation factor.
pub const MAX_MUTATION_FACTOR: f64 = 2.0;

/// Produces one mutant (donor) vector per individual of the actual
/// population.
///
/// `prepare` runs once per generation with read access to the populations;
/// `process` may read the actual population but writes only the mutant
/// population. The mutation factor `f` scales the difference vectors and is
/// clamped to `[0, 2]` by the setter.
pub trait MutationStrategy: Strategy {
    /// Returns the mutation factor `f`.
    fn mutation_factor(&self) -> f64;

    /// Sets the mutation factor `f`, clamped to `[0, 2]`.
    fn set_mutation_factor(&mut self, f: f64);

    /// Once-per-generation setup with read access to the population.
    fn prepare(&mut self, _actual: &Population, _rng: &mut dyn RngCore) {}

    /// Writes one donor vector per individual into `mutant`.
    fn process(&mut self, actual: &Population, mutant: &mut Population, rng: &mut dyn RngCore);
}

dyn_clone::clone_trait_object!(MutationStrategy);
