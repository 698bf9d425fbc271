//! Initialization strategies: how the first population gets its values.

use rand::RngCore;

use crate::population::Population;
use crate::problem::Problem;
use crate::strategy::Strategy;

/// Fills the actual population with its initial values.
pub trait InitializationStrategy: Strategy {
    /// Once-per-run setup with read access to the population.
    fn prepare(&mut self, _actual: &Population, _rng: &mut dyn RngCore) {}

    /// Writes initial values into every solution of the actual population.
    fn process(&mut self, problem: &dyn Problem, actual: &mut Population, rng: &mut dyn RngCore);
}

dyn_clone::clone_trait_object!(InitializationStrategy);

/// Draws every dimension of every solution independently and uniformly from
/// the problem's domain.
#[derive(Debug, Clone, Copy, Default)]
pub struct InitializationDomainUniform;

impl InitializationDomainUniform {
    /// Creates the uniform-from-domain initialization.
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for InitializationDomainUniform {
    fn name(&self) -> &str {
        "Domain Uniform"
    }

    fn summary(&self) -> &str {
        "Uniform random draw from the domain"
    }

    fn description(&self) -> &str {
        "Initializes each dimension of each solution with an independent \
         uniform draw from the corresponding domain interval."
    }
}

impl InitializationStrategy for InitializationDomainUniform {
    fn process(&mut self, problem: &dyn Problem, actual: &mut Population, rng: &mut dyn RngCore) {
        actual.randomize(problem.domain(), rng);
    }
}

/// Delegates initialization to the problem's own randomizer.
///
/// Useful when a problem knows a better-than-uniform seeding of the search
/// space and overrides
/// [`Problem::initialize_randomly`](crate::problem::Problem::initialize_randomly).
#[derive(Debug, Clone, Copy, Default)]
pub struct InitializationBySolution;

impl InitializationBySolution {
    /// Creates the problem-delegating initialization.
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for InitializationBySolution {
    fn name(&self) -> &str {
        "By Solution"
    }

    fn summary(&self) -> &str {
        "Lets the problem initialize its own candidates"
    }

    fn description(&self) -> &str {
        "Delegates population seeding to the problem definition, which may \
         override the default uniform draw with a smarter scheme."
    }
}

impl InitializationStrategy for InitializationBySolution {
    fn process(&mut self, problem: &dyn Problem, actual: &mut Population, rng: &mut dyn RngCore) {
        problem.initialize_randomly(actual, rng);
    }
}
