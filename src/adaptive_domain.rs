//! Domain adaptation: how out-of-domain values are handled after mutation
//! and crossover.

use rand::RngCore;

use crate::domain::SolutionDomain;
use crate::population::Population;
use crate::strategy::Strategy;

/// Enforces (or deliberately ignores) the domain constraints on a freshly
/// produced population.
///
/// The engine applies this strategy to the mutant population after mutation
/// and to the trial population after crossover.
pub trait AdaptiveDomainStrategy: Strategy {
    /// Once-per-generation setup with read access to the population.
    fn prepare(&mut self, _population: &Population, _rng: &mut dyn RngCore) {}

    /// Adapts every solution of `population` to the domain.
    fn process(&mut self, domain: &SolutionDomain, population: &mut Population);
}

dyn_clone::clone_trait_object!(AdaptiveDomainStrategy);

/// Leaves out-of-domain values untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdaptiveDomainNoConstraint;

impl AdaptiveDomainNoConstraint {
    /// Creates the unconstrained adaptation.
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for AdaptiveDomainNoConstraint {
    fn name(&self) -> &str {
        "No Constraint"
    }

    fn summary(&self) -> &str {
        "Leaves values outside the domain untouched"
    }

    fn description(&self) -> &str {
        "Performs no adaptation at all: the evolution may explore values \
         outside the declared domain intervals."
    }
}

impl AdaptiveDomainStrategy for AdaptiveDomainNoConstraint {
    fn process(&mut self, _domain: &SolutionDomain, _population: &mut Population) {}
}

/// Truncates every value back into its domain interval.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdaptiveDomainClamped;

impl AdaptiveDomainClamped {
    /// Creates the clamping adaptation.
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for AdaptiveDomainClamped {
    fn name(&self) -> &str {
        "Clamped"
    }

    fn summary(&self) -> &str {
        "Saturates values to the domain bounds"
    }

    fn description(&self) -> &str {
        "Clamps every dimension of every solution to its domain interval, \
         so the population never leaves the declared search space."
    }
}

impl AdaptiveDomainStrategy for AdaptiveDomainClamped {
    fn process(&mut self, domain: &SolutionDomain, population: &mut Population) {
        population.clamp(domain);
    }
}
