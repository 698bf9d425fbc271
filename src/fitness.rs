//! Fitness transforms: how a raw objective becomes the comparable fitness.

use crate::population::Population;
use crate::strategy::Strategy;

/// Maps the raw objective score of a solution to the fitness value used for
/// every comparison.
///
/// `prepare` runs once before a population is evaluated and may precompute
/// state from it; the default does nothing.
pub trait FitnessStrategy: Strategy {
    /// Once-per-evaluation-pass setup with read access to the population.
    fn prepare(&mut self, _population: &Population) {}

    /// Transforms one objective value into a fitness value.
    fn process(&self, value: f64) -> f64;
}

dyn_clone::clone_trait_object!(FitnessStrategy);

/// Returns the objective unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct FitnessIdentity;

impl FitnessIdentity {
    /// Creates the identity transform.
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for FitnessIdentity {
    fn name(&self) -> &str {
        "Identity"
    }

    fn summary(&self) -> &str {
        "Uses the objective value as fitness"
    }
}

impl FitnessStrategy for FitnessIdentity {
    fn process(&self, value: f64) -> f64 {
        value
    }
}

/// Applies the linear transform `a * value + b`.
#[derive(Debug, Clone, Copy)]
pub struct FitnessLinear {
    a: f64,
    b: f64,
}

impl FitnessLinear {
    /// Creates a linear transform with the given coefficients.
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Returns the multiplicative coefficient.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Returns the additive coefficient.
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Sets both coefficients.
    pub fn set(&mut self, a: f64, b: f64) {
        self.a = a;
        self.b = b;
    }

    /// Restores the neutral coefficients `a = 1`, `b = 0`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Default for FitnessLinear {
    fn default() -> Self {
        Self { a: 1.0, b: 0.0 }
    }
}

impl Strategy for FitnessLinear {
    fn name(&self) -> &str {
        "Linear"
    }

    fn summary(&self) -> &str {
        "Applies a linear transform to the objective"
    }

    fn description(&self) -> &str {
        "Maps an objective value x to a * x + b. Useful to rescale or shift \
         an objective without touching the problem definition."
    }
}

impl FitnessStrategy for FitnessLinear {
    fn process(&self, value: f64) -> f64 {
        self.a * value + self.b
    }
}

/// Negates the objective.
#[derive(Debug, Clone, Copy, Default)]
pub struct FitnessOpposite;

impl FitnessOpposite {
    /// Creates the sign-inversion transform.
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for FitnessOpposite {
    fn name(&self) -> &str {
        "Opposite"
    }

    fn summary(&self) -> &str {
        "Negates the objective value"
    }
}

impl FitnessStrategy for FitnessOpposite {
    fn process(&self, value: f64) -> f64 {
        -value
    }
}

/// Takes the reciprocal of the objective, substituting a fallback for zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct FitnessInverse {
    substitution: f64,
}

impl FitnessInverse {
    /// Creates the reciprocal transform with the given substitution value.
    pub fn new(substitution: f64) -> Self {
        Self { substitution }
    }

    /// Returns the value used when the objective is exactly zero.
    pub fn substitution(&self) -> f64 {
        self.substitution
    }

    /// Sets the value used when the objective is exactly zero.
    pub fn set_substitution(&mut self, substitution: f64) {
        self.substitution = substitution;
    }
}

impl Strategy for FitnessInverse {
    fn name(&self) -> &str {
        "Inverse"
    }

    fn summary(&self) -> &str {
        "Takes the reciprocal of the objective"
    }

    fn description(&self) -> &str {
        "Maps an objective value x to 1 / x. A configurable substitution \
         value stands in when x is exactly zero."
    }
}

impl FitnessStrategy for FitnessInverse {
    fn process(&self, value: f64) -> f64 {
        if value == 0.0 {
            self.substitution
        } else {
            1.0 / value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_passes_through() {
        assert_eq!(FitnessIdentity::new().process(3.5), 3.5);
    }

    #[test]
    fn test_linear_transform() {
        let mut linear = FitnessLinear::new(2.0, 1.0);
        assert_eq!(linear.process(3.0), 7.0);

        linear.reset();
        assert_eq!(linear.process(3.0), 3.0);
    }

    #[test]
    fn test_opposite_negates() {
        assert_eq!(FitnessOpposite::new().process(4.0), -4.0);
        assert_eq!(FitnessOpposite::new().process(-2.5), 2.5);
    }

    #[test]
    fn test_inverse_substitutes_for_zero() {
        let inverse = FitnessInverse::new(1e9);
        assert_eq!(inverse.process(4.0), 0.25);
        assert_eq!(inverse.process(0.0), 1e9);
    }
}
