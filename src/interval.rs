//! A closed interval of `f64` values, the per-dimension building block of a
//! solution domain.

use rand::{Rng, RngCore};

use crate::error::{DEError, Result};

/// A closed interval `[lower, upper]` with both bounds included.
///
/// The interval is valid at all times: every mutator that would invert the
/// bounds fails with [`DEError::InvalidBounds`] and leaves the interval
/// unchanged. The default interval spans the whole representable range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    lower: f64,
    upper: f64,
}

impl Default for Interval {
    fn default() -> Self {
        Self {
            lower: f64::MIN,
            upper: f64::MAX,
        }
    }
}

impl Interval {
    /// Creates an interval from explicit bounds.
    ///
    /// # Errors
    ///
    /// Returns `DEError::InvalidBounds` if `lower > upper`.
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        if lower > upper {
            return Err(DEError::InvalidBounds { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Returns the lower bound.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Returns the upper bound.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Sets the lower bound.
    ///
    /// # Errors
    ///
    /// Returns `DEError::InvalidBounds` if `lower` exceeds the current
    /// upper bound; the interval is left unchanged.
    pub fn set_lower(&mut self, lower: f64) -> Result<()> {
        if lower > self.upper {
            return Err(DEError::InvalidBounds {
                lower,
                upper: self.upper,
            });
        }
        self.lower = lower;
        Ok(())
    }

    /// Sets the upper bound.
    ///
    /// # Errors
    ///
    /// Returns `DEError::InvalidBounds` if `upper` is below the current
    /// lower bound; the interval is left unchanged.
    pub fn set_upper(&mut self, upper: f64) -> Result<()> {
        if upper < self.lower {
            return Err(DEError::InvalidBounds {
                lower: self.lower,
                upper,
            });
        }
        self.upper = upper;
        Ok(())
    }

    /// Sets both bounds at once.
    ///
    /// # Errors
    ///
    /// Returns `DEError::InvalidBounds` if the bounds are crossed; the
    /// interval is left unchanged.
    pub fn set(&mut self, lower: f64, upper: f64) -> Result<()> {
        if lower > upper {
            return Err(DEError::InvalidBounds { lower, upper });
        }
        self.lower = lower;
        self.upper = upper;
        Ok(())
    }

    /// Restores the maximal default bounds.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` if `value` lies inside the interval, both bounds
    /// included.
    pub fn validate(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// Saturates `value` to the nearest bound.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.lower, self.upper)
    }

    /// Draws a value uniformly from `[lower, upper]`.
    ///
    /// Sampling assumes finite bounds; the maximal default interval is a
    /// placeholder and is not meant to be sampled.
    pub fn sample(&self, rng: &mut dyn RngCore) -> f64 {
        rng.random_range(self.lower..=self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_rejects_inverted_bounds() {
        let err = Interval::new(2.0, 1.0).unwrap_err();
        assert!(matches!(err, DEError::InvalidBounds { .. }));
    }

    #[test]
    fn test_mutators_keep_interval_valid() {
        let mut interval = Interval::new(0.0, 10.0).unwrap();

        assert!(interval.set_lower(11.0).is_err());
        assert!(interval.set_upper(-1.0).is_err());
        assert!(interval.set(5.0, 3.0).is_err());

        // Failed mutations leave the bounds untouched.
        assert_eq!(interval.lower(), 0.0);
        assert_eq!(interval.upper(), 10.0);

        interval.set(-2.0, 2.0).unwrap();
        assert_eq!(interval.lower(), -2.0);
        assert_eq!(interval.upper(), 2.0);
    }

    #[test]
    fn test_validate_is_inclusive() {
        let interval = Interval::new(-1.0, 1.0).unwrap();
        assert!(interval.validate(-1.0));
        assert!(interval.validate(1.0));
        assert!(interval.validate(0.0));
        assert!(!interval.validate(1.0001));
        assert!(!interval.validate(-1.0001));
    }

    #[test]
    fn test_clamp_saturates() {
        let interval = Interval::new(0.0, 10.0).unwrap();
        assert_eq!(interval.clamp(-5.0), 0.0);
        assert_eq!(interval.clamp(15.0), 10.0);
        assert_eq!(interval.clamp(7.5), 7.5);
    }

    #[test]
    fn test_clamp_of_sample_is_fixed_point() {
        let interval = Interval::new(-3.0, 3.0).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let value = interval.sample(&mut rng);
            assert!(interval.validate(value));
            assert_eq!(interval.clamp(value), value);
        }
    }

    #[test]
    fn test_degenerate_interval_samples_its_single_point() {
        let interval = Interval::new(4.0, 4.0).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(interval.sample(&mut rng), 4.0);
    }
}
