//! A candidate solution: a point in the search space plus its cached
//! evaluation scores.

use std::ops::{Index, IndexMut};

use ndarray::Array1;
use rand::RngCore;

use crate::domain::SolutionDomain;
use crate::error::{DEError, Result};

/// One candidate solution of the evolution.
///
/// A solution holds a fixed-length vector of values (its position in the
/// search space) together with two cached scalars: the raw `objective`
/// returned by the problem's evaluator and the `fitness` derived from it by
/// the active fitness transform. Both scores are recomputed by the engine on
/// every generation; until then they hold a NaN sentinel.
///
/// Solutions are created and sized by a [`SolutionDomain`] and live inside a
/// [`Population`](crate::population::Population). A solution is valid once
/// it has at least one dimension.
#[derive(Debug, Clone)]
pub struct Solution {
    values: Array1<f64>,
    objective: f64,
    fitness: f64,
}

impl Solution {
    const DEFAULT_OBJECTIVE: f64 = f64::NAN;
    const DEFAULT_FITNESS: f64 = f64::NAN;

    /// Creates an invalid, zero-dimensional solution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solution sized by `domain`, all values zero.
    pub fn from_domain(domain: &SolutionDomain) -> Self {
        let mut solution = Self::default();
        solution.setup(domain);
        solution
    }

    /// Returns `true` if the solution has at least one dimension.
    pub fn is_valid(&self) -> bool {
        !self.values.is_empty()
    }

    /// Returns the solution to its default, zero-dimensional state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Sizes the solution to the domain's dimensionality, zero-fills the
    /// values and resets both scores to their sentinel defaults.
    pub fn setup(&mut self, domain: &SolutionDomain) {
        self.values = Array1::zeros(domain.len());
        self.objective = Self::DEFAULT_OBJECTIVE;
        self.fitness = Self::DEFAULT_FITNESS;
    }

    /// Draws every value uniformly from the matching domain interval.
    ///
    /// The call is silently ignored when the solution's length does not
    /// match the domain's dimensionality.
    pub fn randomize(&mut self, domain: &SolutionDomain, rng: &mut dyn RngCore) {
        if self.values.len() != domain.len() {
            return;
        }
        for (value, interval) in self.values.iter_mut().zip(domain.iter()) {
            *value = interval.sample(rng);
        }
    }

    /// Saturates every value into the matching domain interval.
    ///
    /// Like [`randomize`](Self::randomize), the call is silently ignored on
    /// a length mismatch.
    pub fn clamp(&mut self, domain: &SolutionDomain) {
        if self.values.len() != domain.len() {
            return;
        }
        for (value, interval) in self.values.iter_mut().zip(domain.iter()) {
            *value = interval.clamp(*value);
        }
    }

    /// Returns the dimensionality of the solution.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the solution has no dimension.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Checked access to one value.
    ///
    /// # Errors
    ///
    /// Returns `DEError::OutOfRange` if `index` is past the last dimension.
    pub fn at(&self, index: usize) -> Result<f64> {
        self.values.get(index).copied().ok_or(DEError::OutOfRange {
            index,
            len: self.values.len(),
        })
    }

    /// Checked mutable access to one value.
    ///
    /// # Errors
    ///
    /// Returns `DEError::OutOfRange` if `index` is past the last dimension.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut f64> {
        let len = self.values.len();
        self.values
            .get_mut(index)
            .ok_or(DEError::OutOfRange { index, len })
    }

    /// Read access to the whole value vector.
    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    /// Overwrites the value vector from `values`.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ; the vector length is fixed by the
    /// owning domain.
    pub fn assign(&mut self, values: &Array1<f64>) {
        self.values.assign(values);
    }

    /// Returns the raw objective score of the last evaluation.
    pub fn objective(&self) -> f64 {
        self.objective
    }

    /// Returns the transformed fitness score of the last evaluation.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub(crate) fn set_scores(&mut self, objective: f64, fitness: f64) {
        self.objective = objective;
        self.fitness = fitness;
    }
}

impl Default for Solution {
    fn default() -> Self {
        Self {
            values: Array1::zeros(0),
            objective: Self::DEFAULT_OBJECTIVE,
            fitness: Self::DEFAULT_FITNESS,
        }
    }
}

impl Index<usize> for Solution {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}

impl IndexMut<usize> for Solution {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.values[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_setup_sizes_and_zero_fills() {
        let domain = SolutionDomain::with_bounds(3, -1.0, 1.0).unwrap();
        let solution = Solution::from_domain(&domain);

        assert!(solution.is_valid());
        assert_eq!(solution.len(), 3);
        for i in 0..3 {
            assert_eq!(solution[i], 0.0);
        }
        assert!(solution.objective().is_nan());
        assert!(solution.fitness().is_nan());
    }

    #[test]
    fn test_default_solution_is_invalid() {
        assert!(!Solution::new().is_valid());
    }

    #[test]
    fn test_randomize_stays_in_domain() {
        let domain = SolutionDomain::with_bounds(4, 2.0, 8.0).unwrap();
        let mut solution = Solution::from_domain(&domain);
        let mut rng = StdRng::seed_from_u64(42);

        solution.randomize(&domain, &mut rng);
        for i in 0..4 {
            assert!(domain[i].validate(solution[i]));
        }
    }

    #[test]
    fn test_randomize_ignores_mismatched_domain() {
        let domain = SolutionDomain::with_bounds(3, 1.0, 2.0).unwrap();
        let other = SolutionDomain::with_bounds(2, 1.0, 2.0).unwrap();
        let mut solution = Solution::from_domain(&domain);
        let mut rng = StdRng::seed_from_u64(42);

        solution.randomize(&other, &mut rng);
        for i in 0..3 {
            assert_eq!(solution[i], 0.0);
        }
    }

    #[test]
    fn test_clamp_saturates_values() {
        let domain = SolutionDomain::with_bounds(2, 0.0, 1.0).unwrap();
        let mut solution = Solution::from_domain(&domain);
        solution[0] = -4.0;
        solution[1] = 4.0;

        solution.clamp(&domain);
        assert_eq!(solution[0], 0.0);
        assert_eq!(solution[1], 1.0);
    }

    #[test]
    fn test_checked_access_reports_out_of_range() {
        let domain = SolutionDomain::with_size(2);
        let mut solution = Solution::from_domain(&domain);

        assert!(solution.at(1).is_ok());
        assert!(matches!(
            solution.at(2),
            Err(DEError::OutOfRange { index: 2, len: 2 })
        ));
        assert!(solution.at_mut(5).is_err());
    }
}
