//! An ordered collection of candidate solutions with cached statistics.

use std::cmp::Ordering;
use std::ops::{Index, IndexMut};

use rand::RngCore;

use crate::domain::SolutionDomain;
use crate::error::{DEError, Result};
use crate::optimization::OptimizationStrategy;
use crate::solution::Solution;
use crate::statistics::Statistics;

/// The working set of candidate solutions for one role of the evolution.
///
/// The engine keeps three independent populations per run (actual, mutant
/// and trial); they are sized together and never aliased. After the engine
/// calls [`sort`](Self::sort) and [`process_statistics`](Self::process_statistics)
/// the solutions are ordered best-first according to the active optimization
/// strategy and the cached [`Statistics`] reflect exactly that order.
#[derive(Debug, Clone, Default)]
pub struct Population {
    solutions: Vec<Solution>,
    statistics: Statistics,
}

impl Population {
    /// Creates an empty population.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a population of `size` solutions sized by `domain`.
    pub fn with_setup(size: usize, domain: &SolutionDomain) -> Self {
        let mut population = Self::default();
        population.setup(size, domain);
        population
    }

    /// Returns the number of solutions.
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    /// Returns `true` if the population holds no solution.
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Checked access to one solution.
    ///
    /// # Errors
    ///
    /// Returns `DEError::OutOfRange` if `index` is past the last solution.
    pub fn at(&self, index: usize) -> Result<&Solution> {
        self.solutions.get(index).ok_or(DEError::OutOfRange {
            index,
            len: self.solutions.len(),
        })
    }

    /// Checked mutable access to one solution.
    ///
    /// # Errors
    ///
    /// Returns `DEError::OutOfRange` if `index` is past the last solution.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut Solution> {
        let len = self.solutions.len();
        self.solutions
            .get_mut(index)
            .ok_or(DEError::OutOfRange { index, len })
    }

    /// Iterates over the solutions.
    pub fn iter(&self) -> impl Iterator<Item = &Solution> {
        self.solutions.iter()
    }

    /// Iterates mutably over the solutions.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Solution> {
        self.solutions.iter_mut()
    }

    /// Returns the statistics cached by the last
    /// [`process_statistics`](Self::process_statistics) call.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Replaces all solutions with `size` freshly domain-sized ones.
    ///
    /// The new solutions have zero values and sentinel scores; they are not
    /// randomized. The cached statistics are reset.
    pub fn setup(&mut self, size: usize, domain: &SolutionDomain) {
        self.solutions.clear();
        self.solutions
            .resize_with(size, || Solution::from_domain(domain));
        self.statistics.reset();
    }

    /// Randomizes every contained solution from the domain.
    pub fn randomize(&mut self, domain: &SolutionDomain, rng: &mut dyn RngCore) {
        for solution in &mut self.solutions {
            solution.randomize(domain, rng);
        }
    }

    /// Saturates every contained solution into the domain.
    pub fn clamp(&mut self, domain: &SolutionDomain) {
        for solution in &mut self.solutions {
            solution.clamp(domain);
        }
    }

    /// Reorders the solutions best-first according to the strategy's
    /// comparison. The sort is stable: equally fit solutions keep their
    /// relative order.
    pub(crate) fn sort(&mut self, optimization: &dyn OptimizationStrategy) {
        self.solutions.sort_by(|a, b| {
            if optimization.compare(a.fitness(), b.fitness()) {
                Ordering::Less
            } else if optimization.compare(b.fitness(), a.fitness()) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
    }

    /// Rebuilds the cached statistics from the current order.
    ///
    /// Must be called after [`sort`](Self::sort): the best/median/worst
    /// copies are taken positionally.
    pub(crate) fn process_statistics(&mut self) {
        self.statistics = Statistics::from_sorted(&self.solutions);
    }
}

impl Index<usize> for Population {
    type Output = Solution;

    fn index(&self, index: usize) -> &Solution {
        &self.solutions[index]
    }
}

impl IndexMut<usize> for Population {
    fn index_mut(&mut self, index: usize) -> &mut Solution {
        &mut self.solutions[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::{OptimizationMaximization, OptimizationMinimization};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn population_with_fitness(values: &[f64]) -> Population {
        let domain = SolutionDomain::with_size(1);
        let mut population = Population::with_setup(values.len(), &domain);
        for (i, &fitness) in values.iter().enumerate() {
            population[i].set_scores(fitness, fitness);
        }
        population
    }

    #[test]
    fn test_setup_replaces_existing_solutions() {
        let domain = SolutionDomain::with_bounds(2, 0.0, 1.0).unwrap();
        let mut population = Population::with_setup(3, &domain);
        let mut rng = StdRng::seed_from_u64(1);
        population.randomize(&domain, &mut rng);

        population.setup(5, &domain);
        assert_eq!(population.len(), 5);
        for solution in population.iter() {
            assert_eq!(solution.len(), 2);
            assert_eq!(solution[0], 0.0);
            assert_eq!(solution[1], 0.0);
        }
    }

    #[test]
    fn test_sort_is_direction_aware() {
        let maximization = OptimizationMaximization::new();
        let minimization = OptimizationMinimization::new();

        let mut population = population_with_fitness(&[2.0, 5.0, 1.0, 4.0]);
        population.sort(&maximization);
        let ordered: Vec<f64> = population.iter().map(|s| s.fitness()).collect();
        assert_eq!(ordered, vec![5.0, 4.0, 2.0, 1.0]);

        population.sort(&minimization);
        let ordered: Vec<f64> = population.iter().map(|s| s.fitness()).collect();
        assert_eq!(ordered, vec![1.0, 2.0, 4.0, 5.0]);
    }

    #[test]
    fn test_sort_and_statistics_are_idempotent() {
        let maximization = OptimizationMaximization::new();
        let mut population = population_with_fitness(&[3.0, 9.0, 6.0, 6.0, 1.0]);

        population.sort(&maximization);
        population.process_statistics();
        let first: Vec<f64> = population.iter().map(|s| s.fitness()).collect();
        let first_stats = population.statistics().clone();

        population.sort(&maximization);
        population.process_statistics();
        let second: Vec<f64> = population.iter().map(|s| s.fitness()).collect();

        assert_eq!(first, second);
        assert_eq!(first_stats.average(), population.statistics().average());
        assert_eq!(first_stats.stdev(), population.statistics().stdev());
        assert_eq!(
            first_stats.median_solution().fitness(),
            population.statistics().median_solution().fitness()
        );
    }

    #[test]
    fn test_statistics_follow_optimization_direction() {
        let mut population = population_with_fitness(&[2.0, 8.0, 5.0]);

        population.sort(&OptimizationMaximization::new());
        population.process_statistics();
        let stats = population.statistics();
        assert!(stats.best_solution().fitness() >= stats.worst_solution().fitness());
        assert_eq!(stats.best_solution().fitness(), 8.0);

        population.sort(&OptimizationMinimization::new());
        population.process_statistics();
        let stats = population.statistics();
        assert!(stats.best_solution().fitness() <= stats.worst_solution().fitness());
        assert_eq!(stats.best_solution().fitness(), 2.0);
    }

    #[test]
    fn test_checked_access() {
        let population = population_with_fitness(&[1.0]);
        assert!(population.at(0).is_ok());
        assert!(matches!(
            population.at(1),
            Err(DEError::OutOfRange { index: 1, len: 1 })
        ));
    }
}
