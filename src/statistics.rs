//! Aggregate fitness statistics over one population.

use crate::solution::Solution;

/// A fitness summary of one population at one generation.
///
/// Holds the count, extremes, sum, mean and population standard deviation of
/// the fitness values, plus owned copies of the best, median and worst
/// solutions. Statistics are rebuilt from scratch each generation; the
/// numeric accessors are meaningful only when `count() > 0`.
#[derive(Debug, Clone)]
pub struct Statistics {
    count: usize,
    minimum: f64,
    maximum: f64,
    sum: f64,
    average: f64,
    stdev: f64,
    best: Solution,
    median: Solution,
    worst: Solution,
}

impl Default for Statistics {
    fn default() -> Self {
        Self {
            count: 0,
            minimum: 0.0,
            maximum: 0.0,
            sum: 0.0,
            average: 0.0,
            stdev: 0.0,
            best: Solution::default(),
            median: Solution::default(),
            worst: Solution::default(),
        }
    }
}

impl Statistics {
    /// Builds the summary of a population already sorted best-first.
    ///
    /// The best/median/worst copies are taken positionally: first, middle
    /// and last solution. For even sizes the median is the lower of the two
    /// middle indices, which keeps the choice deterministic.
    pub(crate) fn from_sorted(solutions: &[Solution]) -> Self {
        let count = solutions.len();
        if count == 0 {
            return Self::default();
        }

        let mut minimum = f64::INFINITY;
        let mut maximum = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for solution in solutions {
            let fitness = solution.fitness();
            minimum = minimum.min(fitness);
            maximum = maximum.max(fitness);
            sum += fitness;
        }
        let average = sum / count as f64;
        let variance = solutions
            .iter()
            .map(|solution| {
                let deviation = solution.fitness() - average;
                deviation * deviation
            })
            .sum::<f64>()
            / count as f64;

        Self {
            count,
            minimum,
            maximum,
            sum,
            average,
            stdev: variance.sqrt(),
            best: solutions[0].clone(),
            median: solutions[(count - 1) / 2].clone(),
            worst: solutions[count - 1].clone(),
        }
    }

    /// Returns the number of solutions the summary was built from.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the lowest observed fitness.
    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    /// Returns the highest observed fitness.
    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    /// Returns the sum of the fitness values.
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Returns the mean fitness.
    pub fn average(&self) -> f64 {
        self.average
    }

    /// Returns the population standard deviation of the fitness values.
    pub fn stdev(&self) -> f64 {
        self.stdev
    }

    /// Returns a copy of the best solution.
    pub fn best_solution(&self) -> &Solution {
        &self.best
    }

    /// Returns a copy of the median solution.
    pub fn median_solution(&self) -> &Solution {
        &self.median
    }

    /// Returns a copy of the worst solution.
    pub fn worst_solution(&self) -> &Solution {
        &self.worst
    }

    /// Returns the summary to its empty default state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
