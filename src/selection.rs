//! Selection strategies: which trial individuals enter the next generation.

use rand::RngCore;

use crate::optimization::OptimizationStrategy;
use crate::population::Population;
use crate::strategy::Strategy;

/// Merges the trial population into the actual population in place.
pub trait SelectionStrategy: Strategy {
    /// Once-per-generation setup with read access to the population.
    fn prepare(&mut self, _actual: &Population, _rng: &mut dyn RngCore) {}

    /// Decides, per index, whether the trial individual replaces the actual
    /// one.
    fn process(
        &mut self,
        optimization: &dyn OptimizationStrategy,
        actual: &mut Population,
        trial: &Population,
    );
}

dyn_clone::clone_trait_object!(SelectionStrategy);

/// Greedy one-to-one selection.
///
/// For each index the trial individual is kept iff it is strictly better,
/// per the optimization comparator, than the actual individual at that
/// index; otherwise the actual individual survives. The best fitness in the
/// population can therefore never degrade.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionBestFitness;

impl SelectionBestFitness {
    /// Creates the greedy selection.
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for SelectionBestFitness {
    fn name(&self) -> &str {
        "Best Fitness"
    }

    fn summary(&self) -> &str {
        "Keeps the strictly better of target and trial"
    }

    fn description(&self) -> &str {
        "Compares each trial individual against the actual individual at \
         the same index and keeps the trial only when it is strictly \
         better. Ties retain the actual individual."
    }
}

impl SelectionStrategy for SelectionBestFitness {
    fn process(
        &mut self,
        optimization: &dyn OptimizationStrategy,
        actual: &mut Population,
        trial: &Population,
    ) {
        for i in 0..actual.len() {
            if optimization.compare(trial[i].fitness(), actual[i].fitness()) {
                actual[i] = trial[i].clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SolutionDomain;
    use crate::optimization::{OptimizationMaximization, OptimizationMinimization};

    fn population_with_fitness(values: &[f64]) -> Population {
        let domain = SolutionDomain::with_size(1);
        let mut population = Population::with_setup(values.len(), &domain);
        for (i, &fitness) in values.iter().enumerate() {
            population[i].set_scores(fitness, fitness);
            population[i][0] = fitness;
        }
        population
    }

    #[test]
    fn test_keeps_strictly_better_trials_only() {
        let mut actual = population_with_fitness(&[5.0, 5.0, 5.0]);
        let trial = population_with_fitness(&[7.0, 5.0, 3.0]);

        SelectionBestFitness::new().process(
            &OptimizationMaximization::new(),
            &mut actual,
            &trial,
        );
        let kept: Vec<f64> = actual.iter().map(|s| s.fitness()).collect();
        assert_eq!(kept, vec![7.0, 5.0, 5.0]);
    }

    #[test]
    fn test_respects_minimization() {
        let mut actual = population_with_fitness(&[5.0, 5.0]);
        let trial = population_with_fitness(&[7.0, 3.0]);

        SelectionBestFitness::new().process(
            &OptimizationMinimization::new(),
            &mut actual,
            &trial,
        );
        let kept: Vec<f64> = actual.iter().map(|s| s.fitness()).collect();
        assert_eq!(kept, vec![5.0, 3.0]);
    }

    #[test]
    fn test_replacement_copies_the_whole_solution() {
        let mut actual = population_with_fitness(&[1.0]);
        let trial = population_with_fitness(&[9.0]);

        SelectionBestFitness::new().process(
            &OptimizationMaximization::new(),
            &mut actual,
            &trial,
        );
        assert_eq!(actual[0][0], 9.0);
        assert_eq!(actual[0].objective(), 9.0);
    }
}
