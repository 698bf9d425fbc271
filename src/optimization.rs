//! Optimization direction: how two fitness values compare.

use crate::strategy::Strategy;

/// Decides which of two fitness values is the better one.
///
/// The comparison drives both population sorting and selection:
/// `compare(v1, v2)` returns `true` when `v1` is strictly better than `v2`.
pub trait OptimizationStrategy: Strategy {
    /// Returns `true` if `v1` is strictly better than `v2`.
    fn compare(&self, v1: f64, v2: f64) -> bool;
}

dyn_clone::clone_trait_object!(OptimizationStrategy);

/// Maximization: higher fitness wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimizationMaximization;

impl OptimizationMaximization {
    /// Creates the maximization strategy.
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for OptimizationMaximization {
    fn name(&self) -> &str {
        "Maximization"
    }

    fn summary(&self) -> &str {
        "Seeks the highest fitness value"
    }

    fn description(&self) -> &str {
        "Considers a solution better than another when its fitness is \
         strictly greater. Sorting and selection both favor high fitness."
    }
}

impl OptimizationStrategy for OptimizationMaximization {
    fn compare(&self, v1: f64, v2: f64) -> bool {
        v1 > v2
    }
}

/// Minimization: lower fitness wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimizationMinimization;

impl OptimizationMinimization {
    /// Creates the minimization strategy.
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for OptimizationMinimization {
    fn name(&self) -> &str {
        "Minimization"
    }

    fn summary(&self) -> &str {
        "Seeks the lowest fitness value"
    }

    fn description(&self) -> &str {
        "Considers a solution better than another when its fitness is \
         strictly smaller. Sorting and selection both favor low fitness."
    }
}

impl OptimizationStrategy for OptimizationMinimization {
    fn compare(&self, v1: f64, v2: f64) -> bool {
        v1 < v2
    }
}
