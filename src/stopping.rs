//! Stopping criteria: when the evolution is allowed to end.

use crate::differential_evolution::DifferentialEvolution;
use crate::strategy::Strategy;

/// Decides whether the evolution should stop.
///
/// Criteria are evaluated with a logical OR: the run stops as soon as any
/// configured criterion is satisfied, including the always-present
/// max-generation one. A criterion only reads engine state.
pub trait StoppingCriteriaStrategy: Strategy {
    /// Returns `true` if the criterion is met for the engine's current
    /// state.
    fn is_stopping(&self, de: &DifferentialEvolution) -> bool;
}

dyn_clone::clone_trait_object!(StoppingCriteriaStrategy);

/// Stops once the generation counter reaches a fixed cap.
///
/// An instance of this criterion is always present inside
/// [`EngineParameters`](crate::parameters::EngineParameters) and cannot be
/// removed; its cap tracks the configured maximum generation count.
#[derive(Debug, Clone)]
pub struct StoppingCriteriaMaxGeneration {
    max_generation: usize,
}

impl StoppingCriteriaMaxGeneration {
    /// Creates the criterion with the given generation cap.
    pub fn new(max_generation: usize) -> Self {
        Self { max_generation }
    }

    /// Returns the generation cap.
    pub fn max_generation(&self) -> usize {
        self.max_generation
    }

    /// Sets the generation cap.
    pub fn set_max_generation(&mut self, max_generation: usize) {
        self.max_generation = max_generation;
    }
}

impl Default for StoppingCriteriaMaxGeneration {
    fn default() -> Self {
        Self {
            max_generation: 250,
        }
    }
}

impl Strategy for StoppingCriteriaMaxGeneration {
    fn name(&self) -> &str {
        "Max Generation"
    }

    fn summary(&self) -> &str {
        "Stops after a fixed number of generations"
    }

    fn description(&self) -> &str {
        "Reports the stop condition once the engine's generation counter \
         has reached the configured cap. This criterion is implicit in \
         every run and cannot be removed."
    }
}

impl StoppingCriteriaStrategy for StoppingCriteriaMaxGeneration {
    fn is_stopping(&self, de: &DifferentialEvolution) -> bool {
        de.current_generation() >= self.max_generation
    }
}
