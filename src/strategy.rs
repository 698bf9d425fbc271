//! The common capability surface of every pluggable algorithm.

use std::fmt::Debug;

use dyn_clone::DynClone;

/// Base capability of every pluggable algorithm in the engine.
///
/// A strategy carries an immutable identity (a short `name`, a one-line
/// `summary` and a longer `description`) and can always be deep-cloned, so
/// that parameter sets and UI-facing code can hand out independent copies.
/// Each family trait ([`MutationStrategy`](crate::mutation::MutationStrategy),
/// [`CrossoverStrategy`](crate::crossover::CrossoverStrategy), …) refines
/// this with its own `prepare`/`process` contract.
pub trait Strategy: DynClone + Debug {
    /// Short identifying name, unique within a strategy family.
    fn name(&self) -> &str;

    /// One-line summary of what the strategy does.
    fn summary(&self) -> &str {
        ""
    }

    /// Longer description of the algorithm and its parameters.
    fn description(&self) -> &str {
        ""
    }
}
