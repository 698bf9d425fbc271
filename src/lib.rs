//! Strategy-driven differential evolution optimization engine.
//!
//! This crate implements differential evolution (DE), a population-based
//! stochastic optimizer for continuous problems, as a small synchronous
//! state machine built from pluggable strategy objects. Every phase of the
//! generation loop (initialization, mutation, crossover, selection, domain
//! adaptation, fitness transform, optimization direction and stopping
//! criteria) is a cloneable [`Strategy`] that can be swapped or extended
//! without touching the engine.
//!
//! # Features
//!
//! - Rand/1 and Best/1 mutation, binomial and exponential crossover
//! - Maximization and minimization through a single comparator interface
//! - Pluggable fitness transforms (identity, linear, opposite, inverse)
//! - Per-generation statistics (best/median/worst, mean, stdev) and an
//!   append-only history for charting
//! - Deterministic seeded runs, reproducible across resets
//! - A prototype registry so shells can offer strategies by name
//!
//! # Example
//!
//! ```rust
//! use devolve::{
//!     DifferentialEvolution, EngineParameters, FitnessStrategy, OptimizationStrategy,
//!     Problem, ProblemCore, SetupState, Solution, SolutionDomain, Strategy,
//! };
//!
//! // A one-dimensional peak search: maximize -(x - 7)^2 over [0, 10].
//! #[derive(Debug, Clone)]
//! struct PeakSearch {
//!     core: ProblemCore,
//! }
//!
//! impl PeakSearch {
//!     fn new() -> Self {
//!         let domain = SolutionDomain::with_bounds(1, 0.0, 10.0).unwrap();
//!         Self { core: ProblemCore::new(domain) }
//!     }
//! }
//!
//! impl Strategy for PeakSearch {
//!     fn name(&self) -> &str {
//!         "Peak Search"
//!     }
//! }
//!
//! impl Problem for PeakSearch {
//!     fn domain(&self) -> &SolutionDomain {
//!         self.core.domain()
//!     }
//!     fn optimization(&self) -> &dyn OptimizationStrategy {
//!         self.core.optimization()
//!     }
//!     fn fitness(&self) -> &dyn FitnessStrategy {
//!         self.core.fitness()
//!     }
//!     fn fitness_mut(&mut self) -> &mut dyn FitnessStrategy {
//!         self.core.fitness_mut()
//!     }
//!     fn evaluate(&self, solution: &Solution) -> f64 {
//!         -(solution[0] - 7.0).powi(2)
//!     }
//!     fn describe(&self, solution: &Solution) -> String {
//!         format!("x = {:.3}", solution[0])
//!     }
//!     fn engine_parameters(&self) -> EngineParameters {
//!         let mut parameters = EngineParameters::default();
//!         parameters.set_max_generation(100);
//!         parameters.set_seed(Some(42));
//!         parameters
//!     }
//! }
//!
//! let mut engine = DifferentialEvolution::new();
//! assert_eq!(engine.setup(Some(Box::new(PeakSearch::new()))), SetupState::Success);
//! engine.process();
//!
//! assert!(engine.is_stopping_criteria_reached());
//! let best = engine.statistics_history().last().unwrap().best_solution();
//! assert!((best[0] - 7.0).abs() < 0.1);
//! ```
#![warn(missing_docs)]

pub mod error;
pub use error::{DEError, Result};

/// Scalar closed interval, the per-dimension bound.
pub mod interval;

/// Per-dimension bound vector of a problem.
pub mod domain;

/// Candidate solution with cached objective and fitness.
pub mod solution;

/// Ordered solution collection with aggregate statistics.
pub mod population;

/// Fitness summary of one population at one generation.
pub mod statistics;

/// Append-only record of per-generation statistics.
pub mod history;

/// Base capability of every pluggable algorithm.
pub mod strategy;

/// Optimization direction (maximization / minimization).
pub mod optimization;

/// Objective-to-fitness transforms.
pub mod fitness;

/// Initial population seeding strategies.
pub mod initialization;

/// Out-of-domain value handling after mutation and crossover.
pub mod adaptive_domain;

/// Mutation strategy family.
pub mod mutation;
/// Best/1 mutation strategy.
pub mod mutation_best1;
/// Rand/1 mutation strategy.
pub mod mutation_rand1;

/// Crossover strategy family.
pub mod crossover;
/// Binomial (uniform) crossover.
pub mod crossover_binomial;
/// Exponential (contiguous-run) crossover.
pub mod crossover_exponential;

/// Selection strategy family.
pub mod selection;

/// Stopping criteria family.
pub mod stopping;

/// Problem definitions: the objective and its search space.
pub mod problem;

/// Validated engine parameter set.
pub mod parameters;

/// Named strategy prototypes for UI-facing code.
pub mod registry;

/// The generation-loop orchestrator.
pub mod differential_evolution;

mod distinct_indices;


pub use adaptive_domain::{
    AdaptiveDomainClamped, AdaptiveDomainNoConstraint, AdaptiveDomainStrategy,
};
pub use crossover::CrossoverStrategy;
pub use crossover_binomial::CrossoverBinomial;
pub use crossover_exponential::CrossoverExponential;
pub use differential_evolution::{CallbackAction, DifferentialEvolution, SetupState};
pub use domain::SolutionDomain;
pub use fitness::{
    FitnessIdentity, FitnessInverse, FitnessLinear, FitnessOpposite, FitnessStrategy,
};
pub use history::{History, HistoryRange};
pub use initialization::{
    InitializationBySolution, InitializationDomainUniform, InitializationStrategy,
};
pub use interval::Interval;
pub use mutation::MutationStrategy;
pub use mutation_best1::MutationBest1;
pub use mutation_rand1::MutationRand1;
pub use optimization::{
    OptimizationMaximization, OptimizationMinimization, OptimizationStrategy,
};
pub use parameters::EngineParameters;
pub use population::Population;
pub use problem::{Problem, ProblemCore};
pub use registry::StrategyRegistry;
pub use selection::{SelectionBestFitness, SelectionStrategy};
pub use solution::Solution;
pub use statistics::Statistics;
pub use stopping::{StoppingCriteriaMaxGeneration, StoppingCriteriaStrategy};
pub use strategy::Strategy;
