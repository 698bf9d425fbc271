//! Problem definitions: the objective function and its search space.

use rand::RngCore;

use crate::domain::SolutionDomain;
use crate::fitness::{FitnessIdentity, FitnessStrategy};
use crate::optimization::{OptimizationMaximization, OptimizationStrategy};
use crate::parameters::EngineParameters;
use crate::population::Population;
use crate::solution::Solution;
use crate::strategy::Strategy;

/// Common state every problem carries: the solution domain, the
/// optimization direction and the fitness transform.
///
/// Concrete problems embed a `ProblemCore` and delegate the corresponding
/// [`Problem`] accessors to it. Defaults to maximization with the identity
/// fitness transform.
#[derive(Debug, Clone)]
pub struct ProblemCore {
    domain: SolutionDomain,
    optimization: Box<dyn OptimizationStrategy>,
    fitness: Box<dyn FitnessStrategy>,
}

impl ProblemCore {
    /// Creates the core around a domain, with maximization and the identity
    /// transform.
    pub fn new(domain: SolutionDomain) -> Self {
        Self {
            domain,
            optimization: Box::new(OptimizationMaximization::new()),
            fitness: Box::new(FitnessIdentity::new()),
        }
    }

    /// Returns the solution domain.
    pub fn domain(&self) -> &SolutionDomain {
        &self.domain
    }

    /// Mutable access to the solution domain, for problem (re)configuration.
    pub fn domain_mut(&mut self) -> &mut SolutionDomain {
        &mut self.domain
    }

    /// Returns the optimization direction.
    pub fn optimization(&self) -> &dyn OptimizationStrategy {
        self.optimization.as_ref()
    }

    /// Returns the fitness transform.
    pub fn fitness(&self) -> &dyn FitnessStrategy {
        self.fitness.as_ref()
    }

    /// Mutable access to the fitness transform.
    pub fn fitness_mut(&mut self) -> &mut dyn FitnessStrategy {
        self.fitness.as_mut()
    }

    /// Replaces the optimization direction.
    pub fn set_optimization(&mut self, optimization: Box<dyn OptimizationStrategy>) {
        self.optimization = optimization;
    }

    /// Replaces the fitness transform.
    pub fn set_fitness(&mut self, fitness: Box<dyn FitnessStrategy>) {
        self.fitness = fitness;
    }
}

impl Default for ProblemCore {
    fn default() -> Self {
        Self::new(SolutionDomain::new())
    }
}

/// A problem definition: domain, direction, fitness transform and the
/// objective evaluator.
///
/// This is the central extension point of the engine. A problem owns its
/// [`SolutionDomain`], an [`OptimizationStrategy`] and a
/// [`FitnessStrategy`] (usually through an embedded [`ProblemCore`]) and
/// supplies the objective function via [`evaluate`](Self::evaluate). The
/// engine takes exclusive ownership of the boxed problem passed to
/// [`setup`](crate::differential_evolution::DifferentialEvolution::setup);
/// duplicating a problem is only ever an explicit `clone`.
pub trait Problem: Strategy {
    /// Returns the search-space bounds of the problem.
    fn domain(&self) -> &SolutionDomain;

    /// Returns the optimization direction.
    fn optimization(&self) -> &dyn OptimizationStrategy;

    /// Returns the fitness transform.
    fn fitness(&self) -> &dyn FitnessStrategy;

    /// Mutable access to the fitness transform, for its `prepare` phase.
    fn fitness_mut(&mut self) -> &mut dyn FitnessStrategy;

    /// Evaluates one solution and returns its raw objective score.
    ///
    /// This is the objective function of the optimization; the engine runs
    /// its result through [`fitness`](Self::fitness) to obtain the value
    /// used for every comparison.
    fn evaluate(&self, solution: &Solution) -> f64;

    /// Builds a human-readable description of a solution.
    fn describe(&self, solution: &Solution) -> String;

    /// Suggests a complete, self-consistent parameter set tailored to the
    /// problem's difficulty. Callers may accept or override it.
    fn engine_parameters(&self) -> EngineParameters {
        EngineParameters::default()
    }

    /// Problem-specific readiness hook checked by [`is_ready`](Self::is_ready).
    fn validate_readiness(&self) -> bool {
        true
    }

    /// Returns `true` when the problem can drive a run: the domain has at
    /// least one dimension and the readiness hook agrees.
    fn is_ready(&self) -> bool {
        !self.domain().is_empty() && self.validate_readiness()
    }

    /// Once-per-run hook invoked before the initial population is
    /// evaluated.
    fn prepare(&mut self, _population: &Population) {}

    /// Randomizes one solution. The default draws uniformly from the
    /// domain; problems may override this with a smarter seeding.
    fn initialize_solution(&self, solution: &mut Solution, rng: &mut dyn RngCore) {
        solution.randomize(self.domain(), rng);
    }

    /// Randomizes a whole population through
    /// [`initialize_solution`](Self::initialize_solution).
    fn initialize_randomly(&self, population: &mut Population, rng: &mut dyn RngCore) {
        for solution in population.iter_mut() {
            self.initialize_solution(solution, rng);
        }
    }
}

dyn_clone::clone_trait_object!(Problem);

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Sphere {
        core: ProblemCore,
    }

    impl Sphere {
        fn new(dimensions: usize) -> Self {
            let mut core =
                ProblemCore::new(SolutionDomain::with_bounds(dimensions, -5.0, 5.0).unwrap());
            core.set_optimization(Box::new(crate::optimization::OptimizationMinimization::new()));
            Self { core }
        }
    }

    impl Strategy for Sphere {
        fn name(&self) -> &str {
            "Sphere"
        }
    }

    impl Problem for Sphere {
        fn domain(&self) -> &SolutionDomain {
            self.core.domain()
        }

        fn optimization(&self) -> &dyn OptimizationStrategy {
            self.core.optimization()
        }

        fn fitness(&self) -> &dyn FitnessStrategy {
            self.core.fitness()
        }

        fn fitness_mut(&mut self) -> &mut dyn FitnessStrategy {
            self.core.fitness_mut()
        }

        fn evaluate(&self, solution: &Solution) -> f64 {
            solution.values().iter().map(|&x| x * x).sum()
        }

        fn describe(&self, solution: &Solution) -> String {
            format!("f = {:.6}", solution.objective())
        }
    }

    #[test]
    fn test_readiness_requires_a_dimension() {
        assert!(Sphere::new(2).is_ready());
        assert!(!Sphere::new(0).is_ready());
    }

    #[test]
    fn test_default_initialization_draws_from_domain() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let problem = Sphere::new(3);
        let mut population = Population::with_setup(4, problem.domain());
        let mut rng = StdRng::seed_from_u64(42);

        problem.initialize_randomly(&mut population, &mut rng);
        for solution in population.iter() {
            for d in 0..3 {
                assert!(problem.domain()[d].validate(solution[d]));
            }
        }
    }

    #[test]
    fn test_boxed_problem_clones_independently() {
        let boxed: Box<dyn Problem> = Box::new(Sphere::new(2));
        let cloned = boxed.clone();
        assert_eq!(cloned.name(), "Sphere");
        assert_eq!(cloned.domain().len(), 2);
    }
}
