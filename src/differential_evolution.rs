//! The orchestrator: owns the problem, the parameters and the three working
//! populations, and drives the generation loop.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::history::History;
use crate::parameters::EngineParameters;
use crate::population::Population;
use crate::problem::Problem;

/// Outcome of a [`DifferentialEvolution::setup`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum SetupState {
    /// The problem was adopted and the run is initialized.
    Success,
    /// The problem's suggested parameters are not ready.
    ErrorInvalidParameters,
    /// No problem was supplied.
    ErrorNoSolution,
    /// The supplied problem reported itself not ready.
    ErrorInvalidSolution,
}

/// Action returned by a [`DifferentialEvolution::process_with`] callback to
/// control the batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    /// Continue stepping.
    Continue,
    /// Stop the batch run after this generation.
    Stop,
}

/// The differential evolution engine.
///
/// The engine is a small synchronous state machine: constructed empty
/// (unconfigured), it becomes ready once [`setup`](Self::setup) binds a
/// problem, then [`process_to_next_generation`](Self::process_to_next_generation)
/// advances it one generation at a time until a stopping criterion is
/// reached; [`reset`](Self::reset) returns to generation 0 with a freshly
/// randomized population while keeping the bound problem and parameters.
///
/// Every public operation runs to completion before returning; there is no
/// internal threading and no suspension point. The engine owns its random
/// generator: seeded runs (see
/// [`EngineParameters::set_seed`](crate::parameters::EngineParameters::set_seed))
/// are reproducible, including across resets.
#[derive(Debug)]
pub struct DifferentialEvolution {
    current_generation: usize,
    parameters: EngineParameters,
    problem: Option<Box<dyn Problem>>,
    actual: Population,
    mutant: Population,
    trial: Population,
    history: History,
    rng: StdRng,
}

impl DifferentialEvolution {
    /// Creates an unconfigured engine.
    pub fn new() -> Self {
        Self {
            current_generation: 0,
            parameters: EngineParameters::default(),
            problem: None,
            actual: Population::new(),
            mutant: Population::new(),
            trial: Population::new(),
            history: History::new(),
            rng: Self::entropy_rng(),
        }
    }

    fn entropy_rng() -> StdRng {
        let mut thread_rng = rand::rng();
        StdRng::from_rng(&mut thread_rng)
    }

    /// Returns `true` once a problem and ready parameters are bound.
    pub fn is_ready(&self) -> bool {
        self.problem.is_some() && self.parameters.is_ready()
    }

    /// Returns the current generation counter (0 right after setup or
    /// reset).
    pub fn current_generation(&self) -> usize {
        self.current_generation
    }

    /// Returns a copy of the actual population.
    pub fn actual_population(&self) -> Population {
        self.actual.clone()
    }

    /// Returns the engine parameters in use.
    pub fn engine_parameters(&self) -> &EngineParameters {
        &self.parameters
    }

    /// Returns the bound problem.
    ///
    /// # Panics
    ///
    /// Panics when no problem is bound; querying the problem before a
    /// successful [`setup`](Self::setup) is a programming error.
    pub fn problem(&self) -> &dyn Problem {
        self.problem
            .as_deref()
            .expect("no problem bound: call setup before querying the engine")
    }

    /// Returns the per-generation statistics history.
    pub fn statistics_history(&self) -> &History {
        &self.history
    }

    /// Builds a human-readable description of the current best solution
    /// through the bound problem.
    ///
    /// # Panics
    ///
    /// Panics when no problem is bound, like [`problem`](Self::problem).
    pub fn best_solution_info(&self) -> String {
        self.problem()
            .describe(self.actual.statistics().best_solution())
    }

    /// Adopts a new parameter set.
    ///
    /// The parameters are adopted only when they are ready; otherwise the
    /// previous configuration is kept and `false` is returned. Adopting
    /// parameters while a problem is bound restarts the run so population
    /// sizing and statistics stay consistent.
    pub fn set_engine_parameters(&mut self, parameters: EngineParameters) -> bool {
        if !parameters.is_ready() {
            return false;
        }
        self.parameters = parameters;
        if self.problem.is_some() {
            self.restart();
        }
        true
    }

    /// Binds a problem and initializes the run.
    ///
    /// On success the engine takes ownership of the problem, adopts its
    /// suggested parameters, sizes the three working populations,
    /// randomizes the actual population through the initialization
    /// strategy, evaluates and sorts it, and records the generation-0
    /// statistics. On any error the engine keeps its previous state.
    pub fn setup(&mut self, problem: Option<Box<dyn Problem>>) -> SetupState {
        let Some(problem) = problem else {
            return SetupState::ErrorNoSolution;
        };
        if !problem.is_ready() {
            return SetupState::ErrorInvalidSolution;
        }
        let parameters = problem.engine_parameters();
        if !parameters.is_ready() {
            return SetupState::ErrorInvalidParameters;
        }
        self.parameters = parameters;
        self.problem = Some(problem);
        self.restart();
        SetupState::Success
    }

    /// Returns the run to generation 0.
    ///
    /// The populations are resized to the configured size and domain, the
    /// actual population is re-randomized and re-evaluated, and the history
    /// is cleared and seeded with the new generation-0 statistics. The
    /// bound problem and parameters are retained. Does nothing while the
    /// engine is not ready.
    pub fn reset(&mut self) {
        if !self.is_ready() {
            return;
        }
        self.restart();
    }

    fn restart(&mut self) {
        self.current_generation = 0;
        self.rng = match self.parameters.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => Self::entropy_rng(),
        };

        let size = self.parameters.population_size();
        {
            let problem = self
                .problem
                .as_deref()
                .expect("restart requires a bound problem");
            let domain = problem.domain();
            self.actual.setup(size, domain);
            self.mutant.setup(size, domain);
            self.trial.setup(size, domain);
        }

        {
            let problem = self
                .problem
                .as_deref()
                .expect("restart requires a bound problem");
            let initialization = self
                .parameters
                .initialization_mut()
                .expect("ready parameters have an initialization strategy");
            initialization.prepare(&self.actual, &mut self.rng);
            initialization.process(problem, &mut self.actual, &mut self.rng);
        }

        {
            let actual = &self.actual;
            let problem = self
                .problem
                .as_mut()
                .expect("restart requires a bound problem");
            problem.prepare(actual);
            problem.fitness_mut().prepare(actual);
        }

        {
            let problem = self
                .problem
                .as_deref()
                .expect("restart requires a bound problem");
            evaluate_population(problem, &mut self.actual);
            self.actual.sort(problem.optimization());
            self.actual.process_statistics();
        }

        self.history.clear();
        self.history.push(self.actual.statistics().clone());

        if self.parameters.disp() {
            let problem = self.problem.as_deref().expect("problem bound");
            eprintln!(
                "DE setup: {} dimensions, population={}, max_generation={}",
                problem.domain().len(),
                self.parameters.population_size(),
                self.parameters.max_generation(),
            );
            self.display_progress();
        }
    }

    /// Returns `true` if any configured stopping criterion is satisfied,
    /// the implicit max-generation one included. Always `false` while the
    /// engine is not ready.
    pub fn is_stopping_criteria_reached(&self) -> bool {
        if !self.is_ready() {
            return false;
        }
        self.parameters.is_stopping_criteria_met(self)
    }

    /// Advances the evolution by one generation.
    ///
    /// Does nothing while the engine is not ready or a stopping criterion
    /// is already met. One generation is: mutation into the mutant
    /// population, domain adaptation of the mutants, crossover into the
    /// trial population, domain adaptation of the trials, evaluation of the
    /// trials, selection merging the trials into the actual population,
    /// resort and statistics, generation increment, history append.
    pub fn process_to_next_generation(&mut self) {
        if !self.is_ready() || self.is_stopping_criteria_reached() {
            return;
        }

        {
            let mutation = self
                .parameters
                .mutation_mut()
                .expect("ready parameters have a mutation strategy");
            mutation.prepare(&self.actual, &mut self.rng);
            mutation.process(&self.actual, &mut self.mutant, &mut self.rng);
        }

        {
            let problem = self.problem.as_deref().expect("problem bound");
            let adaptive = self
                .parameters
                .adaptive_domain_mut()
                .expect("ready parameters have an adaptive-domain strategy");
            adaptive.prepare(&self.mutant, &mut self.rng);
            adaptive.process(problem.domain(), &mut self.mutant);
        }

        {
            let crossover = self
                .parameters
                .crossover_mut()
                .expect("ready parameters have a crossover strategy");
            crossover.prepare(&self.trial, &mut self.rng);
            crossover.process(&self.actual, &self.mutant, &mut self.trial, &mut self.rng);
        }

        {
            let problem = self.problem.as_deref().expect("problem bound");
            let adaptive = self
                .parameters
                .adaptive_domain_mut()
                .expect("ready parameters have an adaptive-domain strategy");
            adaptive.prepare(&self.trial, &mut self.rng);
            adaptive.process(problem.domain(), &mut self.trial);
        }

        {
            let trial = &self.trial;
            let problem = self.problem.as_mut().expect("problem bound");
            problem.fitness_mut().prepare(trial);
        }
        {
            let problem = self.problem.as_deref().expect("problem bound");
            evaluate_population(problem, &mut self.trial);
        }

        {
            let problem = self.problem.as_deref().expect("problem bound");
            let selection = self
                .parameters
                .selection_mut()
                .expect("ready parameters have a selection strategy");
            selection.prepare(&self.actual, &mut self.rng);
            selection.process(problem.optimization(), &mut self.actual, &self.trial);
        }

        {
            let problem = self.problem.as_deref().expect("problem bound");
            self.actual.sort(problem.optimization());
            self.actual.process_statistics();
        }

        self.current_generation += 1;
        self.history.push(self.actual.statistics().clone());

        if self.parameters.disp() {
            self.display_progress();
        }
    }

    /// Runs [`process_to_next_generation`](Self::process_to_next_generation)
    /// until a stopping criterion is reached.
    pub fn process(&mut self) {
        while self.is_ready() && !self.is_stopping_criteria_reached() {
            self.process_to_next_generation();
        }
    }

    /// Like [`process`](Self::process), invoking `callback` with the
    /// completed generation index after each step. The callback may stop
    /// the batch run early by returning [`CallbackAction::Stop`].
    pub fn process_with<F>(&mut self, mut callback: F)
    where
        F: FnMut(usize) -> CallbackAction,
    {
        while self.is_ready() && !self.is_stopping_criteria_reached() {
            self.process_to_next_generation();
            if callback(self.current_generation) == CallbackAction::Stop {
                break;
            }
        }
    }

    fn display_progress(&self) {
        let statistics = self.actual.statistics();
        eprintln!(
            "DE gen {:4}  best_f={:.6e}  mean={:.6e}  std={:.3e}",
            self.current_generation,
            statistics.best_solution().fitness(),
            statistics.average(),
            statistics.stdev(),
        );
    }
}

impl Default for DifferentialEvolution {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluates objective and fitness for every solution of a population.
fn evaluate_population(problem: &dyn Problem, population: &mut Population) {
    for solution in population.iter_mut() {
        let objective = problem.evaluate(solution);
        let fitness = problem.fitness().process(objective);
        solution.set_scores(objective, fitness);
    }
}
