//! The validated parameter set driving one engine instance.

use crate::adaptive_domain::{AdaptiveDomainClamped, AdaptiveDomainStrategy};
use crate::crossover::CrossoverStrategy;
use crate::crossover_binomial::CrossoverBinomial;
use crate::differential_evolution::DifferentialEvolution;
use crate::initialization::{InitializationDomainUniform, InitializationStrategy};
use crate::mutation::MutationStrategy;
use crate::mutation_rand1::MutationRand1;
use crate::selection::{SelectionBestFitness, SelectionStrategy};
use crate::stopping::{StoppingCriteriaMaxGeneration, StoppingCriteriaStrategy};

/// The complete parameter set of a differential evolution run.
///
/// Owns exactly one instance of each mandatory strategy (initialization,
/// domain adaptation, mutation, crossover, selection) plus any number of
/// optional stopping criteria and the always-present implicit max-generation
/// criterion. Population size and generation cap are clamped silently to
/// their legal ranges rather than failing.
///
/// Every strategy accessor returns a fresh clone: the caller owns the
/// returned box and must not assume it aliases internal state.
#[derive(Debug, Clone)]
pub struct EngineParameters {
    population_size: usize,
    initialization: Option<Box<dyn InitializationStrategy>>,
    adaptive_domain: Option<Box<dyn AdaptiveDomainStrategy>>,
    mutation: Option<Box<dyn MutationStrategy>>,
    crossover: Option<Box<dyn CrossoverStrategy>>,
    selection: Option<Box<dyn SelectionStrategy>>,
    stopping_criteria: Vec<Box<dyn StoppingCriteriaStrategy>>,
    max_generation_criterion: StoppingCriteriaMaxGeneration,
    seed: Option<u64>,
    disp: bool,
}

impl EngineParameters {
    /// Smallest accepted population size.
    pub const MIN_POPULATION_SIZE: usize = 5;
    /// Largest accepted population size.
    pub const MAX_POPULATION_SIZE: usize = 1000;
    /// Population size used by [`Default`].
    pub const DEFAULT_POPULATION_SIZE: usize = 25;
    /// Smallest accepted generation cap.
    pub const MIN_GENERATION_COUNT: usize = 10;
    /// Largest accepted generation cap.
    pub const MAX_GENERATION_COUNT: usize = 100_000;
    /// Generation cap used by [`Default`].
    pub const DEFAULT_GENERATION_COUNT: usize = 150;

    /// Creates a parameter set with every mandatory slot unset.
    ///
    /// Useful to assemble a configuration strategy by strategy;
    /// [`is_ready`](Self::is_ready) stays `false` until all five slots are
    /// filled.
    pub fn empty() -> Self {
        Self {
            population_size: Self::DEFAULT_POPULATION_SIZE,
            initialization: None,
            adaptive_domain: None,
            mutation: None,
            crossover: None,
            selection: None,
            stopping_criteria: Vec::new(),
            max_generation_criterion: StoppingCriteriaMaxGeneration::new(
                Self::DEFAULT_GENERATION_COUNT,
            ),
            seed: None,
            disp: false,
        }
    }

    /// Returns the configured population size.
    pub fn population_size(&self) -> usize {
        self.population_size
    }

    /// Sets the population size, silently clamped to
    /// `[MIN_POPULATION_SIZE, MAX_POPULATION_SIZE]`.
    pub fn set_population_size(&mut self, size: usize) {
        self.population_size = size.clamp(Self::MIN_POPULATION_SIZE, Self::MAX_POPULATION_SIZE);
    }

    /// Returns the configured generation cap.
    pub fn max_generation(&self) -> usize {
        self.max_generation_criterion.max_generation()
    }

    /// Sets the generation cap, silently clamped to
    /// `[MIN_GENERATION_COUNT, MAX_GENERATION_COUNT]`. The implicit
    /// max-generation stopping criterion tracks this value.
    pub fn set_max_generation(&mut self, count: usize) {
        let clamped = count.clamp(Self::MIN_GENERATION_COUNT, Self::MAX_GENERATION_COUNT);
        self.max_generation_criterion.set_max_generation(clamped);
    }

    /// Returns the seed of the engine's random generator, if fixed.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Fixes (or releases) the seed of the engine's random generator.
    /// Seeded runs are reproducible, including across resets.
    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }

    /// Returns whether per-generation progress lines are printed.
    pub fn disp(&self) -> bool {
        self.disp
    }

    /// Enables or disables per-generation progress lines on stderr.
    pub fn set_disp(&mut self, disp: bool) {
        self.disp = disp;
    }

    /// Returns a clone of the initialization strategy, if set.
    pub fn initialization_strategy(&self) -> Option<Box<dyn InitializationStrategy>> {
        self.initialization.clone()
    }

    /// Returns a clone of the domain-adaptation strategy, if set.
    pub fn adaptive_domain_strategy(&self) -> Option<Box<dyn AdaptiveDomainStrategy>> {
        self.adaptive_domain.clone()
    }

    /// Returns a clone of the mutation strategy, if set.
    pub fn mutation_strategy(&self) -> Option<Box<dyn MutationStrategy>> {
        self.mutation.clone()
    }

    /// Returns a clone of the crossover strategy, if set.
    pub fn crossover_strategy(&self) -> Option<Box<dyn CrossoverStrategy>> {
        self.crossover.clone()
    }

    /// Returns a clone of the selection strategy, if set.
    pub fn selection_strategy(&self) -> Option<Box<dyn SelectionStrategy>> {
        self.selection.clone()
    }

    /// Returns clones of the optional stopping criteria. The implicit
    /// max-generation criterion is not included.
    pub fn stopping_criteria_strategies(&self) -> Vec<Box<dyn StoppingCriteriaStrategy>> {
        self.stopping_criteria.clone()
    }

    /// Replaces the initialization strategy, discarding the previous one.
    pub fn set_initialization_strategy(&mut self, strategy: Box<dyn InitializationStrategy>) {
        self.initialization = Some(strategy);
    }

    /// Replaces the domain-adaptation strategy, discarding the previous one.
    pub fn set_adaptive_domain_strategy(&mut self, strategy: Box<dyn AdaptiveDomainStrategy>) {
        self.adaptive_domain = Some(strategy);
    }

    /// Replaces the mutation strategy, discarding the previous one.
    pub fn set_mutation_strategy(&mut self, strategy: Box<dyn MutationStrategy>) {
        self.mutation = Some(strategy);
    }

    /// Replaces the crossover strategy, discarding the previous one.
    pub fn set_crossover_strategy(&mut self, strategy: Box<dyn CrossoverStrategy>) {
        self.crossover = Some(strategy);
    }

    /// Replaces the selection strategy, discarding the previous one.
    pub fn set_selection_strategy(&mut self, strategy: Box<dyn SelectionStrategy>) {
        self.selection = Some(strategy);
    }

    /// Returns the mutation factor `f`, or `None` while no mutation
    /// strategy is set.
    pub fn mutation_factor(&self) -> Option<f64> {
        self.mutation.as_ref().map(|m| m.mutation_factor())
    }

    /// Sets the mutation factor `f` on the owned mutation strategy, clamped
    /// to `[0, 2]`. Does nothing while no mutation strategy is set.
    pub fn set_mutation_factor(&mut self, factor: f64) {
        if let Some(mutation) = &mut self.mutation {
            mutation.set_mutation_factor(factor);
        }
    }

    /// Returns the crossover rate `R`, or `None` while no crossover
    /// strategy is set.
    pub fn crossover_rate(&self) -> Option<f64> {
        self.crossover.as_ref().map(|c| c.crossover_rate())
    }

    /// Sets the crossover rate `R` on the owned crossover strategy, clamped
    /// to `[0, 1]`. Does nothing while no crossover strategy is set.
    pub fn set_crossover_rate(&mut self, rate: f64) {
        if let Some(crossover) = &mut self.crossover {
            crossover.set_crossover_rate(rate);
        }
    }

    /// Appends an optional stopping criterion.
    pub fn add_stopping_criteria_strategy(&mut self, strategy: Box<dyn StoppingCriteriaStrategy>) {
        self.stopping_criteria.push(strategy);
    }

    /// Removes every optional stopping criterion. The implicit
    /// max-generation criterion always remains.
    pub fn clear_stopping_criteria_strategies(&mut self) {
        self.stopping_criteria.clear();
    }

    /// Returns the number of optional stopping criteria, excluding the
    /// implicit max-generation one.
    pub fn stopping_criteria_len(&self) -> usize {
        self.stopping_criteria.len()
    }

    /// Returns `true` when all five mandatory strategy slots are filled.
    /// The implicit stopping criterion is always present and not counted.
    pub fn is_ready(&self) -> bool {
        self.initialization.is_some()
            && self.adaptive_domain.is_some()
            && self.mutation.is_some()
            && self.crossover.is_some()
            && self.selection.is_some()
    }

    /// Restores every parameter to its default value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` if any stopping criterion is satisfied for the
    /// engine's current state, the implicit max-generation one included.
    pub fn is_stopping_criteria_met(&self, de: &DifferentialEvolution) -> bool {
        self.max_generation_criterion.is_stopping(de)
            || self
                .stopping_criteria
                .iter()
                .any(|criterion| criterion.is_stopping(de))
    }

    pub(crate) fn initialization_mut(&mut self) -> Option<&mut (dyn InitializationStrategy + 'static)> {
        self.initialization.as_deref_mut()
    }

    pub(crate) fn adaptive_domain_mut(&mut self) -> Option<&mut (dyn AdaptiveDomainStrategy + 'static)> {
        self.adaptive_domain.as_deref_mut()
    }

    pub(crate) fn mutation_mut(&mut self) -> Option<&mut (dyn MutationStrategy + 'static)> {
        self.mutation.as_deref_mut()
    }

    pub(crate) fn crossover_mut(&mut self) -> Option<&mut (dyn CrossoverStrategy + 'static)> {
        self.crossover.as_deref_mut()
    }

    pub(crate) fn selection_mut(&mut self) -> Option<&mut (dyn SelectionStrategy + 'static)> {
        self.selection.as_deref_mut()
    }
}

impl Default for EngineParameters {
    /// Every slot filled with the stock strategy: uniform-from-domain
    /// initialization, clamped domain adaptation, Rand/1 mutation, binomial
    /// crossover, best-fitness selection.
    fn default() -> Self {
        Self {
            population_size: Self::DEFAULT_POPULATION_SIZE,
            initialization: Some(Box::new(InitializationDomainUniform::new())),
            adaptive_domain: Some(Box::new(AdaptiveDomainClamped::new())),
            mutation: Some(Box::new(MutationRand1::default())),
            crossover: Some(Box::new(CrossoverBinomial::default())),
            selection: Some(Box::new(SelectionBestFitness::new())),
            stopping_criteria: Vec::new(),
            max_generation_criterion: StoppingCriteriaMaxGeneration::new(
                Self::DEFAULT_GENERATION_COUNT,
            ),
            seed: None,
            disp: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutation_best1::MutationBest1;

    #[test]
    fn test_population_size_clamps_silently() {
        let mut parameters = EngineParameters::default();

        parameters.set_population_size(2);
        assert_eq!(parameters.population_size(), 5);

        parameters.set_population_size(2000);
        assert_eq!(parameters.population_size(), 1000);

        parameters.set_population_size(50);
        assert_eq!(parameters.population_size(), 50);
    }

    #[test]
    fn test_max_generation_clamps_and_tracks_criterion() {
        let mut parameters = EngineParameters::default();

        parameters.set_max_generation(1);
        assert_eq!(parameters.max_generation(), 10);

        parameters.set_max_generation(1_000_000);
        assert_eq!(parameters.max_generation(), 100_000);
    }

    #[test]
    fn test_empty_parameters_are_not_ready() {
        let mut parameters = EngineParameters::empty();
        assert!(!parameters.is_ready());

        parameters.set_initialization_strategy(Box::new(InitializationDomainUniform::new()));
        parameters.set_adaptive_domain_strategy(Box::new(AdaptiveDomainClamped::new()));
        parameters.set_mutation_strategy(Box::new(MutationRand1::default()));
        parameters.set_crossover_strategy(Box::new(CrossoverBinomial::default()));
        assert!(!parameters.is_ready());

        parameters.set_selection_strategy(Box::new(SelectionBestFitness::new()));
        assert!(parameters.is_ready());
    }

    #[test]
    fn test_default_parameters_are_ready() {
        assert!(EngineParameters::default().is_ready());
    }

    #[test]
    fn test_accessor_returns_independent_clone() {
        let parameters = EngineParameters::default();
        let mut clone = parameters.mutation_strategy().unwrap();
        clone.set_mutation_factor(1.9);

        // The owned strategy is unaffected by mutations of the clone.
        assert_eq!(parameters.mutation_factor(), Some(0.5));
    }

    #[test]
    fn test_factor_accessors_without_strategies() {
        let mut parameters = EngineParameters::empty();
        assert_eq!(parameters.mutation_factor(), None);
        assert_eq!(parameters.crossover_rate(), None);

        // Setters are no-ops while the slots are empty.
        parameters.set_mutation_factor(1.0);
        parameters.set_crossover_rate(0.5);
        assert_eq!(parameters.mutation_factor(), None);
    }

    #[test]
    fn test_factor_setters_delegate_to_strategies() {
        let mut parameters = EngineParameters::default();
        parameters.set_mutation_strategy(Box::new(MutationBest1::new(0.5)));

        parameters.set_mutation_factor(1.5);
        assert_eq!(parameters.mutation_factor(), Some(1.5));

        parameters.set_crossover_rate(0.9);
        assert_eq!(parameters.crossover_rate(), Some(0.9));
    }

    #[test]
    fn test_clear_keeps_implicit_criterion() {
        let mut parameters = EngineParameters::default();
        parameters
            .add_stopping_criteria_strategy(Box::new(StoppingCriteriaMaxGeneration::new(42)));
        assert_eq!(parameters.stopping_criteria_len(), 1);

        parameters.clear_stopping_criteria_strategies();
        assert_eq!(parameters.stopping_criteria_len(), 0);
        // The implicit cap is untouched by the clear.
        assert_eq!(
            parameters.max_generation(),
            EngineParameters::DEFAULT_GENERATION_COUNT
        );
    }
}
