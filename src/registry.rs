//! Named strategy prototypes for UI-facing code.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::adaptive_domain::{
    AdaptiveDomainClamped, AdaptiveDomainNoConstraint, AdaptiveDomainStrategy,
};
use crate::crossover::CrossoverStrategy;
use crate::crossover_binomial::CrossoverBinomial;
use crate::crossover_exponential::CrossoverExponential;
use crate::error::{DEError, Result};
use crate::initialization::{
    InitializationBySolution, InitializationDomainUniform, InitializationStrategy,
};
use crate::mutation::MutationStrategy;
use crate::mutation_best1::MutationBest1;
use crate::mutation_rand1::MutationRand1;
use crate::selection::{SelectionBestFitness, SelectionStrategy};
use crate::stopping::{StoppingCriteriaMaxGeneration, StoppingCriteriaStrategy};
use crate::strategy::Strategy;

/// One family's prototype store: strategy name to prototype instance.
struct PrototypeSet<T: Strategy + ?Sized>
where
    Box<T>: Clone,
{
    prototypes: HashMap<String, Box<T>>,
}

impl<T: Strategy + ?Sized> Clone for PrototypeSet<T>
where
    Box<T>: Clone,
{
    fn clone(&self) -> Self {
        Self {
            prototypes: self.prototypes.clone(),
        }
    }
}

impl<T: Strategy + ?Sized> std::fmt::Debug for PrototypeSet<T>
where
    Box<T>: Clone,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrototypeSet")
            .field("prototypes", &self.prototypes)
            .finish()
    }
}

impl<T: Strategy + ?Sized> Default for PrototypeSet<T>
where
    Box<T>: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Strategy + ?Sized> PrototypeSet<T>
where
    Box<T>: Clone,
{
    fn new() -> Self {
        Self {
            prototypes: HashMap::new(),
        }
    }

    fn register(&mut self, family: &str, prototype: Box<T>) -> Result<()> {
        match self.prototypes.entry(prototype.name().to_string()) {
            Entry::Occupied(entry) => Err(DEError::DuplicateStrategyName {
                family: family.to_string(),
                name: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(prototype);
                Ok(())
            }
        }
    }

    fn create(&self, name: &str) -> Option<Box<T>> {
        self.prototypes.get(name).cloned()
    }

    fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.prototypes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// A per-family store of named strategy prototypes.
///
/// UI or shell code registers prototypes once and later creates fresh
/// clones by name, e.g. to populate selection widgets and instantiate the
/// chosen strategies. Registering two prototypes with the same name within
/// a family fails with [`DEError::DuplicateStrategyName`] and leaves the
/// registry intact.
#[derive(Debug, Clone, Default)]
pub struct StrategyRegistry {
    initialization: PrototypeSet<dyn InitializationStrategy>,
    adaptive_domain: PrototypeSet<dyn AdaptiveDomainStrategy>,
    mutation: PrototypeSet<dyn MutationStrategy>,
    crossover: PrototypeSet<dyn CrossoverStrategy>,
    selection: PrototypeSet<dyn SelectionStrategy>,
    stopping_criteria: PrototypeSet<dyn StoppingCriteriaStrategy>,
}

impl StrategyRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            initialization: PrototypeSet::new(),
            adaptive_domain: PrototypeSet::new(),
            mutation: PrototypeSet::new(),
            crossover: PrototypeSet::new(),
            selection: PrototypeSet::new(),
            stopping_criteria: PrototypeSet::new(),
        }
    }

    /// Creates a registry pre-populated with every strategy shipped by the
    /// crate, under their canonical names.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        // Built-in names are distinct within each family, so none of these
        // registrations can fail.
        let _ = registry.register_initialization(Box::new(InitializationDomainUniform::new()));
        let _ = registry.register_initialization(Box::new(InitializationBySolution::new()));
        let _ = registry.register_adaptive_domain(Box::new(AdaptiveDomainNoConstraint::new()));
        let _ = registry.register_adaptive_domain(Box::new(AdaptiveDomainClamped::new()));
        let _ = registry.register_mutation(Box::new(MutationRand1::default()));
        let _ = registry.register_mutation(Box::new(MutationBest1::default()));
        let _ = registry.register_crossover(Box::new(CrossoverBinomial::default()));
        let _ = registry.register_crossover(Box::new(CrossoverExponential::default()));
        let _ = registry.register_selection(Box::new(SelectionBestFitness::new()));
        let _ = registry.register_stopping_criteria(Box::new(
            StoppingCriteriaMaxGeneration::default(),
        ));
        registry
    }

    /// Registers an initialization prototype under its name.
    ///
    /// # Errors
    ///
    /// Returns `DEError::DuplicateStrategyName` if the name is taken.
    pub fn register_initialization(
        &mut self,
        prototype: Box<dyn InitializationStrategy>,
    ) -> Result<()> {
        self.initialization.register("initialization", prototype)
    }

    /// Registers a domain-adaptation prototype under its name.
    ///
    /// # Errors
    ///
    /// Returns `DEError::DuplicateStrategyName` if the name is taken.
    pub fn register_adaptive_domain(
        &mut self,
        prototype: Box<dyn AdaptiveDomainStrategy>,
    ) -> Result<()> {
        self.adaptive_domain.register("adaptive-domain", prototype)
    }

    /// Registers a mutation prototype under its name.
    ///
    /// # Errors
    ///
    /// Returns `DEError::DuplicateStrategyName` if the name is taken.
    pub fn register_mutation(&mut self, prototype: Box<dyn MutationStrategy>) -> Result<()> {
        self.mutation.register("mutation", prototype)
    }

    /// Registers a crossover prototype under its name.
    ///
    /// # Errors
    ///
    /// Returns `DEError::DuplicateStrategyName` if the name is taken.
    pub fn register_crossover(&mut self, prototype: Box<dyn CrossoverStrategy>) -> Result<()> {
        self.crossover.register("crossover", prototype)
    }

    /// Registers a selection prototype under its name.
    ///
    /// # Errors
    ///
    /// Returns `DEError::DuplicateStrategyName` if the name is taken.
    pub fn register_selection(&mut self, prototype: Box<dyn SelectionStrategy>) -> Result<()> {
        self.selection.register("selection", prototype)
    }

    /// Registers a stopping-criteria prototype under its name.
    ///
    /// # Errors
    ///
    /// Returns `DEError::DuplicateStrategyName` if the name is taken.
    pub fn register_stopping_criteria(
        &mut self,
        prototype: Box<dyn StoppingCriteriaStrategy>,
    ) -> Result<()> {
        self.stopping_criteria
            .register("stopping-criteria", prototype)
    }

    /// Creates a fresh clone of the named initialization prototype.
    pub fn create_initialization(&self, name: &str) -> Option<Box<dyn InitializationStrategy>> {
        self.initialization.create(name)
    }

    /// Creates a fresh clone of the named domain-adaptation prototype.
    pub fn create_adaptive_domain(&self, name: &str) -> Option<Box<dyn AdaptiveDomainStrategy>> {
        self.adaptive_domain.create(name)
    }

    /// Creates a fresh clone of the named mutation prototype.
    pub fn create_mutation(&self, name: &str) -> Option<Box<dyn MutationStrategy>> {
        self.mutation.create(name)
    }

    /// Creates a fresh clone of the named crossover prototype.
    pub fn create_crossover(&self, name: &str) -> Option<Box<dyn CrossoverStrategy>> {
        self.crossover.create(name)
    }

    /// Creates a fresh clone of the named selection prototype.
    pub fn create_selection(&self, name: &str) -> Option<Box<dyn SelectionStrategy>> {
        self.selection.create(name)
    }

    /// Creates a fresh clone of the named stopping-criteria prototype.
    pub fn create_stopping_criteria(
        &self,
        name: &str,
    ) -> Option<Box<dyn StoppingCriteriaStrategy>> {
        self.stopping_criteria.create(name)
    }

    /// Lists the registered initialization names, sorted.
    pub fn initialization_names(&self) -> Vec<&str> {
        self.initialization.names()
    }

    /// Lists the registered domain-adaptation names, sorted.
    pub fn adaptive_domain_names(&self) -> Vec<&str> {
        self.adaptive_domain.names()
    }

    /// Lists the registered mutation names, sorted.
    pub fn mutation_names(&self) -> Vec<&str> {
        self.mutation.names()
    }

    /// Lists the registered crossover names, sorted.
    pub fn crossover_names(&self) -> Vec<&str> {
        self.crossover.names()
    }

    /// Lists the registered selection names, sorted.
    pub fn selection_names(&self) -> Vec<&str> {
        self.selection.names()
    }

    /// Lists the registered stopping-criteria names, sorted.
    pub fn stopping_criteria_names(&self) -> Vec<&str> {
        self.stopping_criteria.names()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_name_is_rejected() {
        let mut registry = StrategyRegistry::new();
        registry
            .register_mutation(Box::new(MutationRand1::default()))
            .unwrap();

        let err = registry
            .register_mutation(Box::new(MutationRand1::new(1.0)))
            .unwrap_err();
        assert!(matches!(err, DEError::DuplicateStrategyName { .. }));

        // The registry keeps the original prototype.
        let kept = registry.create_mutation("Rand/1").unwrap();
        assert_eq!(kept.mutation_factor(), 0.5);
    }

    #[test]
    fn test_same_name_in_different_families_is_fine() {
        // Family stores are independent; a clash only occurs within one.
        let mut registry = StrategyRegistry::new();
        registry
            .register_mutation(Box::new(MutationRand1::default()))
            .unwrap();
        registry
            .register_crossover(Box::new(CrossoverBinomial::default()))
            .unwrap();
        assert_eq!(registry.mutation_names(), vec!["Rand/1"]);
        assert_eq!(registry.crossover_names(), vec!["Binomial"]);
    }

    #[test]
    fn test_builtins_are_complete() {
        let registry = StrategyRegistry::with_builtins();
        assert_eq!(
            registry.initialization_names(),
            vec!["By Solution", "Domain Uniform"]
        );
        assert_eq!(
            registry.adaptive_domain_names(),
            vec!["Clamped", "No Constraint"]
        );
        assert_eq!(registry.mutation_names(), vec!["Best/1", "Rand/1"]);
        assert_eq!(
            registry.crossover_names(),
            vec!["Binomial", "Exponential"]
        );
        assert_eq!(registry.selection_names(), vec!["Best Fitness"]);
        assert_eq!(
            registry.stopping_criteria_names(),
            vec!["Max Generation"]
        );
    }

    #[test]
    fn test_created_strategy_is_a_clone() {
        let registry = StrategyRegistry::with_builtins();
        let mut created = registry.create_crossover("Binomial").unwrap();
        created.set_crossover_rate(0.1);

        // Mutating the created clone leaves the prototype untouched.
        let fresh = registry.create_crossover("Binomial").unwrap();
        assert_eq!(fresh.crossover_rate(), 0.75);
    }

    #[test]
    fn test_unknown_name_creates_nothing() {
        let registry = StrategyRegistry::with_builtins();
        assert!(registry.create_mutation("Rand/2").is_none());
    }
}
