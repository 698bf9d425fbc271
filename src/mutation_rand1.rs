//! Rand/1 mutation: a random base vector plus one scaled difference vector.

use ndarray::Zip;
use rand::RngCore;

use crate::distinct_indices::distinct_indices;
use crate::mutation::{MutationStrategy, MAX_MUTATION_FACTOR, MIN_MUTATION_FACTOR};
use crate::population::Population;
use crate::strategy::Strategy;

/// Rand/1 mutation.
///
/// For each target index `i`, samples three distinct indices `r1, r2, r3`
/// different from `i` and builds the donor `x_r1 + f * (x_r2 - x_r3)`.
#[derive(Debug, Clone)]
pub struct MutationRand1 {
    factor: f64,
}

impl MutationRand1 {
    /// Creates the strategy with the given mutation factor, clamped to
    /// `[0, 2]`.
    pub fn new(factor: f64) -> Self {
        Self {
            factor: factor.clamp(MIN_MUTATION_FACTOR, MAX_MUTATION_FACTOR),
        }
    }
}

impl Default for MutationRand1 {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl Strategy for MutationRand1 {
    fn name(&self) -> &str {
        "Rand/1"
    }

    fn summary(&self) -> &str {
        "Random base vector plus one difference vector"
    }

    fn description(&self) -> &str {
        "Builds each donor as x_r1 + f * (x_r2 - x_r3) from three distinct \
         randomly sampled individuals, none of which is the target. The \
         classic exploration-oriented differential evolution mutation."
    }
}

impl MutationStrategy for MutationRand1 {
    fn mutation_factor(&self) -> f64 {
        self.factor
    }

    fn set_mutation_factor(&mut self, f: f64) {
        self.factor = f.clamp(MIN_MUTATION_FACTOR, MAX_MUTATION_FACTOR);
    }

    fn process(&mut self, actual: &Population, mutant: &mut Population, rng: &mut dyn RngCore) {
        let f = self.factor;
        for i in 0..actual.len() {
            let indices = distinct_indices(&[i], 3, actual.len(), rng);
            let donor = Zip::from(actual[indices[0]].values())
                .and(actual[indices[1]].values())
                .and(actual[indices[2]].values())
                .map_collect(|&x1, &x2, &x3| x1 + f * (x2 - x3));
            mutant[i].assign(&donor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SolutionDomain;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_factor_is_clamped() {
        let mut mutation = MutationRand1::new(5.0);
        assert_eq!(mutation.mutation_factor(), 2.0);
        mutation.set_mutation_factor(-1.0);
        assert_eq!(mutation.mutation_factor(), 0.0);
    }

    #[test]
    fn test_zero_factor_copies_a_population_member() {
        let domain = SolutionDomain::with_bounds(1, 0.0, 10.0).unwrap();
        let mut actual = Population::with_setup(6, &domain);
        let mut mutant = Population::with_setup(6, &domain);
        let mut rng = StdRng::seed_from_u64(42);
        actual.randomize(&domain, &mut rng);

        let mut mutation = MutationRand1::new(0.0);
        mutation.process(&actual, &mut mutant, &mut rng);

        // With f = 0 every donor equals some base vector x_r1 != target.
        for i in 0..actual.len() {
            let donor = mutant[i][0];
            let matches = (0..actual.len()).any(|j| j != i && actual[j][0] == donor);
            assert!(matches, "donor {donor} at {i} is not a population member");
        }
    }

    #[test]
    fn test_donor_arithmetic() {
        let domain = SolutionDomain::with_bounds(2, -100.0, 100.0).unwrap();
        let mut actual = Population::with_setup(5, &domain);
        let mut mutant = Population::with_setup(5, &domain);
        let mut rng = StdRng::seed_from_u64(3);
        actual.randomize(&domain, &mut rng);

        let mut mutation = MutationRand1::new(0.5);
        mutation.process(&actual, &mut mutant, &mut rng);

        // Each donor must be expressible as x_r1 + 0.5 * (x_r2 - x_r3) for
        // some distinct triple avoiding the target index.
        for i in 0..actual.len() {
            let mut found = false;
            'search: for r1 in 0..5 {
                for r2 in 0..5 {
                    for r3 in 0..5 {
                        if [r1, r2, r3].contains(&i)
                            || r1 == r2
                            || r1 == r3
                            || r2 == r3
                        {
                            continue;
                        }
                        let ok = (0..2).all(|d| {
                            let expected =
                                actual[r1][d] + 0.5 * (actual[r2][d] - actual[r3][d]);
                            (mutant[i][d] - expected).abs() < 1e-12
                        });
                        if ok {
                            found = true;
                            break 'search;
                        }
                    }
                }
            }
            assert!(found, "donor {i} does not match any rand/1 combination");
        }
    }
}
