//! # Mutation (DE/rand/1)
//!
//! For every target index `i`, three donors `r1`, `r2`, `r3` are drawn so that
//! `r1`, `r2`, `r3` and `i` are pairwise distinct, and the mutant is
//!
//! ```text
//! mutant[i][j] = population[r1][j] + F * (population[r2][j] - population[r3][j])
//! ```
//!
//! Mutant components are not clamped to the initialization bounds.
//!
//! ## Example
//!
//! ```rust
//! use diffevo::mutation::mutate;
//! use diffevo::population::Population;
//! use diffevo::rng::RandomSource;
//!
//! let population = Population::from_individuals(vec![
//!     vec![0.0, 0.0],
//!     vec![1.0, 1.0],
//!     vec![2.0, 2.0],
//!     vec![3.0, 3.0],
//! ])
//! .unwrap();
//! let mut rng = RandomSource::from_seed(42);
//!
//! let mutants = mutate(&population, 0.5, &mut rng).unwrap();
//! assert_eq!(mutants.population.len(), 4);
//! assert_eq!(mutants.donors.len(), 4);
//! ```

use crate::{
    error::{DeError, Result},
    evolution::options::MIN_POPULATION_SIZE,
    population::Population,
    rng::RandomSource,
};

/// The donor indices `[r1, r2, r3]` used to build one mutant.
pub type Donors = [usize; 3];

/// The transient output of mutation: one mutant per target index.
#[derive(Debug, Clone, PartialEq)]
pub struct Mutants {
    pub population: Population,
    /// `donors[i]` holds the indices combined into `population[i]`.
    pub donors: Vec<Donors>,
}

/// Draws three donor indices for `target` from `0..size`.
///
/// Each donor is drawn uniformly and redrawn until it differs from the target and
/// from the donors already chosen.
///
/// # Errors
///
/// Returns `DeError::DegenerateSampling` when `size < 4`, where no such triple exists,
/// and `DeError::Configuration` when `target` is out of range.
pub fn draw_donors(target: usize, size: usize, rng: &mut RandomSource) -> Result<Donors> {
    if size < MIN_POPULATION_SIZE {
        return Err(DeError::DegenerateSampling(format!(
            "Mutation needs at least {} individuals to draw three distinct donors, got {}",
            MIN_POPULATION_SIZE, size
        )));
    }
    if target >= size {
        return Err(DeError::Configuration(format!(
            "Target index {} is outside a population of {}",
            target, size
        )));
    }

    let mut donors: Donors = [target; 3];
    for slot in 0..donors.len() {
        let mut candidate = rng.uniform_int(0, size - 1)?;
        while candidate == target || donors[..slot].contains(&candidate) {
            candidate = rng.uniform_int(0, size - 1)?;
        }
        donors[slot] = candidate;
    }
    Ok(donors)
}

/// Builds the mutant population with the DE/rand/1 scheme.
///
/// Every target's donors are drawn before its components are computed, in index order.
pub fn mutate(population: &Population, factor: f64, rng: &mut RandomSource) -> Result<Mutants> {
    let size = population.len();
    let mut mutants = Population::with_capacity(size, population.dimension())?;
    let mut donors = Vec::new();
    donors.try_reserve_exact(size)?;

    for target in 0..size {
        let [r1, r2, r3] = draw_donors(target, size, rng)?;
        let mutant = population[r1]
            .iter()
            .zip(population[r2].iter())
            .zip(population[r3].iter())
            .map(|((&x1, &x2), &x3)| x1 + factor * (x2 - x3))
            .collect();
        mutants.push(mutant);
        donors.push([r1, r2, r3]);
    }

    Ok(Mutants {
        population: mutants,
        donors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_population(size: usize, dimension: usize) -> Population {
        Population::from_individuals(
            (0..size)
                .map(|i| vec![i as f64; dimension])
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_donors_are_pairwise_distinct() {
        let mut rng = RandomSource::from_seed(17);
        for size in [4, 5, 10, 50] {
            for target in 0..size {
                let [r1, r2, r3] = draw_donors(target, size, &mut rng).unwrap();
                assert!(r1 < size && r2 < size && r3 < size);
                assert!(r1 != target && r2 != target && r3 != target);
                assert!(r1 != r2 && r1 != r3 && r2 != r3);
            }
        }
    }

    #[test]
    fn test_donors_with_minimum_population_cover_the_other_three() {
        let mut rng = RandomSource::from_seed(23);
        for target in 0..4 {
            let mut donors = draw_donors(target, 4, &mut rng).unwrap().to_vec();
            donors.sort_unstable();
            let expected: Vec<usize> = (0..4).filter(|&i| i != target).collect();
            assert_eq!(donors, expected);
        }
    }

    #[test]
    fn test_draw_donors_rejects_small_population() {
        let mut rng = RandomSource::from_seed(1);
        for size in 0..4 {
            assert!(matches!(
                draw_donors(0, size, &mut rng),
                Err(DeError::DegenerateSampling(_))
            ));
        }
    }

    #[test]
    fn test_draw_donors_rejects_target_out_of_range() {
        let mut rng = RandomSource::from_seed(1);
        assert!(matches!(
            draw_donors(7, 5, &mut rng),
            Err(DeError::Configuration(_))
        ));
    }

    #[test]
    fn test_mutant_follows_rand1_formula() {
        let population = Population::from_individuals(vec![
            vec![0.5, -1.0, 3.0],
            vec![2.0, 4.0, -6.0],
            vec![-3.5, 0.25, 1.0],
            vec![7.0, 7.0, 7.0],
            vec![1.0, -2.0, 0.0],
        ])
        .unwrap();
        let factor = 0.7;
        let mut rng = RandomSource::from_seed(99);

        let mutants = mutate(&population, factor, &mut rng).unwrap();

        assert_eq!(mutants.population.len(), population.len());
        assert_eq!(mutants.population.dimension(), population.dimension());
        for (i, [r1, r2, r3]) in mutants.donors.iter().copied().enumerate() {
            for j in 0..population.dimension() {
                let expected = population[r1][j] + factor * (population[r2][j] - population[r3][j]);
                assert_eq!(mutants.population[i][j], expected);
            }
        }
    }

    #[test]
    fn test_mutants_are_not_clamped() {
        // With F = 2 and points spread over [0, 9], some mutants leave that range
        let population = line_population(10, 1);
        let mut rng = RandomSource::from_seed(8);

        let escaped = (0..20).any(|_| {
            let mutants = mutate(&population, 2.0, &mut rng).unwrap();
            let outside = mutants
                .population
                .iter()
                .any(|m| m[0] < 0.0 || m[0] > 9.0);
            outside
        });
        assert!(escaped);
    }

    #[test]
    fn test_mutation_is_reproducible_with_seed() {
        let population = line_population(6, 3);
        let a = mutate(&population, 0.5, &mut RandomSource::from_seed(4)).unwrap();
        let b = mutate(&population, 0.5, &mut RandomSource::from_seed(4)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_mutation_does_not_touch_parents() {
        let population = line_population(5, 2);
        let before = population.clone();
        let _ = mutate(&population, 0.9, &mut RandomSource::from_seed(2)).unwrap();
        assert_eq!(population, before);
    }
}
