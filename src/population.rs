//! # Population
//!
//! A `Population` is an ordered set of candidate vectors that all share the same
//! dimension. Index `i` is the identity of an individual: the mutant and offspring
//! built for index `i` are only ever compared against the parent at index `i`.
//!
//! The fitness vector lives next to the population, owned by the engine, and is kept
//! in sync by [`initialize`] and by selection.

use tracing::debug;

use crate::{
    error::{DeError, Result},
    evolution::options::DeOptions,
    objective::{score, Objective},
    rng::RandomSource,
};

/// A point in the search domain.
pub type Individual = Vec<f64>;

/// Serialized as a plain list of rows; deserialization goes through
/// [`Population::from_individuals`], so ragged or empty input is rejected.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Individual>", into = "Vec<Individual>")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    individuals: Vec<Individual>,
    dimension: usize,
}

impl Population {
    /// Builds a population from existing vectors.
    ///
    /// # Errors
    ///
    /// Returns `DeError::EmptyPopulation` when `individuals` is empty and
    /// `DeError::Configuration` when the vectors do not share one non-zero dimension.
    pub fn from_individuals(individuals: Vec<Individual>) -> Result<Self> {
        let dimension = individuals
            .first()
            .map(Vec::len)
            .ok_or(DeError::EmptyPopulation)?;

        if dimension == 0 {
            return Err(DeError::Configuration(
                "Individuals must have at least one dimension".to_string(),
            ));
        }

        if let Some((index, odd)) = individuals
            .iter()
            .enumerate()
            .find(|(_, individual)| individual.len() != dimension)
        {
            return Err(DeError::Configuration(format!(
                "Individual {} has dimension {}, expected {}",
                index,
                odd.len(),
                dimension
            )));
        }

        Ok(Self {
            individuals,
            dimension,
        })
    }

    /// Creates an empty population with room for `size` individuals.
    pub(crate) fn with_capacity(size: usize, dimension: usize) -> Result<Self> {
        let mut individuals = Vec::new();
        individuals.try_reserve_exact(size)?;
        Ok(Self {
            individuals,
            dimension,
        })
    }

    pub(crate) fn push(&mut self, individual: Individual) {
        debug_assert_eq!(individual.len(), self.dimension);
        self.individuals.push(individual);
    }

    /// Overwrites the individual at `index`. Only selection writes into a live population.
    pub(crate) fn replace(&mut self, index: usize, individual: &[f64]) {
        self.individuals[index].copy_from_slice(individual);
    }

    /// Number of individuals (N).
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Number of components of every individual (D).
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn get(&self, index: usize) -> Option<&[f64]> {
        self.individuals.get(index).map(Vec::as_slice)
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn iter(&self) -> impl Iterator<Item = &[f64]> {
        self.individuals.iter().map(Vec::as_slice)
    }

    /// Checks that `other` has the same number of individuals and the same dimension.
    pub(crate) fn ensure_same_shape(&self, other: &Population, what: &str) -> Result<()> {
        if self.len() != other.len() || self.dimension != other.dimension {
            return Err(DeError::Configuration(format!(
                "{} population has shape {}x{}, expected {}x{}",
                what,
                other.len(),
                other.dimension,
                self.len(),
                self.dimension
            )));
        }
        Ok(())
    }
}

impl TryFrom<Vec<Individual>> for Population {
    type Error = DeError;

    fn try_from(individuals: Vec<Individual>) -> Result<Self> {
        Self::from_individuals(individuals)
    }
}

impl From<Population> for Vec<Individual> {
    fn from(population: Population) -> Self {
        population.individuals
    }
}

impl std::ops::Index<usize> for Population {
    type Output = [f64];

    fn index(&self, index: usize) -> &Self::Output {
        &self.individuals[index]
    }
}

/// Evaluates every individual in index order.
pub(crate) fn evaluate_all<O>(population: &Population, objective: &O) -> Result<Vec<f64>>
where
    O: Objective + ?Sized,
{
    let mut fitness = Vec::new();
    fitness.try_reserve_exact(population.len())?;
    for individual in population.iter() {
        fitness.push(score(objective, individual)?);
    }
    Ok(fitness)
}

/// Samples the initial population and evaluates it once.
///
/// Components are drawn in row-major order as `lower + u * (upper - lower)` with `u`
/// uniform in `[0, 1)`.
///
/// # Errors
///
/// - `DeError::Configuration` if the options are invalid (for example N < 4 or D < 1).
/// - `DeError::Resource` if the population storage cannot be reserved.
/// - Any error raised by the objective, unchanged.
pub fn initialize<O>(
    options: &DeOptions,
    objective: &O,
    rng: &mut RandomSource,
) -> Result<(Population, Vec<f64>)>
where
    O: Objective + ?Sized,
{
    options.validate()?;

    let size = options.get_population_size();
    let dimension = options.get_dimension();
    let (lower, upper) = options.get_bounds();

    let mut population = Population::with_capacity(size, dimension)?;
    for _ in 0..size {
        let mut individual = Vec::new();
        individual.try_reserve_exact(dimension)?;
        individual.extend(rng.fetch_uniform(lower, upper, dimension));
        population.push(individual);
    }

    let fitness = evaluate_all(&population, objective)?;
    debug!(
        population_size = size,
        dimension = dimension,
        "Initialized population"
    );

    Ok((population, fitness))
}
