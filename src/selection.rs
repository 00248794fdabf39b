//! # Selection (greedy, per index)
//!
//! Offspring `i` replaces parent `i` only when its fitness is strictly lower. Ties keep
//! the parent. This is the only code path that writes into the live population and its
//! fitness vector.

use crate::{
    error::{DeError, Result},
    objective::Objective,
    population::{evaluate_all, Population},
};

/// What a selection pass did.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionOutcome {
    /// Fitness of every offspring, by index.
    pub offspring_fitness: Vec<f64>,
    /// Number of parents replaced by their offspring.
    pub replaced: usize,
}

/// Replaces every parent that its offspring strictly improves on.
///
/// All offspring are evaluated before anything is written, so an objective failure
/// leaves `population` and `fitness` untouched.
///
/// # Errors
///
/// - `DeError::Configuration` if the offspring or fitness shapes do not match the
///   population.
/// - Any error raised by the objective, unchanged.
pub fn select<O>(
    population: &mut Population,
    offspring: &Population,
    fitness: &mut [f64],
    objective: &O,
) -> Result<SelectionOutcome>
where
    O: Objective + ?Sized,
{
    population.ensure_same_shape(offspring, "Offspring")?;
    if fitness.len() != population.len() {
        return Err(DeError::Configuration(format!(
            "Fitness vector length ({}) doesn't match population length ({})",
            fitness.len(),
            population.len()
        )));
    }

    let offspring_fitness = evaluate_all(offspring, objective)?;

    let mut replaced = 0;
    for (index, (&candidate, current)) in offspring_fitness
        .iter()
        .zip(fitness.iter_mut())
        .enumerate()
    {
        if candidate < *current {
            population.replace(index, &offspring[index]);
            *current = candidate;
            replaced += 1;
        }
    }

    Ok(SelectionOutcome {
        offspring_fitness,
        replaced,
    })
}
