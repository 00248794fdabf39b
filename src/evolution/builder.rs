use crate::{
    error::{DeError, Result},
    objective::Objective,
};

use super::{DeOptions, Engine};

/// Fluent construction of an [`Engine`].
///
/// ```rust
/// use diffevo::evolution::{DeOptions, EngineBuilder};
///
/// let engine = EngineBuilder::new()
///     .with_options(DeOptions::builder().seed(1).build())
///     .with_objective(|x: &[f64]| x.iter().map(|v| v.abs()).sum::<f64>())
///     .build()
///     .unwrap();
/// assert_eq!(engine.generation(), 0);
/// ```
pub struct EngineBuilder<O> {
    options: Option<DeOptions>,
    objective: Option<O>,
}

impl<O> EngineBuilder<O>
where
    O: Objective,
{
    pub fn new() -> Self {
        Self {
            options: None,
            objective: None,
        }
    }

    pub fn with_options(mut self, options: DeOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_objective(mut self, objective: O) -> Self {
        self.objective = Some(objective);
        self
    }

    /// Builds the engine, sampling and evaluating the initial population.
    ///
    /// # Errors
    ///
    /// Returns `DeError::Configuration` if the options or the objective were not
    /// given, plus every error [`Engine::new`] can return.
    pub fn build(self) -> Result<Engine<O>> {
        let options = self
            .options
            .ok_or_else(|| DeError::Configuration("Options not specified".to_string()))?;

        let objective = self
            .objective
            .ok_or_else(|| DeError::Configuration("Objective not specified".to_string()))?;

        Engine::new(options, objective)
    }
}

impl<O> Default for EngineBuilder<O>
where
    O: Objective,
{
    fn default() -> Self {
        Self::new()
    }
}
