//! # Error Types
//!
//! This module defines the error type shared by every stage of the optimizer.
//! Configuration problems are rejected before a run starts, while failures of the
//! objective function are passed through to the caller untouched.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use diffevo::error::{DeError, Result};
//!
//! fn check_population(size: usize) -> Result<()> {
//!     if size < 4 {
//!         return Err(DeError::Configuration(format!(
//!             "Population size must be at least 4, got {}",
//!             size
//!         )));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_population(3).unwrap_err().is_config_error());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use diffevo::error::{DeError, OptionExt};
//!
//! fn lowest(values: &[f64]) -> diffevo::error::Result<f64> {
//!     values
//!         .iter()
//!         .cloned()
//!         .reduce(f64::min)
//!         .ok_or_else_de(|| DeError::EmptyPopulation)
//! }
//!
//! assert_eq!(lowest(&[3.0, 1.0, 2.0]).unwrap(), 1.0);
//! ```

use std::collections::TryReserveError;
use std::error::Error as StdError;
use thiserror::Error;

/// Represents errors that can occur while running Differential Evolution.
#[derive(Error, Debug)]
pub enum DeError {
    /// An invalid configuration was provided. Raised before any generation runs.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Storage for the population could not be reserved.
    #[error("Resource error: {0}")]
    Resource(String),

    /// The objective function itself failed. The original error is kept as the source.
    #[error("Objective evaluation error: {0}")]
    ObjectiveEvaluation(#[source] Box<dyn StdError + Send + Sync + 'static>),

    /// The objective produced a value that cannot be ordered (NaN).
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// A random draw was requested from a range that cannot produce a valid value.
    #[error("Degenerate sampling: {0}")]
    DegenerateSampling(String),

    /// An operation needed at least one individual and found none.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,
}

/// A specialized Result type for Differential Evolution operations.
pub type Result<T> = std::result::Result<T, DeError>;

impl DeError {
    /// Wraps a failure raised by the objective function.
    pub fn objective<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        DeError::ObjectiveEvaluation(Box::new(error))
    }

    /// Returns `true` if this error rejects the configuration of a run.
    ///
    /// Degenerate sampling requests are configuration mistakes too: they can only
    /// happen when a range or a population size was set up wrong.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            DeError::Configuration(_) | DeError::DegenerateSampling(_)
        )
    }

    /// Returns `true` if this error originates from the objective function.
    pub fn is_objective_error(&self) -> bool {
        matches!(
            self,
            DeError::ObjectiveEvaluation(_) | DeError::InvalidNumericValue(_)
        )
    }
}

impl From<TryReserveError> for DeError {
    fn from(error: TryReserveError) -> Self {
        DeError::Resource(format!("Failed to reserve population storage: {}", error))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
///
/// ## Examples
///
/// ```rust
/// use diffevo::error::{DeError, OptionExt};
///
/// let empty: Option<usize> = None;
/// let result = empty.ok_or_else_de(|| DeError::EmptyPopulation);
/// assert!(result.is_err());
/// ```
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, DeError>` using a closure to
    /// generate the error.
    fn ok_or_else_de<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> DeError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_de<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> DeError,
    {
        self.ok_or_else(err_fn)
    }
}
