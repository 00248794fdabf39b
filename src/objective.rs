//! # Objective
//!
//! The `Objective` trait is the capability the optimizer minimizes. Any closure taking
//! a slice of reals and returning a real is already an objective; closures that can
//! fail are adapted with [`fallible`].
//!
//! ```rust
//! use diffevo::objective::{fallible, Objective};
//!
//! let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
//! assert_eq!(sphere.evaluate(&[1.0, 2.0]).unwrap(), 5.0);
//!
//! let checked = fallible(|x: &[f64]| {
//!     if x[0] < 0.0 {
//!         Err(std::io::Error::new(std::io::ErrorKind::Other, "negative input"))
//!     } else {
//!         Ok(x[0].sqrt())
//!     }
//! });
//! assert!(checked.evaluate(&[-1.0]).is_err());
//! ```

use std::error::Error as StdError;
use std::fmt;

use crate::error::{DeError, Result};

/// A scalar function to be minimized.
///
/// Implementations must be pure: evaluating a point must not change the result of
/// later evaluations. They must also accept points outside the initialization
/// bounds, since mutation does not clamp.
pub trait Objective {
    fn evaluate(&self, candidate: &[f64]) -> Result<f64>;
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64,
{
    fn evaluate(&self, candidate: &[f64]) -> Result<f64> {
        Ok(self(candidate))
    }
}

/// Adapter turning a fallible closure into an [`Objective`].
///
/// The closure's error is carried unchanged as the source of
/// `DeError::ObjectiveEvaluation`.
#[derive(Clone)]
pub struct Fallible<F> {
    func: F,
}

impl<F> fmt::Debug for Fallible<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fallible").finish_non_exhaustive()
    }
}

/// Wraps a closure returning `Result<f64, E>` so it can be used as an objective.
pub fn fallible<F, E>(func: F) -> Fallible<F>
where
    F: Fn(&[f64]) -> std::result::Result<f64, E>,
    E: StdError + Send + Sync + 'static,
{
    Fallible { func }
}

impl<F, E> Objective for Fallible<F>
where
    F: Fn(&[f64]) -> std::result::Result<f64, E>,
    E: StdError + Send + Sync + 'static,
{
    fn evaluate(&self, candidate: &[f64]) -> Result<f64> {
        (self.func)(candidate).map_err(DeError::objective)
    }
}

/// Evaluates `candidate` and rejects results that cannot be ordered.
pub(crate) fn score<O>(objective: &O, candidate: &[f64]) -> Result<f64>
where
    O: Objective + ?Sized,
{
    let value = objective.evaluate(candidate)?;
    if value.is_nan() {
        return Err(DeError::InvalidNumericValue(format!(
            "Objective returned NaN for candidate {:?}",
            candidate
        )));
    }
    Ok(value)
}
