//! Standard test landscapes.
//!
//! Plain functions usable directly as objectives:
//!
//! ```rust
//! use diffevo::evolution::{DeOptions, Engine};
//! use diffevo::functions::paraboloid;
//!
//! let mut engine = Engine::new(DeOptions::builder().seed(3).build(), paraboloid).unwrap();
//! let result = engine.run(100).unwrap();
//! assert!(result.fitness < 2.1);
//! ```

use std::f64::consts::PI;

/// `sum((x_i + 1)^2) + 2`, minimum 2 at `x_i = -1`.
pub fn paraboloid(x: &[f64]) -> f64 {
    x.iter().map(|v| (v + 1.0).powi(2)).sum::<f64>() + 2.0
}

/// Rastrigin function, minimum 0 at the origin.
pub fn rastrigin(x: &[f64]) -> f64 {
    x.iter()
        .map(|v| v * v - 10.0 * (2.0 * PI * v).cos() + 10.0)
        .sum()
}

/// Rosenbrock function, minimum 0 at `x_i = 1`.
///
/// Defined for two or more dimensions; returns 0.0 otherwise.
pub fn rosenbrock(x: &[f64]) -> f64 {
    if x.len() < 2 {
        return 0.0;
    }
    x.windows(2)
        .map(|w| 100.0 * (w[0] * w[0] - w[1]).powi(2) + (w[0] - 1.0).powi(2))
        .sum()
}

/// Bent Cigar function `x_0^2 + 10^6 * sum(x_i^2, i >= 1)`, minimum 0 at the origin.
///
/// Defined for two or more dimensions; returns 0.0 otherwise.
pub fn bent_cigar(x: &[f64]) -> f64 {
    match x.split_first() {
        Some((head, tail)) if !tail.is_empty() => {
            head * head + 1.0e6 * tail.iter().map(|v| v * v).sum::<f64>()
        }
        _ => 0.0,
    }
}
