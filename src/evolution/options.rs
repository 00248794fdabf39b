//! # DeOptions
//!
//! The `DeOptions` struct holds the configuration of a Differential Evolution run:
//! the mutation factor `F`, the crossover rate `CR`, the population size `N`, the
//! dimension `D` of the search domain, the bounds used to sample the initial
//! population, an optional seed and the logging level.
//!
//! ## Example
//!
//! ```rust
//! use diffevo::evolution::options::{DeOptions, LogLevel};
//!
//! // Create a new DeOptions instance with custom parameters
//! let custom = DeOptions::new(0.8, 0.7, 30, 5, (-5.0, 5.0));
//! assert!(custom.validate().is_ok());
//!
//! // Or with the builder
//! let built = DeOptions::builder()
//!     .mutation_factor(0.5)
//!     .crossover_rate(0.9)
//!     .population_size(50)
//!     .dimension(2)
//!     .bounds(-10.0, 10.0)
//!     .seed(42)
//!     .log_level(LogLevel::Minimal)
//!     .build();
//! assert_eq!(built.get_seed(), Some(42));
//! ```
//!
//! ## Validation
//!
//! Options are checked once, before the engine allocates anything:
//!
//! - `F` must be finite and strictly positive.
//! - `CR` must lie in `[0, 1]`.
//! - `N` must be at least 4, since mutation needs three donors distinct from the target.
//! - `D` must be at least 1.
//! - Both bounds must be finite with `lower < upper`, and `upper - lower` must be finite.

use tracing::warn;

use crate::{
    crossover::CrossoverKind,
    error::{DeError, Result},
};

/// Smallest population for which three donors distinct from the target exist.
pub const MIN_POPULATION_SIZE: usize = 4;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Logs every individual and its fitness each generation.
    Verbose,
    /// Logs the best fitness each generation.
    Minimal,
    #[default]
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct DeOptions {
    mutation_factor: f64,
    crossover_rate: f64,
    population_size: usize,
    dimension: usize,
    lower: f64,
    upper: f64,
    seed: Option<u64>,
    crossover_kind: CrossoverKind,
    log_level: LogLevel,
}

impl DeOptions {
    /// Creates a new `DeOptions` instance.
    ///
    /// # Arguments
    ///
    /// * `mutation_factor` - The scale `F` applied to the donor difference.
    /// * `crossover_rate` - The probability `CR` of taking a mutant component.
    /// * `population_size` - The number of individuals `N`.
    /// * `dimension` - The number of components `D` of every individual.
    /// * `bounds` - The `(lower, upper)` range used to sample the initial population.
    pub fn new(
        mutation_factor: f64,
        crossover_rate: f64,
        population_size: usize,
        dimension: usize,
        bounds: (f64, f64),
    ) -> Self {
        Self {
            mutation_factor,
            crossover_rate,
            population_size,
            dimension,
            lower: bounds.0,
            upper: bounds.1,
            ..Self::default()
        }
    }

    pub fn get_mutation_factor(&self) -> f64 {
        self.mutation_factor
    }

    pub fn get_crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the `(lower, upper)` sampling bounds.
    pub fn get_bounds(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_crossover_kind(&self) -> CrossoverKind {
        self.crossover_kind
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn set_mutation_factor(&mut self, mutation_factor: f64) {
        self.mutation_factor = mutation_factor;
    }

    pub fn set_crossover_rate(&mut self, crossover_rate: f64) {
        self.crossover_rate = crossover_rate;
    }

    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    pub fn set_dimension(&mut self, dimension: usize) {
        self.dimension = dimension;
    }

    pub fn set_bounds(&mut self, lower: f64, upper: f64) {
        self.lower = lower;
        self.upper = upper;
    }

    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }

    pub fn set_crossover_kind(&mut self, crossover_kind: CrossoverKind) {
        self.crossover_kind = crossover_kind;
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Checks every parameter and returns the first violation as a
    /// `DeError::Configuration`.
    pub fn validate(&self) -> Result<()> {
        let problem = if !self.mutation_factor.is_finite() || self.mutation_factor <= 0.0 {
            Some(format!(
                "Mutation factor must be finite and greater than 0, got {}",
                self.mutation_factor
            ))
        } else if !(0.0..=1.0).contains(&self.crossover_rate) {
            Some(format!(
                "Crossover rate must be in [0, 1], got {}",
                self.crossover_rate
            ))
        } else if self.population_size < MIN_POPULATION_SIZE {
            Some(format!(
                "Population size must be at least {}, got {}",
                MIN_POPULATION_SIZE, self.population_size
            ))
        } else if self.dimension == 0 {
            Some("Dimension must be at least 1".to_string())
        } else if !self.lower.is_finite() || !self.upper.is_finite() {
            Some(format!(
                "Bounds must be finite, got [{}, {}]",
                self.lower, self.upper
            ))
        } else if self.lower >= self.upper {
            Some(format!(
                "Lower bound must be less than upper bound, got [{}, {}]",
                self.lower, self.upper
            ))
        } else if !(self.upper - self.lower).is_finite() {
            Some(format!(
                "Bounds span must be finite, got [{}, {}]",
                self.lower, self.upper
            ))
        } else {
            None
        };

        match problem {
            Some(message) => {
                warn!(reason = %message, "Rejected optimizer configuration");
                Err(DeError::Configuration(message))
            }
            None => Ok(()),
        }
    }

    /// Returns a builder for creating a `DeOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use diffevo::evolution::options::DeOptions;
    ///
    /// let options = DeOptions::builder()
    ///     .population_size(40)
    ///     .dimension(3)
    ///     .build();
    /// assert_eq!(options.get_population_size(), 40);
    /// assert_eq!(options.get_mutation_factor(), 0.5);
    /// ```
    pub fn builder() -> DeOptionsBuilder {
        DeOptionsBuilder::default()
    }
}

impl Default for DeOptions {
    fn default() -> Self {
        Self {
            mutation_factor: 0.5,
            crossover_rate: 0.9,
            population_size: 50,
            dimension: 2,
            lower: -10.0,
            upper: 10.0,
            seed: None,
            crossover_kind: CrossoverKind::Binomial,
            log_level: LogLevel::None,
        }
    }
}

/// Builder for `DeOptions`.
///
/// Unset fields fall back to the values of `DeOptions::default()`.
#[derive(Debug, Clone, Default)]
pub struct DeOptionsBuilder {
    mutation_factor: Option<f64>,
    crossover_rate: Option<f64>,
    population_size: Option<usize>,
    dimension: Option<usize>,
    bounds: Option<(f64, f64)>,
    seed: Option<u64>,
    crossover_kind: Option<CrossoverKind>,
    log_level: Option<LogLevel>,
}

impl DeOptionsBuilder {
    pub fn mutation_factor(mut self, value: f64) -> Self {
        self.mutation_factor = Some(value);
        self
    }

    pub fn crossover_rate(mut self, value: f64) -> Self {
        self.crossover_rate = Some(value);
        self
    }

    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn dimension(mut self, value: usize) -> Self {
        self.dimension = Some(value);
        self
    }

    pub fn bounds(mut self, lower: f64, upper: f64) -> Self {
        self.bounds = Some((lower, upper));
        self
    }

    pub fn seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    pub fn crossover_kind(mut self, value: CrossoverKind) -> Self {
        self.crossover_kind = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Builds the `DeOptions` instance. Validation happens when the engine is built.
    pub fn build(self) -> DeOptions {
        let defaults = DeOptions::default();
        let (lower, upper) = self.bounds.unwrap_or((defaults.lower, defaults.upper));
        DeOptions {
            mutation_factor: self.mutation_factor.unwrap_or(defaults.mutation_factor),
            crossover_rate: self.crossover_rate.unwrap_or(defaults.crossover_rate),
            population_size: self.population_size.unwrap_or(defaults.population_size),
            dimension: self.dimension.unwrap_or(defaults.dimension),
            lower,
            upper,
            seed: self.seed,
            crossover_kind: self.crossover_kind.unwrap_or(defaults.crossover_kind),
            log_level: self.log_level.unwrap_or(defaults.log_level),
        }
    }
}
