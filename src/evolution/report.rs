use crate::{mutation::Donors, population::{Individual, Population}};

/// The per-generation summary handed to reporters.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    /// Number of completed generations, starting at 1 for the first `step`.
    pub generation: usize,
    /// Copy of the best individual after this generation.
    pub best: Individual,
    pub best_fitness: f64,
    /// How many parents were replaced by their offspring in this generation.
    pub replaced: usize,
}

/// Everything one generation produced, for diagnostics and reference traces.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationTrace {
    pub report: GenerationReport,
    /// Parents as they were before the generation ran.
    pub parents: Population,
    pub parent_fitness: Vec<f64>,
    pub donors: Vec<Donors>,
    pub mutants: Population,
    pub offspring: Population,
    pub offspring_fitness: Vec<f64>,
}

/// Represents the result of a run: the best individual and its fitness.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult {
    pub best: Individual,
    pub fitness: f64,
    /// Total number of generations the engine has completed.
    pub generations: usize,
}

/// A downstream sink for per-generation reports.
///
/// Closures taking a `&GenerationReport` are reporters:
///
/// ```rust
/// use diffevo::evolution::{GenerationReport, Reporter};
///
/// let mut history = Vec::new();
/// let mut sink = |report: &GenerationReport| history.push(report.best_fitness);
/// sink.report(&GenerationReport {
///     generation: 1,
///     best: vec![0.0],
///     best_fitness: 2.5,
///     replaced: 3,
/// });
/// assert_eq!(history, vec![2.5]);
/// ```
pub trait Reporter {
    fn report(&mut self, report: &GenerationReport);
}

impl<F> Reporter for F
where
    F: FnMut(&GenerationReport),
{
    fn report(&mut self, report: &GenerationReport) {
        self(report)
    }
}
