pub mod crossover;
pub mod error;
pub mod evolution;
pub mod functions;
pub mod mutation;
pub mod objective;
pub mod population;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use error::{DeError, OptionExt, Result};
pub use evolution::{DeOptions, Engine, EngineBuilder, EvolutionResult, GenerationReport};
pub use objective::Objective;
