pub mod builder;
pub mod engine;
pub mod options;
pub mod report;

pub use builder::EngineBuilder;
pub use engine::Engine;
pub use options::{DeOptions, DeOptionsBuilder, LogLevel};
pub use report::{EvolutionResult, GenerationReport, GenerationTrace, Reporter};
