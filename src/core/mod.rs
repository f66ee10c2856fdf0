//! Core query compilation
//!
//! Normalizes the raw query options and compiles them into the argument
//! vector of a single `analyze_phonons` invocation.

pub mod options;
pub mod query;

pub use options::{DirectionMask, IndexOption, LengthSweep, ScalarOrRange};
pub use query::{
    CalcKind, CalculationMode, EngineCommand, QueryOptions, QueryWarning, compile, select_mode,
};
