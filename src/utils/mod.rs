//! Utility modules for common functionality

pub mod process;

pub use process::ProcessRunner;
