//! Configuration management for the phonon query front end
//!
//! Resolves where the analyzer engine lives and how the compiled invocation
//! is handled.

use crate::{
    cli::{Args, OutputFormat},
    error::AnalyzerError,
};
use std::{env, path::PathBuf};
use tracing::debug;

/// File name of the analyzer engine executable
pub const ENGINE_NAME: &str = "analyze_phonons";

/// Environment variable that overrides the engine location
pub const ENGINE_ENV: &str = "PHONON_QUERY_ENGINE";

/// Main configuration structure
#[derive(Debug, Clone)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Analyzer engine executable
    pub engine: PathBuf,
    /// Print the invocation instead of running it
    pub dry_run: bool,
    /// Output format used by dry runs
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            engine: default_engine(),
            dry_run: false,
            format: OutputFormat::Text,
        }
    }
}

/// The engine is expected next to the front-end executable, falling back to
/// a `PATH` lookup
fn default_engine() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(ENGINE_NAME)))
        .filter(|candidate| candidate.is_file())
        .unwrap_or_else(|| PathBuf::from(ENGINE_NAME))
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, AnalyzerError> {
        let mut config = Self {
            debug: args.debug,
            dry_run: args.dry_run,
            format: args.format,
            ..Self::default()
        };

        if let Some(engine) = &args.engine {
            config.engine = engine.clone();
        }
        debug!("Using analyzer engine: {}", config.engine.display());

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), AnalyzerError> {
        if self.engine.as_os_str().is_empty() {
            return Err(AnalyzerError::config("Analyzer engine path is empty", None));
        }

        // Bare names are resolved through PATH when launched
        let explicit = self.engine.components().count() > 1;
        if !self.dry_run && explicit && !self.engine.exists() {
            return Err(AnalyzerError::config(
                format!("Analyzer engine not found: {}", self.engine.display()),
                Some(self.engine.clone()),
            ));
        }

        Ok(())
    }
}
