//! Error types for the phonon query front end
//!
//! Every query error carries the exact diagnostic shown to the user, so the
//! `Display` output of these variants is part of the command-line contract.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the phonon query front end
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// `--calc` missing or not one of `tau`, `kappa`, `cumulative`
    #[error("Invalid --calc option given")]
    InvalidCalcOption { given: Option<String> },

    /// `--kpoint`/`--mode` with more than one `:`
    #[error("Invalid usage of --{option} for --calc={calc}")]
    InvalidRangeSyntax {
        option: String,
        calc: String,
        value: String,
    },

    /// `--kpoint`/`--mode` given as a range where a single index is required
    #[error("Invalid usage of --{option} for --calc={calc}")]
    InvalidSingleValue {
        option: String,
        calc: String,
        value: String,
    },

    /// `--calc=tau` without `--temp` needs both `--kpoint` and `--mode`
    #[error(
        "Please specify the temperature by --temp option, or specify both --kpoint and --mode when --calc=tau"
    )]
    MissingRequiredOption { missing: Vec<String> },

    /// `--calc=cumulative` without `--temp`
    #[error("--temp is necessary when --calc=cumulative")]
    MissingTemperature,

    /// `--length` not in `Lmax:dL` form
    #[error("Invalid usage of --length option")]
    InvalidLengthSyntax { value: String },

    /// `--direction` with too many tokens or a token outside `{1,2,3}`
    #[error("Invalid usage of --direction")]
    InvalidDirectionSyntax { value: String },

    /// A numeric token that does not parse
    #[error("Invalid value '{value}' for --{option}")]
    InvalidNumber { option: String, value: String },

    /// The analyzer engine could not be started
    #[error("Failed to launch analyzer engine: {command}")]
    Process {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String, path: Option<PathBuf> },
}

impl AnalyzerError {
    /// Create a new invalid `--calc` error
    pub fn invalid_calc(given: Option<&str>) -> Self {
        Self::InvalidCalcOption {
            given: given.map(str::to_string),
        }
    }

    /// Create a new range syntax error
    pub fn invalid_range(
        option: impl Into<String>,
        calc: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidRangeSyntax {
            option: option.into(),
            calc: calc.into(),
            value: value.into(),
        }
    }

    /// Create a new single-value error
    pub fn invalid_single_value(
        option: impl Into<String>,
        calc: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidSingleValue {
            option: option.into(),
            calc: calc.into(),
            value: value.into(),
        }
    }

    /// Create a new number parsing error
    pub fn invalid_number(option: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            option: option.into(),
            value: value.into(),
        }
    }

    /// Create a new process launch error
    pub fn process(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Process {
            command: command.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Config {
            message: message.into(),
            path,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AnalyzerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_messages_are_verbatim() {
        assert_eq!(
            AnalyzerError::invalid_calc(Some("foo")).to_string(),
            "Invalid --calc option given"
        );
        assert_eq!(
            AnalyzerError::invalid_range("mode", "kappa", "1:2:3").to_string(),
            "Invalid usage of --mode for --calc=kappa"
        );
        assert_eq!(
            AnalyzerError::invalid_single_value("kpoint", "tau", "1:2").to_string(),
            "Invalid usage of --kpoint for --calc=tau"
        );
        assert_eq!(
            AnalyzerError::MissingTemperature.to_string(),
            "--temp is necessary when --calc=cumulative"
        );
        assert_eq!(
            AnalyzerError::InvalidLengthSyntax {
                value: "10".to_string()
            }
            .to_string(),
            "Invalid usage of --length option"
        );
    }

    #[test]
    fn test_process_error_keeps_source() {
        let err = AnalyzerError::process(
            "/nowhere/analyze_phonons",
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("/nowhere/analyze_phonons"));
    }
}
