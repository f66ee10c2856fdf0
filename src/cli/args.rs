//! Command-line argument parsing

use crate::{config::ENGINE_ENV, core::QueryOptions};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Query phonon lifetimes, mean free paths and thermal conductivity
/// from an analyze_phonons result file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "phonon-query")]
pub struct Args {
    /// Result file to analyze
    #[arg(value_name = "RESULT_FILE")]
    pub result_file: PathBuf,

    /// Target temperature to analyze
    #[arg(long, allow_hyphen_values = true)]
    pub temp: Option<String>,

    /// Phonon mode index to print (N or BEGIN:END)
    #[arg(long, allow_hyphen_values = true)]
    pub mode: Option<String>,

    /// K-point index to print (N or BEGIN:END)
    #[arg(long, allow_hyphen_values = true)]
    pub kpoint: Option<String>,

    /// What to print: tau (lifetime, mean free path, ...), kappa (thermal
    /// conductivity) or cumulative (cumulative thermal conductivity)
    #[arg(long, value_name = "tau|kappa|cumulative")]
    pub calc: Option<String>,

    /// Do not average the damping function at degenerate points
    #[arg(long)]
    pub noavg: bool,

    /// Maximum system size L and its step dL in nm (--calc=cumulative)
    #[arg(
        long,
        value_name = "Lmax:dL",
        allow_hyphen_values = true,
        help_heading = "Cumulative options"
    )]
    pub length: Option<String>,

    /// Directions (1=x, 2=y, 3=z) along which mean free paths are compared
    /// with the system size (--calc=cumulative)
    #[arg(long, value_name = "1|2|3", help_heading = "Cumulative options")]
    pub direction: Option<String>,

    /// Path of the analyze_phonons executable
    #[arg(long, env = ENGINE_ENV)]
    pub engine: Option<PathBuf>,

    /// Print the engine invocation instead of running it
    #[arg(long)]
    pub dry_run: bool,

    /// Output format for --dry-run
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

/// How a dry run prints the compiled invocation
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Args {
    /// Raw query options handed to the compiler
    pub fn query_options(&self) -> QueryOptions {
        QueryOptions {
            result_file: self.result_file.clone(),
            calc: self.calc.clone(),
            temp: self.temp.clone(),
            kpoint: self.kpoint.clone(),
            mode: self.mode.clone(),
            average: !self.noavg,
            length: self.length.clone(),
            direction: self.direction.clone(),
        }
    }
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_args() {
        let args = Args::try_parse_from(["phonon-query", "RESULT", "--calc", "kappa"]).unwrap();
        assert_eq!(args.result_file, PathBuf::from("RESULT"));
        assert_eq!(args.calc.as_deref(), Some("kappa"));
        assert!(!args.debug);
        assert!(!args.noavg);
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn test_equals_syntax_and_noavg() {
        let args = Args::try_parse_from([
            "phonon-query",
            "--calc=cumulative",
            "--temp=300",
            "--direction=2:3",
            "--noavg",
            "RESULT",
        ])
        .unwrap();

        let options = args.query_options();
        assert!(!options.average);
        assert_eq!(options.temp.as_deref(), Some("300"));
        assert_eq!(options.direction.as_deref(), Some("2:3"));
    }

    #[test]
    fn test_result_file_required() {
        assert!(Args::try_parse_from(["phonon-query", "--calc=tau"]).is_err());
    }

    #[test]
    fn test_format_flag() {
        let args =
            Args::try_parse_from(["phonon-query", "RESULT", "--dry-run", "--format", "json"])
                .unwrap();
        assert!(args.dry_run);
        assert_eq!(args.format, OutputFormat::Json);
    }
}
