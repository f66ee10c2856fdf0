//! # Phonon Query
//!
//! Command-line front end for the `analyze_phonons` engine. Query options
//! (temperature, k-point, mode index, calculation kind, cumulative
//! conductivity sweep) are validated and compiled into a single engine
//! invocation whose output is passed through unchanged.
//!
//! ## Example
//!
//! ```
//! use phonon_query::core::{QueryOptions, compile};
//!
//! let options = QueryOptions {
//!     result_file: "RESULT".into(),
//!     calc: Some("tau".to_string()),
//!     temp: Some("300".to_string()),
//!     average: true,
//!     ..QueryOptions::default()
//! };
//! let command = compile(&options, &mut Vec::new())?;
//! assert_eq!(command.mode_token, "tau");
//! assert_eq!(command.positional_args, ["1", "0", "1", "0", "300"]);
//! # Ok::<(), phonon_query::error::AnalyzerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging on stderr, keeping stdout for the engine's output.
///
/// `RUST_LOG` takes precedence over the `--debug` flag.
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
