//! Process execution utilities
//!
//! Launches the analyzer engine with an argument vector (never through a
//! shell) and lets its output flow straight to the terminal.

use crate::error::{AnalyzerError, Result};
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, info, instrument};

/// Utility for running external processes
#[derive(Debug)]
pub struct ProcessRunner {
    debug: bool,
}

impl ProcessRunner {
    /// Create a new process runner
    #[must_use]
    pub const fn new(debug: bool) -> Self {
        Self { debug }
    }

    /// Render a command line for logs and dry runs
    pub fn describe(program: &Path, args: &[OsString]) -> String {
        let mut line = program.display().to_string();
        for arg in args {
            line.push(' ');
            line.push_str(&arg.to_string_lossy());
        }
        line
    }

    /// Run `program` with inherited stdio and wait for it.
    ///
    /// Returns the exit code, or `None` if the process was terminated by a
    /// signal. A non-zero exit is not an error here; the caller forwards it.
    #[instrument(skip(self, args))]
    pub fn run_passthrough(&self, program: &Path, args: &[OsString]) -> Result<Option<i32>> {
        let cmd_str = Self::describe(program, args);

        if self.debug {
            debug!("Running command: {}", cmd_str);
        } else {
            info!("+ {}", cmd_str);
        }

        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| AnalyzerError::process(cmd_str.clone(), e))?;

        debug!("Command finished: {:?}", status);
        Ok(status.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_runner_creation() {
        let runner = ProcessRunner::new(true);
        assert!(runner.debug);

        let runner = ProcessRunner::new(false);
        assert!(!runner.debug);
    }

    #[test]
    fn test_describe() {
        let args = vec![OsString::from("RESULT"), OsString::from("kappa")];
        assert_eq!(
            ProcessRunner::describe(Path::new("/opt/analyze_phonons"), &args),
            "/opt/analyze_phonons RESULT kappa"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_run_passthrough_success() {
        let runner = ProcessRunner::new(false);
        let code = runner
            .run_passthrough(Path::new("true"), &[])
            .unwrap();
        assert_eq!(code, Some(0));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_passthrough_forwards_failure_code() {
        let runner = ProcessRunner::new(false);
        let args = vec![OsString::from("-c"), OsString::from("exit 3")];
        let code = runner.run_passthrough(Path::new("sh"), &args).unwrap();
        assert_eq!(code, Some(3));
    }

    #[test]
    fn test_run_missing_program() {
        let runner = ProcessRunner::new(false);
        let result = runner.run_passthrough(Path::new("nonexistent_command_12345"), &[]);

        if let Err(AnalyzerError::Process { command, .. }) = result {
            assert_eq!(command, "nonexistent_command_12345");
        } else {
            panic!("Expected Process error");
        }
    }
}
