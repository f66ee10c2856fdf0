//! Command implementation for the CLI

use crate::{
    cli::{Args, OutputFormat},
    config::Config,
    core::{EngineCommand, compile},
    utils::process::ProcessRunner,
};
use anyhow::Context;
use serde::Serialize;
use std::{path::Path, process::ExitCode};
use tracing::{debug, instrument};

/// Compiled invocation as printed by `--dry-run --format json`
#[derive(Debug, Serialize)]
struct DryRun<'a> {
    engine: &'a Path,
    #[serde(flatten)]
    command: &'a EngineCommand,
    argv: Vec<String>,
}

/// Compile the query and hand it to the analyzer engine.
///
/// Returns the exit code to finish with: the engine's own status when it
/// ran, success for a dry run.
#[instrument(skip(args))]
pub fn execute_command(args: &Args) -> anyhow::Result<ExitCode> {
    let options = args.query_options();

    let mut warnings = Vec::new();
    let compiled = compile(&options, &mut warnings);
    for warning in &warnings {
        println!("{warning}");
    }
    let command = compiled?;
    debug!("Compiled engine command: {:?}", command);

    let config = Config::from_args(args)?;
    let argv = command.argv();

    if config.dry_run {
        print_dry_run(&config, &command)?;
        return Ok(ExitCode::SUCCESS);
    }

    let runner = ProcessRunner::new(config.debug);
    let status = runner.run_passthrough(&config.engine, &argv)?;
    debug!("Analyzer engine exited with {:?}", status);

    Ok(status
        .and_then(|code| u8::try_from(code).ok())
        .map_or(ExitCode::FAILURE, ExitCode::from))
}

fn print_dry_run(config: &Config, command: &EngineCommand) -> anyhow::Result<()> {
    let argv = command.argv();
    match config.format {
        OutputFormat::Text => {
            println!("{}", ProcessRunner::describe(&config.engine, &argv));
        }
        OutputFormat::Json => {
            let dry_run = DryRun {
                engine: &config.engine,
                command,
                argv: argv
                    .iter()
                    .map(|arg| arg.to_string_lossy().into_owned())
                    .collect(),
            };
            let json = serde_json::to_string_pretty(&dry_run)
                .context("Failed to serialize engine command")?;
            println!("{json}");
        }
    }
    Ok(())
}
