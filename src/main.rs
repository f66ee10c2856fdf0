use phonon_query::{cli, setup_logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Parse command line arguments
    let args = cli::parse_args();

    if let Err(e) = setup_logging(args.debug) {
        eprintln!("{e:#}");
        return ExitCode::FAILURE;
    }

    // Compile the query and run the analyzer engine
    match cli::execute_command(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
