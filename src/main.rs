//! Varlines: count variability-related changes in commit diffs.
//!
//! This is the main entry point for the `varlines` CLI. It parses arguments,
//! loads the configuration, sets up logging, dispatches to the appropriate
//! command handler, and handles errors with proper exit codes.

mod cli;
mod commands;
pub mod analyze;
pub mod classify;
pub mod config;
pub mod diff;
pub mod dispatch;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod logging;
pub mod report;

#[cfg(test)]
mod test_support;

use cli::Cli;
use config::Config;
use error::Result;
use logging::{LogSettings, TracingLog};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    // Flags on the command line add to what the configuration enables
    let settings = LogSettings {
        warnings: cli.warnings || config.warnings,
        debug: cli.debug || config.debug,
    };
    logging::init(settings)?;
    let log = TracingLog::new(settings);

    commands::dispatch(cli.command, &config, &log)
}
