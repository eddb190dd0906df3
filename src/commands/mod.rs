//! Command implementations for varlines.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod analyze;
mod init_config;
mod show;

use crate::cli::Command;
use crate::config::Config;
use crate::error::Result;
use crate::logging::Log;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(command: Command, config: &Config, log: &dyn Log) -> Result<()> {
    match command {
        Command::Analyze(args) => analyze::cmd_analyze(args, config, log),
        Command::Show(args) => show::cmd_show(args, config, log),
        Command::InitConfig(args) => init_config::cmd_init_config(args, log),
    }
}
