//! CLI argument parsing for varlines.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Varlines: count variability-related changes in commit diffs.
///
/// Every changed line of a Kconfig, Makefile/Kbuild or C source file is
/// counted either as artifact-specific or as variability information
/// (anything that defines or references a `CONFIG_` option):
/// - Variability model files: Kconfig*
/// - Build files: Makefile*, Kbuild*
/// - Source files: *.c, *.h, *.S
#[derive(Parser, Debug)]
#[command(name = "varlines")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Display additional warnings.
    #[arg(short, long, global = true)]
    pub warnings: bool,

    /// Display debug information.
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Path to a YAML configuration file.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for varlines.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze every commit file of a directory.
    ///
    /// Writes the per-commit results, the run summary and the list of
    /// unanalyzed commits to the output directory.
    Analyze(AnalyzeArgs),

    /// Show the per-file analysis of one commit file.
    Show(ShowArgs),

    /// Write the default configuration as YAML.
    InitConfig(InitConfigArgs),
}

/// Arguments for the `analyze` command.
#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Directory containing the commit files (`<sha>.txt`).
    #[arg(short, long, value_name = "DIR")]
    pub input: PathBuf,

    /// Directory to write the results to.
    #[arg(short, long, value_name = "DIR")]
    pub output: PathBuf,

    /// File listing the commit SHAs to analyze, one per line.
    ///
    /// Only the listed commits are analyzed, in the order of the list.
    #[arg(short, long, value_name = "FILE")]
    pub list: Option<PathBuf>,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// The commit file to analyze.
    pub commit_file: PathBuf,

    /// Also print every counted line with its verdict.
    #[arg(long)]
    pub lines: bool,

    /// Print the analysis as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `init-config` command.
#[derive(Parser, Debug)]
pub struct InitConfigArgs {
    /// Where to write the configuration.
    #[arg(default_value = "varlines.yaml")]
    pub path: PathBuf,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
