//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for a varlines run.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Input settings
    // =========================================================================
    /// Extension of commit files (default: "txt"); files are named `<sha>.<ext>`.
    #[serde(default = "default_commit_file_extension")]
    pub commit_file_extension: String,

    /// Extensions of changed files counted as other files (no leading dots).
    #[serde(default = "default_extension_blacklist")]
    pub extension_blacklist: Vec<String>,

    /// Globs of changed file paths counted as other files.
    #[serde(default = "default_excluded_paths")]
    pub excluded_paths: Vec<String>,

    // =========================================================================
    // Output settings
    // =========================================================================
    /// Name of the per-commit results file in the output directory.
    #[serde(default = "default_results_file")]
    pub results_file: String,

    /// Name of the run summary file in the output directory.
    #[serde(default = "default_summary_file")]
    pub summary_file: String,

    /// Name of the list of unanalyzed commit files in the output directory.
    #[serde(default = "default_unanalyzed_file")]
    pub unanalyzed_file: String,

    // =========================================================================
    // Diagnostics
    // =========================================================================
    /// Show warnings (also enabled by `--warnings`).
    #[serde(default)]
    pub warnings: bool,

    /// Show debug output (also enabled by `--debug`).
    #[serde(default)]
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            commit_file_extension: default_commit_file_extension(),
            extension_blacklist: default_extension_blacklist(),
            excluded_paths: default_excluded_paths(),
            results_file: default_results_file(),
            summary_file: default_summary_file(),
            unanalyzed_file: default_unanalyzed_file(),
            warnings: false,
            debug: false,
        }
    }
}
