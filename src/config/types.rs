//! Configuration defaults for varlines.
//!
//! This module defines the default value functions used by the Config
//! struct.

/// Default globs for changed files that are never analyzed.
///
/// Documentation, helper scripts and plain text files only ever count as
/// other files, whatever their name looks like.
pub fn default_excluded_paths() -> Vec<String> {
    vec![
        "**/[dD]ocumentation/**".to_string(),
        "**/[dD]ocumentations/**".to_string(),
        "**/[sS]cript/**".to_string(),
        "**/[sS]cripts/**".to_string(),
        "**/*.txt".to_string(),
    ]
}

/// Default extensions (no leading dots) of changed files that are never analyzed.
pub fn default_extension_blacklist() -> Vec<String> {
    vec!["lb".to_string()]
}

// Default value functions for serde
pub(crate) fn default_commit_file_extension() -> String {
    "txt".to_string()
}
pub(crate) fn default_results_file() -> String {
    "varlines_results.tsv".to_string()
}
pub(crate) fn default_summary_file() -> String {
    "varlines_summary.tsv".to_string()
}
pub(crate) fn default_unanalyzed_file() -> String {
    "varlines_unanalyzed.txt".to_string()
}
