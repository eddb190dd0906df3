//! Output files of a run.

use std::path::{Path, PathBuf};

use super::summary::RunSummary;
use crate::analyze::CommitAnalysis;
use crate::config::Config;
use crate::error::Result;
use crate::fs::{append_text, atomic_write_file, remove_if_exists};

/// Column titles of the results file.
pub const RESULTS_HEADER: &str =
    "Date\tCommit\tCCF\tCCLAI\tCCLVI\tCBF\tCBLAI\tCBLVI\tCMF\tCMLAI\tCMLVI";

/// The results line of one analyzed commit, without line terminator.
///
/// Date and SHA are followed by file count, artifact-specific lines and
/// variability lines of source, build and model files, in that order.
pub fn result_row(analysis: &CommitAnalysis) -> String {
    let mut fields = vec![analysis.date_label(), analysis.sha.clone()];
    for totals in [&analysis.source, &analysis.build, &analysis.model] {
        fields.push(totals.files.to_string());
        fields.push(totals.counts.artifact_lines().to_string());
        fields.push(totals.counts.variability_lines().to_string());
    }
    fields.join("\t")
}

/// Writes the results, unanalyzed and summary files of one run.
#[derive(Debug)]
pub struct ResultWriter {
    results_path: PathBuf,
    summary_path: PathBuf,
    unanalyzed_path: PathBuf,
    header_written: bool,
}

impl ResultWriter {
    /// Writer for the output files configured in `config`, inside `output_dir`.
    pub fn new(output_dir: &Path, config: &Config) -> Self {
        Self {
            results_path: output_dir.join(&config.results_file),
            summary_path: output_dir.join(&config.summary_file),
            unanalyzed_path: output_dir.join(&config.unanalyzed_file),
            header_written: false,
        }
    }

    pub fn results_path(&self) -> &Path {
        &self.results_path
    }

    pub fn summary_path(&self) -> &Path {
        &self.summary_path
    }

    pub fn unanalyzed_path(&self) -> &Path {
        &self.unanalyzed_path
    }

    /// Remove the output files of a previous run and create an empty
    /// results file. The unanalyzed list is only created when needed.
    pub fn start(&mut self) -> Result<()> {
        remove_if_exists(&self.results_path)?;
        remove_if_exists(&self.summary_path)?;
        remove_if_exists(&self.unanalyzed_path)?;
        append_text(&self.results_path, "")?;
        self.header_written = false;
        Ok(())
    }

    /// Append the results line of `analysis`, preceded by the column titles
    /// the first time.
    pub fn add_results(&mut self, analysis: &CommitAnalysis) -> Result<()> {
        let mut text = String::new();
        if !self.header_written {
            text.push_str(RESULTS_HEADER);
            text.push('\n');
        }
        text.push_str(&result_row(analysis));
        text.push('\n');

        append_text(&self.results_path, &text)?;
        self.header_written = true;
        Ok(())
    }

    /// Append a commit file name to the unanalyzed list.
    pub fn add_unanalyzed(&self, commit_file_name: &str) -> Result<()> {
        append_text(&self.unanalyzed_path, &format!("{}\n", commit_file_name))
    }

    /// Write the summary file in one piece.
    pub fn write_summary(&self, summary: &RunSummary) -> Result<()> {
        atomic_write_file(&self.summary_path, &summary.render())
    }
}
