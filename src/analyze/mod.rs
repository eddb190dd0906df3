//! Commit analysis for varlines.
//!
//! A commit file is named `<sha>.<extension>` and holds the commit
//! timestamp followed by the diff of every changed file. Analyzing it runs
//! each diff block through the [`FileKindDispatcher`] and sums the counts
//! of model, build and source files. A commit without any block carrying
//! a hunk marker has nothing to analyze.

use chrono::NaiveDate;
use serde::Serialize;
use std::path::Path;

use crate::classify::{ChangeCounts, FileKind};
use crate::diff::{DiffBlock, date_label, split_commit};
use crate::dispatch::{FileAnalysis, FileKindDispatcher};
use crate::error::{Result, VarlinesError};
use crate::logging::Log;


const ORIGIN: &str = "CommitAnalyzer";

/// Extension of commit files unless configured otherwise.
pub const DEFAULT_COMMIT_EXTENSION: &str = "txt";

/// Extract the commit SHA from a commit file name.
///
/// The name must consist of exactly two dot-separated parts, the SHA and
/// `extension`.
pub fn commit_sha_from_file_name(name: &str, extension: &str) -> Option<String> {
    let (sha, ext) = name.split_once('.')?;
    if sha.is_empty() || ext != extension || ext.contains('.') {
        return None;
    }
    Some(sha.to_string())
}

/// Number of changed files of one kind and the sum of their counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KindTotals {
    pub files: u64,
    pub counts: ChangeCounts,
}

impl KindTotals {
    fn add(&mut self, counts: ChangeCounts) {
        self.files += 1;
        self.counts += counts;
    }
}

/// The analysis result of one commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitAnalysis {
    pub sha: String,
    pub date: Option<NaiveDate>,
    /// Every analyzed file, other files included, in commit order.
    pub files: Vec<FileAnalysis>,
    pub model: KindTotals,
    pub build: KindTotals,
    pub source: KindTotals,
}

impl CommitAnalysis {
    fn new(sha: &str, date: Option<NaiveDate>) -> Self {
        Self {
            sha: sha.to_string(),
            date,
            files: Vec::new(),
            model: KindTotals::default(),
            build: KindTotals::default(),
            source: KindTotals::default(),
        }
    }

    fn push(&mut self, file: FileAnalysis) {
        match file.kind {
            FileKind::Model => self.model.add(file.counts),
            FileKind::Build => self.build.add(file.counts),
            FileKind::Source => self.source.add(file.counts),
            FileKind::Other => {}
        }
        self.files.push(file);
    }

    /// The commit date as `yyyy/mm/dd`, or an empty string if unknown.
    pub fn date_label(&self) -> String {
        date_label(self.date)
    }

    /// Changed artifact-specific lines of model, build and source files.
    pub fn artifact_lines(&self) -> u64 {
        self.model.counts.artifact_lines()
            + self.build.counts.artifact_lines()
            + self.source.counts.artifact_lines()
    }

    /// Changed variability lines of model, build and source files.
    pub fn variability_lines(&self) -> u64 {
        self.model.counts.variability_lines()
            + self.build.counts.variability_lines()
            + self.source.counts.variability_lines()
    }
}

/// Analyzes commit files with a shared dispatcher.
pub struct CommitAnalyzer<'a> {
    dispatcher: &'a FileKindDispatcher,
    log: &'a dyn Log,
    extension: String,
    keep_lines: bool,
}

impl<'a> CommitAnalyzer<'a> {
    pub fn new(dispatcher: &'a FileKindDispatcher, log: &'a dyn Log) -> Self {
        Self {
            dispatcher,
            log,
            extension: DEFAULT_COMMIT_EXTENSION.to_string(),
            keep_lines: false,
        }
    }

    /// Use `extension` (no leading dot) for commit file names.
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.to_string();
        self
    }

    /// Keep the verdict of every counted line in the file analyses.
    pub fn with_lines(mut self, keep_lines: bool) -> Self {
        self.keep_lines = keep_lines;
        self
    }

    /// Analyze the text of the commit `sha`.
    ///
    /// # Returns
    ///
    /// * `Some(CommitAnalysis)` - At least one block carried a hunk marker
    /// * `None` - Nothing to analyze; every malformed block was reported
    ///   as a warning
    pub fn analyze_text(&self, sha: &str, text: &str) -> Option<CommitAnalysis> {
        let commit = split_commit(text);
        let mut analysis = CommitAnalysis::new(sha, commit.date);

        for lines in commit.blocks {
            let header = lines.first().cloned().unwrap_or_default();
            match DiffBlock::from_lines(lines) {
                Some(block) => analysis.push(self.analyze_block(&block)),
                None => self.log.warning(
                    ORIGIN,
                    "No changes found",
                    Some(&format!(
                        "Commit \"{}\" includes diff without any line starting with \"@@\": {}",
                        sha, header
                    )),
                ),
            }
        }

        if analysis.files.is_empty() {
            None
        } else {
            Some(analysis)
        }
    }

    fn analyze_block(&self, block: &DiffBlock) -> FileAnalysis {
        if self.keep_lines {
            self.dispatcher.analyze_block_lines(block, self.log)
        } else {
            self.dispatcher.analyze_block(block, self.log)
        }
    }

    /// Read and analyze one commit file.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(CommitAnalysis))` - The commit was analyzed
    /// * `Ok(None)` - The file name is not `<sha>.<extension>` or the commit
    ///   holds no line-level changes
    /// * `Err(VarlinesError::IoError)` - The file could not be read
    pub fn analyze_file(&self, path: &Path) -> Result<Option<CommitAnalysis>> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let Some(sha) = commit_sha_from_file_name(&name, &self.extension) else {
            self.log.warning(
                ORIGIN,
                "File will be ignored",
                Some(&format!(
                    "Name of file does not match <CommitSHA>.{}: \"{}\"",
                    self.extension, name
                )),
            );
            return Ok(None);
        };

        self.log.debug(ORIGIN, "Analyzing commit", Some(&name));
        let bytes =
            std::fs::read(path).map_err(|e| VarlinesError::io("read commit file", path, e))?;
        let text = String::from_utf8_lossy(&bytes);

        Ok(self.analyze_text(&sha, &text))
    }
}
