//! File kind dispatch for varlines.
//!
//! Decides once per diff block which classifier applies, based on the
//! paths in the block header:
//! - excluded paths (documentation, scripts, text files) and blacklisted
//!   extensions are other files
//! - `*.c`, `*.h`, `*.S` (optionally suffixed) are source files
//! - `Makefile*`, `Kbuild*` are build files
//! - `Kconfig*` are variability model files
//! - anything else is an other file

use globset::GlobSet;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::classify::{
    ChangeCounts, ClassifiedLine, Classifier, FileKind, classify_lines, count_changes, tally,
};
use crate::config::Config;
use crate::diff::{DiffBlock, parse_diff_git_line};
use crate::error::Result;
use crate::logging::Log;


const ORIGIN: &str = "FileKindDispatcher";

static SOURCE_FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*\.[hcS]([.\-_+~].*)?$").expect("Invalid source file regex")
});

static BUILD_FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(Makefile|Kbuild)([.\-_+~].*)?$").expect("Invalid build file regex")
});

static MODEL_FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Kconfig([.\-_+~].*)?$").expect("Invalid model file regex")
});

/// The analysis result of one changed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileAnalysis {
    /// Path of the file after the change.
    pub path: String,
    pub kind: FileKind,
    pub counts: ChangeCounts,
    /// Every counted line with its verdict, when requested.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<ClassifiedLine>,
}

/// Selects the file kind of diff blocks.
#[derive(Debug, Clone)]
pub struct FileKindDispatcher {
    excluded: GlobSet,
    blacklist: Vec<String>,
}

impl FileKindDispatcher {
    /// Build a dispatcher from the exclusion settings of `config`.
    ///
    /// # Errors
    ///
    /// Returns `VarlinesError::UserError` if an excluded path glob does not compile.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            excluded: config.excluded_paths_globset()?,
            blacklist: config.normalized_blacklist(),
        })
    }

    /// The file kind of the block with the given header line.
    ///
    /// A header that is not a `diff --git` line yields [`FileKind::Other`].
    pub fn kind_of(&self, header: &str) -> FileKind {
        let Some((old_path, new_path)) = parse_diff_git_line(header) else {
            return FileKind::Other;
        };

        if self.is_excluded(&old_path) || self.is_excluded(&new_path) {
            return FileKind::Other;
        }

        let name = file_name(&new_path);
        if self.is_blacklisted(name) {
            FileKind::Other
        } else if SOURCE_FILE.is_match(name) {
            FileKind::Source
        } else if BUILD_FILE.is_match(name) {
            FileKind::Build
        } else if MODEL_FILE.is_match(name) {
            FileKind::Model
        } else {
            FileKind::Other
        }
    }

    /// The file kind of `block`, read from its header.
    pub fn kind_of_block(&self, block: &DiffBlock) -> FileKind {
        self.kind_of(block.header())
    }

    /// Count the changed lines of `block` with the classifier of its kind.
    pub fn analyze_block(&self, block: &DiffBlock, log: &dyn Log) -> FileAnalysis {
        let (kind, path) = self.describe(block, log);
        let classifier = Classifier::for_kind(kind, block, log);

        FileAnalysis {
            path,
            kind: classifier.kind(),
            counts: count_changes(&classifier),
            lines: Vec::new(),
        }
    }

    /// Like [`Self::analyze_block`], keeping the verdict of every counted line.
    pub fn analyze_block_lines(&self, block: &DiffBlock, log: &dyn Log) -> FileAnalysis {
        let (kind, path) = self.describe(block, log);
        let classifier = Classifier::for_kind(kind, block, log);
        let lines = classify_lines(&classifier);

        FileAnalysis {
            path,
            kind: classifier.kind(),
            counts: tally(&lines),
            lines,
        }
    }

    fn describe(&self, block: &DiffBlock, log: &dyn Log) -> (FileKind, String) {
        let kind = self.kind_of_block(block);
        let path = block
            .new_path()
            .or_else(|| block.old_path())
            .unwrap_or_default();
        log.debug(ORIGIN, &format!("Analyzing {} file", kind), Some(&path));
        (kind, path)
    }

    fn is_excluded(&self, path: &str) -> bool {
        self.excluded.is_match(path)
    }

    fn is_blacklisted(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.blacklist
            .iter()
            .any(|ext| name.ends_with(&format!(".{}", ext)))
    }
}

fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
