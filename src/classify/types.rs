//! Value types shared by the classifiers and the counting driver.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::AddAssign;

/// Direction of a raw diff line, read from its first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    Added,
    Deleted,
    /// Context, header and hunk lines.
    Context,
}

impl ChangeType {
    /// The change type of a raw line.
    pub fn of(raw: &str) -> Self {
        match raw.as_bytes().first() {
            Some(b'+') => ChangeType::Added,
            Some(b'-') => ChangeType::Deleted,
            _ => ChangeType::Context,
        }
    }

    /// The opposite direction; context lines have none.
    pub fn inverse(self) -> Option<Self> {
        match self {
            ChangeType::Added => Some(ChangeType::Deleted),
            ChangeType::Deleted => Some(ChangeType::Added),
            ChangeType::Context => None,
        }
    }

    /// Whether a line of type `other` exists in the same version of the
    /// file as a line of this type.
    ///
    /// Added lines do not exist next to deleted ones and vice versa.
    pub fn shares_version_with(self, other: ChangeType) -> bool {
        self.inverse() != Some(other)
    }
}

/// Kind of a changed file, decided once per diff block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    /// Variability model (`Kconfig`).
    Model,
    /// Build definition (`Makefile`, `Kbuild`).
    Build,
    /// C-family source (`.c`, `.h`, `.S`).
    Source,
    Other,
}

impl FileKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FileKind::Model => "model",
            FileKind::Build => "build",
            FileKind::Source => "source",
            FileKind::Other => "other",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Line counters of one file (or a sum of files).
///
/// `added` and `added_variability` partition the counted added lines;
/// `deleted` and `deleted_variability` partition the counted deleted lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeCounts {
    pub added: u64,
    pub added_variability: u64,
    pub deleted: u64,
    pub deleted_variability: u64,
}

impl ChangeCounts {
    /// Count one classified line. Context lines are ignored.
    pub fn record(&mut self, change: ChangeType, variability: bool) {
        match (change, variability) {
            (ChangeType::Added, false) => self.added += 1,
            (ChangeType::Added, true) => self.added_variability += 1,
            (ChangeType::Deleted, false) => self.deleted += 1,
            (ChangeType::Deleted, true) => self.deleted_variability += 1,
            (ChangeType::Context, _) => {}
        }
    }

    /// All counted added lines.
    pub fn all_added(&self) -> u64 {
        self.added + self.added_variability
    }

    /// All counted deleted lines.
    pub fn all_deleted(&self) -> u64 {
        self.deleted + self.deleted_variability
    }

    /// Changed lines carrying artifact-specific information.
    pub fn artifact_lines(&self) -> u64 {
        self.added + self.deleted
    }

    /// Changed lines carrying variability information.
    pub fn variability_lines(&self) -> u64 {
        self.added_variability + self.deleted_variability
    }

    pub fn is_empty(&self) -> bool {
        self.all_added() == 0 && self.all_deleted() == 0
    }
}

impl AddAssign for ChangeCounts {
    fn add_assign(&mut self, rhs: Self) {
        self.added += rhs.added;
        self.added_variability += rhs.added_variability;
        self.deleted += rhs.deleted;
        self.deleted_variability += rhs.deleted_variability;
    }
}

/// The verdict for one counted line of a diff block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedLine {
    /// Index of the raw line within its block.
    pub index: usize,
    pub change: ChangeType,
    /// The normalized text that was classified.
    pub text: String,
    pub variability: bool,
}
