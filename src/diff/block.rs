//! The per-file diff block.

use super::helpers::parse_diff_git_line;

/// Prefix of the line that opens a hunk.
pub const HUNK_MARKER: &str = "@@";

/// The raw lines of one changed file within a commit.
///
/// Line 0 is the block header (`diff --git a/<old> b/<new>`). A block
/// always contains at least one hunk marker line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffBlock {
    lines: Vec<String>,
    changes_start: usize,
}

impl DiffBlock {
    /// Build a block from its raw text.
    ///
    /// Returns `None` if no line starts with the hunk marker.
    pub fn from_text(text: &str) -> Option<Self> {
        Self::from_lines(text.lines().map(str::to_string).collect())
    }

    /// Build a block from already split lines.
    ///
    /// Returns `None` if no line starts with the hunk marker.
    pub fn from_lines(lines: Vec<String>) -> Option<Self> {
        let changes_start = lines.iter().position(|l| l.starts_with(HUNK_MARKER))?;
        Some(Self {
            lines,
            changes_start,
        })
    }

    /// The first line of the block.
    pub fn header(&self) -> &str {
        self.lines.first().map(String::as_str).unwrap_or("")
    }

    /// The raw line at `index`, if any.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Index of the first hunk marker line.
    pub fn changes_start(&self) -> usize {
        self.changes_start
    }

    /// The path before the change (`a/` side), without prefix.
    pub fn old_path(&self) -> Option<String> {
        parse_diff_git_line(self.header()).map(|(old, _)| old)
    }

    /// The path after the change (`b/` side), without prefix.
    pub fn new_path(&self) -> Option<String> {
        parse_diff_git_line(self.header()).map(|(_, new)| new)
    }
}
