//! Splitting a commit file into its timestamp and per-file blocks.

use chrono::{DateTime, NaiveDate};

/// Prefix of the line that opens the diff of one file.
pub const DIFF_HEADER_PREFIX: &str = "diff --git";

/// Timestamp format of the first line of a commit file.
const COMMIT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// A commit file split into its parts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitText {
    /// Commit date, if the first line carried a readable timestamp.
    pub date: Option<NaiveDate>,
    /// Raw lines of each per-file block, header line first.
    pub blocks: Vec<Vec<String>>,
}

/// Render a commit date as `yyyy/mm/dd`, or an empty string if unknown.
pub fn date_label(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y/%m/%d").to_string())
        .unwrap_or_default()
}

/// Split the raw text of a commit file.
///
/// The first line is the commit timestamp unless it already is a block
/// header. Every line starting with `diff --git` opens a new block; text
/// before the first header is ignored.
pub fn split_commit(text: &str) -> CommitText {
    let mut lines = text.lines().peekable();
    let mut commit = CommitText::default();

    if let Some(first) = lines.next_if(|l| !l.starts_with(DIFF_HEADER_PREFIX)) {
        commit.date = parse_commit_date(first);
    }

    for line in lines {
        if line.starts_with(DIFF_HEADER_PREFIX) {
            commit.blocks.push(vec![line.to_string()]);
        } else if let Some(block) = commit.blocks.last_mut() {
            block.push(line.to_string());
        }
    }

    commit
}

/// Parse `2011-06-10 06:01:30 +0200`; a bare `2011-06-10` prefix is accepted too.
fn parse_commit_date(line: &str) -> Option<NaiveDate> {
    let line = line.trim();
    if let Ok(stamp) = DateTime::parse_from_str(line, COMMIT_DATE_FORMAT) {
        return Some(stamp.date_naive());
    }
    line.get(..10)
        .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
}
