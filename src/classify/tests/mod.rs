//! Tests for line classification.

mod build;
mod driver;
mod nesting;

use super::{Classifier, FileKind, classify_lines};
use crate::diff::DiffBlock;
use crate::logging::MemoryLog;

/// Index of the first body line in a block built by [`block`].
pub(super) const BODY: usize = 5;

/// Build a single-hunk block for `path` around the given body lines.
pub(super) fn block(path: &str, body: &[&str]) -> DiffBlock {
    let mut lines = vec![
        format!("diff --git a/{} b/{}", path, path),
        "index 1111111..2222222 100644".to_string(),
        format!("--- a/{}", path),
        format!("+++ b/{}", path),
        "@@ -1,20 +1,20 @@".to_string(),
    ];
    lines.extend(body.iter().map(|line| line.to_string()));
    DiffBlock::from_lines(lines).unwrap()
}

/// Every counted line of `body` as (trimmed normalized text, verdict).
pub(super) fn counted(kind: FileKind, path: &str, body: &[&str]) -> Vec<(String, bool)> {
    let block = block(path, body);
    let log = MemoryLog::new();
    let classifier = Classifier::for_kind(kind, &block, &log);
    classify_lines(&classifier)
        .into_iter()
        .map(|line| (line.text.trim().to_string(), line.variability))
        .collect()
}

/// Shorthand for expected verdict lists.
pub(super) fn verdicts(expected: &[(&str, bool)]) -> Vec<(String, bool)> {
    expected
        .iter()
        .map(|(text, variability)| (text.to_string(), *variability))
        .collect()
}
