//! Build definition files (Makefile, Kbuild).
//!
//! A line is a variability change when it references a configuration
//! symbol (`$(CONFIG_...`) itself, or when it is the `else`/`endif` of a
//! conditional whose condition references one. Lines merely continuing a
//! guarded assignment (`dtb-$(CONFIG_X) += \` followed by file names) are
//! general changes.

use regex::Regex;
use std::sync::LazyLock;

use super::lines::{continues, cut_at, is_blank, strip_marker};
use super::types::ChangeType;
use crate::diff::DiffBlock;
use crate::logging::Log;

const ORIGIN: &str = "BuildClassifier";

const COMMENT_MARKER: &str = "#";

/// Reference to a configuration symbol.
const SYMBOL_REFERENCE: &str = "$(CONFIG_";

static CONDITION_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(ifeq|ifneq|ifdef|ifndef)\b").expect("Invalid build condition regex")
});

static CONDITION_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*endif\b").expect("Invalid build endif regex"));

static BLOCK_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(else|endif)\b").expect("Invalid build block end regex")
});

/// Normalizer and classifier for Makefile blocks.
pub struct BuildClassifier<'a> {
    block: &'a DiffBlock,
    log: &'a dyn Log,
}

impl<'a> BuildClassifier<'a> {
    pub fn new(block: &'a DiffBlock, log: &'a dyn Log) -> Self {
        Self { block, log }
    }

    pub fn block(&self) -> &'a DiffBlock {
        self.block
    }

    /// Strip the change marker and the `#` comment of a line.
    ///
    /// A line continuing a commented line (`# ... \`) is a comment as a
    /// whole and normalizes to an empty string.
    pub fn normalize(&self, raw: &str, index: usize) -> String {
        let (_, text) = strip_marker(raw);
        let code = cut_at(text, COMMENT_MARKER);
        if !is_blank(code) && self.continues_comment(index) {
            return String::new();
        }
        code.to_string()
    }

    pub fn is_variability_change(&self, clean: &str, index: usize) -> bool {
        if self.continues_comment(index) {
            return false;
        }

        let variability = references_symbol(clean)
            || (BLOCK_END.is_match(clean) && self.condition_references_symbol(index));

        if variability {
            self.log.debug(ORIGIN, "Variability change found", Some(clean));
        }
        variability
    }

    /// Whether the line at `index` continues a `#` comment.
    ///
    /// Walks back over the chain of lines ending in a backslash. The chain
    /// is a comment if any of its lines carries a `#`. Lines of the other
    /// side of the change are not part of the same file version and are
    /// skipped.
    fn continues_comment(&self, index: usize) -> bool {
        let change = self.block.line(index).map(ChangeType::of);

        for i in (0..index).rev() {
            let Some(raw) = self.block.line(i) else {
                break;
            };
            let (previous_change, text) = strip_marker(raw);
            if change.is_some_and(|c| !c.shares_version_with(previous_change)) {
                continue;
            }
            let text = text.trim();
            if text.is_empty() || !text.ends_with('\\') {
                return false;
            }
            if text.contains(COMMENT_MARKER) {
                return true;
            }
        }
        false
    }

    /// Find the conditional owning the `else`/`endif` at `end` and report
    /// whether its condition references a configuration symbol.
    ///
    /// Scanning backward, every `endif` opens a nested (already closed)
    /// block that the next block start closes again. The first block start
    /// outside any nested block owns the terminator.
    fn condition_references_symbol(&self, end: usize) -> bool {
        let mut nested: usize = 0;

        for i in (0..end).rev() {
            let Some(raw) = self.block.line(i) else {
                continue;
            };
            let line = self.normalize(raw, i);

            if nested == 0 && !BLOCK_END.is_match(&line) && CONDITION_START.is_match(&line) {
                if references_symbol(&line) {
                    return true;
                }
                return continues(&line) && self.continuation_references_symbol(i + 1, end);
            }

            if CONDITION_END.is_match(&line) {
                nested += 1;
            } else if CONDITION_START.is_match(&line) {
                nested = nested.saturating_sub(1);
            }
        }
        false
    }

    /// Scan the continuation lines of a condition, from `start` up to (not
    /// including) `end`, for a symbol reference.
    fn continuation_references_symbol(&self, start: usize, end: usize) -> bool {
        for i in start..end {
            let Some(raw) = self.block.line(i) else {
                break;
            };
            let line = self.normalize(raw, i);
            if references_symbol(&line) {
                return true;
            }
            if !continues(&line) || CONDITION_START.is_match(&line) {
                break;
            }
        }
        false
    }
}

fn references_symbol(text: &str) -> bool {
    text.contains(SYMBOL_REFERENCE)
}
