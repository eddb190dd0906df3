//! C-family source files (`.c`, `.h`, `.S`).
//!
//! Three kinds of lines are variability changes:
//! - lines referencing a configuration symbol (`CONFIG_X`, `!CONFIG_X`,
//!   `defined(CONFIG_X)`, `IS_ENABLED(CONFIG_X)`, ...)
//! - `#else`/`#endif` lines of a preprocessor conditional whose condition
//!   references a symbol
//! - closing braces of a runtime conditional whose controlling expression
//!   references a symbol
//!
//! Comment text never counts. Block comments may span several diff lines,
//! so the classifier traces, once per block, which lines start inside a
//! comment. Added and deleted lines belong to different versions of the
//! file, so the trace is kept per side of the change.

use regex::Regex;
use std::sync::LazyLock;

use super::lines::{continues, is_blank, paren_balance, strip_marker};
use super::types::ChangeType;
use crate::diff::DiffBlock;
use crate::logging::Log;

const ORIGIN: &str = "SourceClassifier";

const LINE_COMMENT: &str = "//";
const BLOCK_COMMENT_START: &str = "/*";
const BLOCK_COMMENT_END: &str = "*/";

/// A symbol reference, bounded by whitespace or a bracket. Helper macros
/// (`defined(`, `IS_ENABLED(`, ...) are covered by the `(` boundary.
static SYMBOL_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[\s(\[{<)\]}>])!?CONFIG_").expect("Invalid source symbol regex")
});

/// `#else` or `#endif`, the terminators of a preprocessor block.
static DIRECTIVE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*#\s*(else|endif)\b").expect("Invalid #else regex"));

static DIRECTIVE_ENDIF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*#\s*endif\b").expect("Invalid #endif regex"));

/// Lines carrying the condition a terminator may belong to.
static DIRECTIVE_CONDITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*#\s*(if|ifdef|ifndef|elif)\b").expect("Invalid #if condition regex")
});

/// Lines opening a preprocessor block.
static DIRECTIVE_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*#\s*(if|ifdef|ifndef)\b").expect("Invalid #if regex"));

static ELSE_BRACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\}\s*else\s*\{").expect("Invalid else brace regex"));

/// Normalizer and classifier for C-family blocks.
pub struct SourceClassifier<'a> {
    block: &'a DiffBlock,
    log: &'a dyn Log,
    comments: CommentMap,
}

impl<'a> SourceClassifier<'a> {
    pub fn new(block: &'a DiffBlock, log: &'a dyn Log) -> Self {
        Self {
            block,
            log,
            comments: CommentMap::trace(block.lines()),
        }
    }

    pub fn block(&self) -> &'a DiffBlock {
        self.block
    }

    /// Strip the change marker and all comment text of a line.
    ///
    /// The text around a block comment is joined with a space. A line
    /// starting inside a block comment opened on an earlier line
    /// normalizes to an empty string, even if code follows the `*/`.
    pub fn normalize(&self, raw: &str, index: usize) -> String {
        let (change, text) = strip_marker(raw);
        if self.comments.starts_in_comment(index, change) {
            return String::new();
        }
        strip_comments(text, false).0
    }

    pub fn is_variability_change(&self, clean: &str, index: usize) -> bool {
        let variability = references_symbol(clean)
            || (DIRECTIVE_END.is_match(clean) && self.directive_references_symbol(index))
            || (clean.contains('}') && self.branch_references_symbol(index));

        if variability {
            self.log.debug(ORIGIN, "Variability change found", Some(clean));
        }
        variability
    }

    fn change_at(&self, index: usize) -> ChangeType {
        self.block
            .line(index)
            .map(ChangeType::of)
            .unwrap_or(ChangeType::Context)
    }

    fn normalized_at(&self, index: usize) -> String {
        self.block
            .line(index)
            .map(|raw| self.normalize(raw, index))
            .unwrap_or_default()
    }

    /// Find the `#if`/`#ifdef`/`#ifndef` chain owning the `#else`/`#endif`
    /// at `end` and report whether its opening condition, or the condition
    /// of any `#elif` between it and `end`, references a symbol.
    ///
    /// Scanning backward, a nested `#endif` is counted unless it sits on the
    /// other side of the change than the terminator (then it is the line
    /// the terminator replaces, not a nested block).
    fn directive_references_symbol(&self, end: usize) -> bool {
        let other_side = self.change_at(end).inverse();
        let mut nested: usize = 0;

        for i in (0..end).rev() {
            let line = self.normalized_at(i);

            if nested == 0 && DIRECTIVE_CONDITION.is_match(&line) {
                if references_symbol(&line)
                    || (continues(&line) && self.continuation_references_symbol(i + 1, end))
                {
                    return true;
                }
                // `#elif` continues the chain; only its `#if` ends it.
                if DIRECTIVE_START.is_match(&line) {
                    return false;
                }
                continue;
            }

            if DIRECTIVE_ENDIF.is_match(&line) && Some(self.change_at(i)) != other_side {
                nested += 1;
            } else if nested > 0 && DIRECTIVE_START.is_match(&line) {
                nested -= 1;
            }
        }
        false
    }

    /// Scan the backslash-continued lines of a condition, from `start` up
    /// to (not including) `end`, for a symbol reference.
    fn continuation_references_symbol(&self, start: usize, end: usize) -> bool {
        for i in start..end {
            let line = self.normalized_at(i);
            if references_symbol(&line) {
                return true;
            }
            if !continues(&line) {
                break;
            }
        }
        false
    }

    /// Find the `{` matching the closing brace at `end` and report whether
    /// the statement it opens is controlled by a symbol reference.
    ///
    /// Braces are matched right to left. A `}` on the other side of the
    /// change does not nest. `} else {` lines are passed over, so the
    /// branches of a conditional share the condition of its `if`.
    fn branch_references_symbol(&self, end: usize) -> bool {
        let other_side = self.change_at(end).inverse();
        let mut nested: usize = 0;

        for i in (0..end).rev() {
            let line = self.normalized_at(i);
            if !line.contains('{') && !line.contains('}') {
                continue;
            }
            if nested == 0 && ELSE_BRACE.is_match(&line) {
                continue;
            }

            let counts_closing = Some(self.change_at(i)) != other_side;
            let mut opener = None;
            for (pos, c) in line.char_indices().rev() {
                match c {
                    '}' if counts_closing => nested += 1,
                    '{' if nested > 0 => nested -= 1,
                    '{' => {
                        opener = Some(pos);
                        break;
                    }
                    _ => {}
                }
            }

            if let Some(pos) = opener {
                let condition = &line[..pos];
                if !is_blank(condition) {
                    return references_symbol(condition);
                }
                return self.split_condition_references_symbol(i);
            }
        }
        false
    }

    /// Reconstruct a condition whose `{` stands on its own line at `brace`.
    ///
    /// Walks back over the preceding lines until their parentheses balance,
    /// so `if (a &&\n b)\n{` is read as one condition while a `{` after a
    /// plain declaration stops at the declaration itself.
    fn split_condition_references_symbol(&self, brace: usize) -> bool {
        let mut balance: i64 = 0;

        for i in (0..brace).rev() {
            let line = self.normalized_at(i);
            if is_blank(&line) {
                continue;
            }
            if references_symbol(&line) {
                return true;
            }
            balance += paren_balance(&line);
            if balance == 0 {
                break;
            }
        }
        false
    }
}

fn references_symbol(text: &str) -> bool {
    SYMBOL_REFERENCE.is_match(text)
}

/// Remove comment text from a line.
///
/// `in_comment` tells whether the line starts inside a block comment.
/// Returns the live text and whether the line ends inside a block comment.
pub(super) fn strip_comments(text: &str, mut in_comment: bool) -> (String, bool) {
    let mut live = String::new();
    let mut rest = text;

    loop {
        if in_comment {
            let Some(pos) = rest.find(BLOCK_COMMENT_END) else {
                return (live, true);
            };
            rest = &rest[pos + BLOCK_COMMENT_END.len()..];
            in_comment = false;
            if !live.is_empty() {
                live.push(' ');
            }
            continue;
        }

        let line_comment = rest.find(LINE_COMMENT);
        let block_start = rest.find(BLOCK_COMMENT_START);
        let stray_end = rest.find(BLOCK_COMMENT_END);

        let first = [line_comment, block_start, stray_end]
            .into_iter()
            .flatten()
            .min();
        let Some(first) = first else {
            live.push_str(rest);
            return (live, false);
        };

        if Some(first) == line_comment {
            live.push_str(&rest[..first]);
            return (live, false);
        } else if Some(first) == block_start {
            live.push_str(&rest[..first]);
            rest = &rest[first + BLOCK_COMMENT_START.len()..];
            in_comment = true;
        } else {
            // A comment closed without being opened on a visible line:
            // everything before it was comment text.
            live.clear();
            rest = &rest[first + BLOCK_COMMENT_END.len()..];
        }
    }
}

/// Which lines of a block start inside a block comment.
///
/// Traced once per side of the change: the added view ignores deleted
/// lines, the deleted view ignores added lines, and the context view sees
/// every line.
#[derive(Debug, Clone, Default)]
struct CommentMap {
    added: Vec<bool>,
    deleted: Vec<bool>,
    context: Vec<bool>,
}

impl CommentMap {
    fn trace(lines: &[String]) -> Self {
        Self {
            added: Self::trace_view(lines, ChangeType::Added),
            deleted: Self::trace_view(lines, ChangeType::Deleted),
            context: Self::trace_view(lines, ChangeType::Context),
        }
    }

    fn trace_view(lines: &[String], view: ChangeType) -> Vec<bool> {
        let mut in_comment = false;
        lines
            .iter()
            .map(|raw| {
                let starts = in_comment;
                let (change, text) = strip_marker(raw);
                if view.shares_version_with(change) {
                    in_comment = strip_comments(text, in_comment).1;
                }
                starts
            })
            .collect()
    }

    fn starts_in_comment(&self, index: usize, view: ChangeType) -> bool {
        let states = match view {
            ChangeType::Added => &self.added,
            ChangeType::Deleted => &self.deleted,
            ChangeType::Context => &self.context,
        };
        states.get(index).copied().unwrap_or(false)
    }
}
