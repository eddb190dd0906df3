//! Variability model files (Kconfig).
//!
//! Every definition statement (`config`, `menu`, `select`, `default`, ...)
//! and every `source` include is a variability change, except when it is
//! part of a help text. A `depends on` line takes the status of the model
//! element it decorates: the nearest preceding `comment "..."` or
//! definition statement.

use regex::Regex;
use std::sync::LazyLock;

use super::lines::{content, cut_at, indentation, is_blank, strip_marker};
use crate::diff::DiffBlock;
use crate::logging::Log;

const ORIGIN: &str = "ModelClassifier";

const COMMENT_MARKER: &str = "#";

/// Statements whose block contents are free text.
const TEXT_BLOCK_OPENERS: [&str; 4] = ["help", "--help--", "---help---", "comment"];

static DEFINITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(config|menuconfig|choice|endchoice|menu|endmenu|if|endif|bool|tristate|string|hex|int|default|def_bool|def_tristate|prompt|select|visible if|range)(\s+.*)?$",
    )
    .expect("Invalid model definition regex")
});

static INCLUDE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*source\s+((".*".*)|(.*/.*))$"#).expect("Invalid model include regex")
});

static DEPENDS_ON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*depends on\s+.*$").expect("Invalid depends-on regex"));

static COMMENT_STATEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*comment\s+".*$"#).expect("Invalid comment regex"));

/// Normalizer and classifier for Kconfig blocks.
pub struct ModelClassifier<'a> {
    block: &'a DiffBlock,
    log: &'a dyn Log,
}

impl<'a> ModelClassifier<'a> {
    pub fn new(block: &'a DiffBlock, log: &'a dyn Log) -> Self {
        Self { block, log }
    }

    pub fn block(&self) -> &'a DiffBlock {
        self.block
    }

    /// Strip the change marker and everything from the first `#` on.
    pub fn normalize(&self, raw: &str, _index: usize) -> String {
        let (_, text) = strip_marker(raw);
        cut_at(text, COMMENT_MARKER).to_string()
    }

    pub fn is_variability_change(&self, clean: &str, index: usize) -> bool {
        if self.is_text_block_line(indentation(clean), index) {
            return false;
        }

        let variability = if is_definition(clean) {
            true
        } else if DEPENDS_ON.is_match(clean) {
            self.decorates_definition(index)
        } else {
            false
        };

        if variability {
            self.log.debug(ORIGIN, "Variability change found", Some(clean));
        }
        variability
    }

    /// Comment-free text of the line at `index`, marker column removed.
    fn text_at(&self, index: usize) -> &'a str {
        self.block
            .line(index)
            .map(|raw| cut_at(content(raw), COMMENT_MARKER))
            .unwrap_or("")
    }

    /// Whether a line with the given indentation at `index` belongs to a
    /// help text (or the body of a comment statement).
    ///
    /// The owner is the nearest preceding non-blank line that is indented
    /// less than the line itself. Unindented lines never belong to one.
    fn is_text_block_line(&self, indent: usize, index: usize) -> bool {
        if indent == 0 {
            return false;
        }

        for i in (0..index).rev() {
            let text = self.text_at(i);
            if is_blank(text) {
                continue;
            }
            if indentation(text) < indent {
                let owner = text.trim();
                return TEXT_BLOCK_OPENERS
                    .iter()
                    .any(|opener| owner.starts_with(opener));
            }
        }
        false
    }

    /// Resolve a `depends on` line at `index`.
    ///
    /// Walks backward: a comment statement means the dependency guards a
    /// comment (no variability); a definition outside help text means it
    /// guards a model element. Further `depends on` lines take the status
    /// of the same element, so the walk simply continues past them.
    fn decorates_definition(&self, index: usize) -> bool {
        for i in (0..index).rev() {
            let text = self.text_at(i);
            if is_blank(text) {
                continue;
            }
            if COMMENT_STATEMENT.is_match(text) {
                return false;
            }
            if is_definition(text) && !self.is_text_block_line(indentation(text), i) {
                return true;
            }
        }
        false
    }
}

fn is_definition(text: &str) -> bool {
    DEFINITION.is_match(text) || INCLUDE.is_match(text)
}
