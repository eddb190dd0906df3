//! Line classification for varlines.
//!
//! This module decides, for every changed line of a diff block, whether it
//! carries artifact-specific or variability information. Each file kind
//! has its own normalizer (marker and comment stripping) and classifier:
//! - `Model`: Kconfig definitions, includes and `depends on` resolution
//! - `Build`: `$(CONFIG_...)` references and `else`/`endif` backtracking
//! - `Source`: `CONFIG_` references, `#else`/`#endif` and closing braces
//! - `Other`: never counts anything
//!
//! Classification is pure: it only reads the lines of one block, never
//! fails, and keeps no state across blocks.

mod build;
mod counter;
mod lines;
mod model;
mod source;
mod types;

#[cfg(test)]
mod tests;

pub use build::BuildClassifier;
pub use counter::{classify_lines, count_changes, tally};
pub use model::ModelClassifier;
pub use source::SourceClassifier;
pub use types::{ChangeCounts, ChangeType, ClassifiedLine, FileKind};

use crate::diff::DiffBlock;
use crate::logging::Log;

/// The normalizer/classifier pair for the file kind of one diff block.
pub enum Classifier<'a> {
    Model(ModelClassifier<'a>),
    Build(BuildClassifier<'a>),
    Source(SourceClassifier<'a>),
    Other(OtherClassifier<'a>),
}

impl<'a> Classifier<'a> {
    /// Select the classifier for `kind` over `block`.
    pub fn for_kind(kind: FileKind, block: &'a DiffBlock, log: &'a dyn Log) -> Self {
        match kind {
            FileKind::Model => Classifier::Model(ModelClassifier::new(block, log)),
            FileKind::Build => Classifier::Build(BuildClassifier::new(block, log)),
            FileKind::Source => Classifier::Source(SourceClassifier::new(block, log)),
            FileKind::Other => Classifier::Other(OtherClassifier::new(block, log)),
        }
    }

    pub fn kind(&self) -> FileKind {
        match self {
            Classifier::Model(_) => FileKind::Model,
            Classifier::Build(_) => FileKind::Build,
            Classifier::Source(_) => FileKind::Source,
            Classifier::Other(_) => FileKind::Other,
        }
    }

    pub fn block(&self) -> &'a DiffBlock {
        match self {
            Classifier::Model(c) => c.block(),
            Classifier::Build(c) => c.block(),
            Classifier::Source(c) => c.block(),
            Classifier::Other(c) => c.block,
        }
    }

    /// Strip the change marker and comment text from the raw line at `index`.
    ///
    /// # Arguments
    ///
    /// * `raw` - The line as it appears in the block, with or without marker
    /// * `index` - Position of the line in the block, used for backtracking
    ///
    /// # Returns
    ///
    /// The remaining code, whitespace preserved. Empty if the line holds
    /// nothing but comment text.
    pub fn normalize(&self, raw: &str, index: usize) -> String {
        match self {
            Classifier::Model(c) => c.normalize(raw, index),
            Classifier::Build(c) => c.normalize(raw, index),
            Classifier::Source(c) => c.normalize(raw, index),
            Classifier::Other(c) => c.normalize(raw, index),
        }
    }

    /// Decide whether a normalized, non-empty line is a variability change.
    ///
    /// # Arguments
    ///
    /// * `clean` - The normalized text of the line
    /// * `index` - Position of the line in the block, used for backtracking
    pub fn is_variability_change(&self, clean: &str, index: usize) -> bool {
        match self {
            Classifier::Model(c) => c.is_variability_change(clean, index),
            Classifier::Build(c) => c.is_variability_change(clean, index),
            Classifier::Source(c) => c.is_variability_change(clean, index),
            Classifier::Other(c) => c.is_variability_change(clean, index),
        }
    }
}

/// Classifier for files outside the analysis (documentation, scripts, ...).
///
/// Every line normalizes to nothing, so no line of such a file is counted.
pub struct OtherClassifier<'a> {
    block: &'a DiffBlock,
    log: &'a dyn Log,
}

impl<'a> OtherClassifier<'a> {
    pub fn new(block: &'a DiffBlock, log: &'a dyn Log) -> Self {
        Self { block, log }
    }

    pub fn normalize(&self, _raw: &str, _index: usize) -> String {
        String::new()
    }

    pub fn is_variability_change(&self, clean: &str, _index: usize) -> bool {
        self.log.debug("OtherClassifier", "Change ignored", Some(clean));
        false
    }
}
