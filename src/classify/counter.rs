//! The single forward pass over the changed lines of a block.

use super::Classifier;
use super::lines::{is_blank, strip_marker};
use super::types::{ChangeCounts, ChangeType, ClassifiedLine};

/// Classify every counted line of the classifier's block.
///
/// Starting at the first hunk marker, each added or deleted line is
/// normalized and, if anything remains, classified. Lines that are blank
/// or hold only comment text are not counted and produce no verdict.
pub fn classify_lines(classifier: &Classifier<'_>) -> Vec<ClassifiedLine> {
    let block = classifier.block();
    let mut verdicts = Vec::new();

    for (index, raw) in block.lines().iter().enumerate().skip(block.changes_start()) {
        let (change, text) = strip_marker(raw);
        if change == ChangeType::Context || is_blank(text) {
            continue;
        }

        let clean = classifier.normalize(raw, index);
        if is_blank(&clean) {
            continue;
        }

        let variability = classifier.is_variability_change(&clean, index);
        verdicts.push(ClassifiedLine {
            index,
            change,
            text: clean,
            variability,
        });
    }

    verdicts
}

/// Count the changed lines of the classifier's block.
pub fn count_changes(classifier: &Classifier<'_>) -> ChangeCounts {
    tally(&classify_lines(classifier))
}

/// Sum already classified lines into counters.
pub fn tally(lines: &[ClassifiedLine]) -> ChangeCounts {
    lines.iter().fold(ChangeCounts::default(), |mut counts, line| {
        counts.record(line.change, line.variability);
        counts
    })
}
