//! Small text primitives shared by the classifiers.

use super::types::ChangeType;

/// Remove a leading `+`/`-` marker.
///
/// Lines without marker (context lines, lines already normalized) are
/// returned unchanged.
pub(super) fn strip_marker(raw: &str) -> (ChangeType, &str) {
    let change = ChangeType::of(raw);
    match change {
        ChangeType::Added | ChangeType::Deleted => (change, &raw[1..]),
        ChangeType::Context => (change, raw),
    }
}

/// The text of a raw line with its whole marker column removed.
///
/// Unlike [`strip_marker`] this also drops the leading space of context
/// lines, so that the indentation of context and changed lines compares
/// like with like.
pub(super) fn content(raw: &str) -> &str {
    match ChangeType::of(raw) {
        ChangeType::Added | ChangeType::Deleted => &raw[1..],
        ChangeType::Context => raw.strip_prefix(' ').unwrap_or(raw),
    }
}

/// Everything before the first occurrence of `marker`.
pub(super) fn cut_at<'t>(text: &'t str, marker: &str) -> &'t str {
    match text.find(marker) {
        Some(pos) => &text[..pos],
        None => text,
    }
}

/// Number of leading whitespace characters.
pub(super) fn indentation(text: &str) -> usize {
    text.chars().take_while(|c| c.is_whitespace()).count()
}

/// `(` minus `)` occurrences.
pub(super) fn paren_balance(text: &str) -> i64 {
    text.chars().fold(0, |balance, c| match c {
        '(' => balance + 1,
        ')' => balance - 1,
        _ => balance,
    })
}

pub(super) fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Whether the trimmed text ends in a line-continuation backslash.
pub(super) fn continues(text: &str) -> bool {
    text.trim_end().ends_with('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_marker_only_removes_change_markers() {
        assert_eq!(strip_marker("+foo"), (ChangeType::Added, "foo"));
        assert_eq!(strip_marker("- bar"), (ChangeType::Deleted, " bar"));
        assert_eq!(strip_marker(" ctx"), (ChangeType::Context, " ctx"));
        assert_eq!(strip_marker(""), (ChangeType::Context, ""));
    }

    #[test]
    fn content_drops_context_column() {
        assert_eq!(content(" \tbool"), "\tbool");
        assert_eq!(content("+\tbool"), "\tbool");
        assert_eq!(content("@@ -1 +1 @@"), "@@ -1 +1 @@");
    }

    #[test]
    fn cut_and_measure() {
        assert_eq!(cut_at("obj-y += a.o # note", "#"), "obj-y += a.o ");
        assert_eq!(cut_at("no marker", "#"), "no marker");
        assert_eq!(indentation("\t  x"), 3);
        assert_eq!(indentation(""), 0);
        assert_eq!(paren_balance("if (a && (b)"), 1);
        assert!(continues("foo \\  "));
        assert!(!continues("foo"));
        assert!(is_blank(" \t"));
    }
}
