//! Helper functions for diff header parsing.

/// Parse the old and new paths from a "diff --git" header line.
///
/// Handles various formats:
/// - "diff --git a/path/to/file b/path/to/file" (normal)
/// - "diff --git a/path/to/file b/path/to/renamed" (rename)
/// - paths containing spaces
///
/// Returns `(old, new)` without their `a/` and `b/` prefixes, or None if
/// the line is not a diff header.
pub fn parse_diff_git_line(line: &str) -> Option<(String, String)> {
    let rest = line.strip_prefix(super::DIFF_HEADER_PREFIX)?.trim_start();

    // Paths can contain spaces, so split at the last " b/" occurrence
    if let Some(b_pos) = rest.rfind(" b/") {
        let a_part = &rest[..b_pos];
        let b_path = &rest[b_pos + 3..];
        let a_path = a_part.strip_prefix("a/").unwrap_or(a_part);
        return Some((normalize_path(a_path), normalize_path(b_path)));
    }

    // Fallback: no prefixes (diff.noprefix), split on whitespace
    let parts: Vec<&str> = rest.split_whitespace().collect();
    if parts.len() == 2 {
        return Some((normalize_path(parts[0]), normalize_path(parts[1])));
    }

    None
}

/// Normalize a file path to use forward slashes.
///
/// This ensures consistent path format for glob matching,
/// regardless of the platform where the diff was generated.
pub(super) fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
