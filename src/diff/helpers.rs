//! Helper functions for diff parsing.

/// Parse the file path from the remainder of a "diff --git" line.
///
/// Handles various formats:
/// - "a/path/to/file b/path/to/file" (normal)
/// - "a/path with spaces b/path with spaces"
/// - "path/to/file path/to/file" (`--no-prefix`)
///
/// Returns the first (old side) path with its `a/` prefix stripped, or None
/// if the line does not carry two path tokens.
pub(super) fn parse_diff_git_line(rest: &str) -> Option<String> {
    let rest = rest.trim();

    // Paths can contain spaces, so split on the last " b/" when present
    if let Some(b_pos) = rest.rfind(" b/") {
        let a_part = rest[..b_pos].trim_end();
        if !a_part.is_empty() {
            return Some(normalize_path(strip_side_prefix(a_part, "a/")));
        }
    }

    // Fallback: whitespace-separated tokens, first one is the old path
    let parts: Vec<&str> = rest.split_whitespace().collect();
    if parts.len() >= 2 {
        return Some(normalize_path(strip_side_prefix(parts[0], "a/")));
    }

    None
}

fn strip_side_prefix<'a>(path: &'a str, prefix: &str) -> &'a str {
    path.strip_prefix(prefix).unwrap_or(path)
}

/// Normalize a file path to use forward slashes.
///
/// This keeps filenames consistent for glob matching regardless of the
/// platform that produced the diff.
pub(super) fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

/// Split a content line into its marker and the rest of the line.
pub(super) fn split_marker(line: &str) -> Option<(char, &str)> {
    let marker = line.chars().next()?;
    Some((marker, &line[marker.len_utf8()..]))
}
