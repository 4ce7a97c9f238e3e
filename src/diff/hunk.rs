//! Hunk header parsing.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use super::model::HunkHeader;

/// Matches `@@ -old_start[,old_count] +new_start[,new_count] @@`.
/// Anything after the closing `@@` (usually a function name) is ignored.
static HUNK_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@@\s*-(\d+)(?:,(\d+))?\s*\+(\d+)(?:,(\d+))?\s*@@")
        .expect("Invalid hunk header regex")
});

/// Error returned when a line is not a valid hunk header.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HunkHeaderError {
    #[error("malformed hunk header: {0}")]
    Malformed(String),
}

/// Parse a hunk header line.
///
/// Counts default to 1 when the diff omits them, which git does for
/// single-line hunks (`@@ -5 +7 @@`).
pub fn parse_hunk_header(line: &str) -> Result<HunkHeader, HunkHeaderError> {
    let malformed = || HunkHeaderError::Malformed(line.to_string());

    let caps = HUNK_HEADER_REGEX.captures(line).ok_or_else(malformed)?;

    let number = |idx: usize, default: usize| -> Result<usize, HunkHeaderError> {
        match caps.get(idx) {
            Some(m) => m.as_str().parse().map_err(|_| malformed()),
            None => Ok(default),
        }
    };

    Ok(HunkHeader {
        old_start: number(1, 0)?,
        old_count: number(2, 1)?,
        new_start: number(3, 0)?,
        new_count: number(4, 1)?,
    })
}
