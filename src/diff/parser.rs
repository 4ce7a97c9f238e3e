//! Core diff parsing logic.
//!
//! The parser is a single pass over the input lines with two states: waiting
//! for the first `diff --git` header, or inside a file. Inside a file it keeps
//! the running old/new line counters, which every valid hunk header resets.
//! Malformed lines never abort the parse; they are recorded as skip events.

use crate::error::{DiffLogError, Result};

use super::helpers::{parse_diff_git_line, split_marker};
use super::hunk::parse_hunk_header;
use super::model::{FileChange, LineChange, ParsedDiff, SkipEvent, SkipReason};

/// Running line numbers for the current hunk.
#[derive(Debug, Clone, Copy)]
struct Counters {
    old_line: usize,
    new_line: usize,
}

impl Counters {
    /// Counters after consuming one content line, or `None` on overflow.
    fn advance(self, marker: char) -> Option<Self> {
        let old_line = match marker {
            ' ' | '-' => self.old_line.checked_add(1)?,
            _ => self.old_line,
        };
        let new_line = match marker {
            ' ' | '+' => self.new_line.checked_add(1)?,
            _ => self.new_line,
        };
        Some(Self { old_line, new_line })
    }
}

enum State {
    AwaitingFile,
    InFile {
        file: FileChange,
        /// `None` until the first valid hunk header of this file.
        counters: Option<Counters>,
    },
}

struct DiffParser {
    state: State,
    result: ParsedDiff,
}

impl DiffParser {
    fn new() -> Self {
        Self {
            state: State::AwaitingFile,
            result: ParsedDiff::default(),
        }
    }

    fn skip(&mut self, line_number: usize, reason: SkipReason, line: &str) {
        tracing::debug!(line_number, ?reason, line, "skipping diff line");
        self.result.skipped.push(SkipEvent {
            line_number,
            reason,
            line: line.to_string(),
        });
    }

    /// Move the current file (if any) into the result.
    fn finish_file(&mut self) {
        if let State::InFile { file, .. } = std::mem::replace(&mut self.state, State::AwaitingFile)
        {
            self.result.files.push(file);
        }
    }

    fn feed(&mut self, line_number: usize, line: &str) {
        // Format: "diff --git a/path/to/file b/path/to/file"
        if let Some(rest) = line.strip_prefix("diff --git") {
            self.finish_file();
            match parse_diff_git_line(rest) {
                Some(filename) => {
                    self.state = State::InFile {
                        file: FileChange::new(filename),
                        counters: None,
                    };
                }
                None => self.skip(line_number, SkipReason::MalformedFileHeader, line),
            }
            return;
        }

        // Format: "--- a/path/to/file" or "--- /dev/null"
        if let Some(rest) = line.strip_prefix("---") {
            if let State::InFile { file, .. } = &mut self.state {
                file.old_file = rest.trim().to_string();
            }
            return;
        }

        // Format: "+++ b/path/to/file" or "+++ /dev/null"
        if let Some(rest) = line.strip_prefix("+++") {
            if let State::InFile { file, .. } = &mut self.state {
                file.new_file = rest.trim().to_string();
            }
            return;
        }

        // Format: "@@ -old_start,old_len +new_start,new_len @@ optional context"
        if line.starts_with("@@") {
            if let State::InFile { counters, .. } = &mut self.state {
                match parse_hunk_header(line) {
                    Ok(hunk) => {
                        *counters = Some(Counters {
                            old_line: hunk.old_start,
                            new_line: hunk.new_start,
                        });
                    }
                    // Counters keep whatever value they last held
                    Err(_) => self.skip(line_number, SkipReason::MalformedHunkHeader, line),
                }
            }
            return;
        }

        let State::InFile { file, counters } = &mut self.state else {
            // Prologue text before the first file header
            return;
        };

        // A literally empty line is treated as noise, not as context
        let Some((marker, content)) = split_marker(line) else {
            return;
        };

        if !matches!(marker, ' ' | '-' | '+') {
            // index lines, mode changes, "\ No newline at end of file", ...
            return;
        }

        let Some(c) = *counters else {
            self.skip(line_number, SkipReason::ContentOutsideHunk, line);
            return;
        };

        let Some(next) = c.advance(marker) else {
            // The hunk runs past the largest line number; drop the rest of it
            *counters = None;
            self.skip(line_number, SkipReason::LineNumberOverflow, line);
            return;
        };

        let change = match marker {
            ' ' => LineChange::unchanged(c.old_line, c.new_line, content),
            '-' => LineChange::removed(c.old_line, content),
            _ => LineChange::added(c.new_line, content),
        };
        file.line_changes.push(change);
        *counters = Some(next);
    }

    fn finish(mut self) -> ParsedDiff {
        self.finish_file();
        self.result
    }
}

/// Parse unified diff text into per-file change logs plus skip events.
///
/// Never fails: malformed headers and stray lines are recorded in
/// [`ParsedDiff::skipped`] and parsing continues with the next line.
pub fn parse_diff(diff_output: &str) -> ParsedDiff {
    let mut parser = DiffParser::new();
    for (idx, line) in diff_output.lines().enumerate() {
        parser.feed(idx + 1, line);
    }
    parser.finish()
}

/// Parse unified diff text into per-file change logs.
///
/// Files are returned in the order their `diff --git` headers appear.
pub fn parse(diff_output: &str) -> Vec<FileChange> {
    parse_diff(diff_output).files
}

/// Parse raw diff bytes.
///
/// # Returns
///
/// * `Ok(ParsedDiff)` - Parsed files and skip events
/// * `Err(DiffLogError::InvalidInput)` - The bytes are not valid UTF-8
pub fn parse_bytes(bytes: &[u8]) -> Result<ParsedDiff> {
    let text = std::str::from_utf8(bytes).map_err(|e| {
        DiffLogError::InvalidInput(format!("diff output is not valid UTF-8: {}", e))
    })?;
    Ok(parse_diff(text))
}
