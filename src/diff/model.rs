//! Data model for parsed diffs.

use serde::Serialize;

/// Classification of a single line inside a hunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Line present only in the new file (`+`).
    Added,
    /// Line present only in the old file (`-`).
    Removed,
    /// Context line present in both files (` `).
    Unchanged,
}

/// One line inside a hunk.
///
/// `old_line` is set for removed and unchanged lines, `new_line` for added
/// and unchanged lines. Use the constructors to keep that pairing intact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineChange {
    /// Kind of change.
    pub kind: LineKind,
    /// The line text without its leading marker.
    pub content: String,
    /// Line number in the old file (1-based).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_line: Option<usize>,
    /// Line number in the new file (1-based).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_line: Option<usize>,
}

impl LineChange {
    /// An added line at `new_line` in the new file.
    pub fn added(new_line: usize, content: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Added,
            content: content.into(),
            old_line: None,
            new_line: Some(new_line),
        }
    }

    /// A removed line at `old_line` in the old file.
    pub fn removed(old_line: usize, content: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Removed,
            content: content.into(),
            old_line: Some(old_line),
            new_line: None,
        }
    }

    /// A context line present in both files.
    pub fn unchanged(old_line: usize, new_line: usize, content: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Unchanged,
            content: content.into(),
            old_line: Some(old_line),
            new_line: Some(new_line),
        }
    }

    pub fn is_added(&self) -> bool {
        self.kind == LineKind::Added
    }

    pub fn is_removed(&self) -> bool {
        self.kind == LineKind::Removed
    }
}

/// Parsed `@@ -old_start,old_count +new_start,new_count @@` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HunkHeader {
    pub old_start: usize,
    pub old_count: usize,
    pub new_start: usize,
    pub new_count: usize,
}

/// All changes for one file in a diff.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileChange {
    /// Repository-relative path from the `diff --git` header (forward slashes).
    pub filename: String,
    /// Raw text after the `---` marker (e.g. `a/src/lib.rs` or `/dev/null`).
    pub old_file: String,
    /// Raw text after the `+++` marker (e.g. `b/src/lib.rs` or `/dev/null`).
    pub new_file: String,
    /// Line changes in the order they appear in the diff.
    pub line_changes: Vec<LineChange>,
}

/// Marker used by git for the missing side of a created or deleted file.
pub const DEV_NULL: &str = "/dev/null";

impl FileChange {
    pub(crate) fn new(filename: String) -> Self {
        Self {
            filename,
            ..Self::default()
        }
    }

    /// Number of added lines.
    pub fn added_count(&self) -> usize {
        self.line_changes.iter().filter(|c| c.is_added()).count()
    }

    /// Number of removed lines.
    pub fn removed_count(&self) -> usize {
        self.line_changes.iter().filter(|c| c.is_removed()).count()
    }

    /// True when the diff creates this file.
    pub fn is_new_file(&self) -> bool {
        self.old_file == DEV_NULL
    }

    /// True when the diff deletes this file.
    pub fn is_deleted_file(&self) -> bool {
        self.new_file == DEV_NULL
    }
}

/// Why the parser passed over an input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// A `@@` line that does not match the hunk header pattern.
    MalformedHunkHeader,
    /// A `diff --git` line without two path tokens.
    MalformedFileHeader,
    /// A content line seen before any hunk header of the current file.
    ContentOutsideHunk,
    /// A content line whose line numbers would exceed `usize::MAX`.
    LineNumberOverflow,
}

/// A non-fatal event recorded while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkipEvent {
    /// 1-based line number in the diff input.
    pub line_number: usize,
    pub reason: SkipReason,
    /// The raw input line.
    pub line: String,
}

/// Result of parsing a diff: the files plus any skipped lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedDiff {
    pub files: Vec<FileChange>,
    pub skipped: Vec<SkipEvent>,
}

impl ParsedDiff {
    /// True when the diff contained no files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// A removed line directly followed by an added line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Modification<'a> {
    pub removed: &'a LineChange,
    pub added: &'a LineChange,
}

/// Inclusive range of line numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl std::fmt::Display for LineRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Compacted line ranges for one change log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LineRanges {
    /// Ranges of new-file line numbers among added lines.
    pub added: Vec<LineRange>,
    /// Ranges of old-file line numbers among removed lines.
    pub removed: Vec<LineRange>,
}
