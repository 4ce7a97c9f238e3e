//! Report building and rendering shared by the commands.

use crate::cli::Section;
use difflog::diff::{
    FileChange, LineChange, LineRange, LineRanges, Modification, ParsedDiff, SkipEvent, added_only,
    compact_ranges, pair_modifications, removed_only,
};
use serde::Serialize;
use std::fmt::Write;

/// JSON report for `show --json`.
#[derive(Debug, Serialize)]
pub struct DiffReport<'a> {
    pub files: Vec<FileReport<'a>>,
    pub skipped: &'a [SkipEvent],
}

impl<'a> DiffReport<'a> {
    pub fn build(parsed: &'a ParsedDiff, sections: &[Section]) -> Self {
        Self {
            files: parsed
                .files
                .iter()
                .map(|file| FileReport::build(file, sections))
                .collect(),
            skipped: &parsed.skipped,
        }
    }
}

/// The selected sections for one file.
#[derive(Debug, Serialize)]
pub struct FileReport<'a> {
    pub filename: &'a str,
    pub old_file: &'a str,
    pub new_file: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added: Option<Vec<&'a LineChange>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed: Option<Vec<&'a LineChange>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<Vec<Modification<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranges: Option<LineRanges>,
}

impl<'a> FileReport<'a> {
    pub fn build(file: &'a FileChange, sections: &[Section]) -> Self {
        let changes = &file.line_changes;
        let wants = |section| sections.contains(&section);

        Self {
            filename: &file.filename,
            old_file: &file.old_file,
            new_file: &file.new_file,
            added: wants(Section::Added).then(|| added_only(changes)),
            removed: wants(Section::Removed).then(|| removed_only(changes)),
            modified: wants(Section::Modified).then(|| pair_modifications(changes)),
            ranges: wants(Section::Ranges).then(|| compact_ranges(changes)),
        }
    }
}

/// Render one file as text, with sections in a fixed order.
pub fn render_file(file: &FileChange, sections: &[Section]) -> String {
    let report = FileReport::build(file, sections);
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "\n=== File: {} ===", report.filename);

    if let Some(added) = &report.added {
        let _ = writeln!(out, "\nAdded lines ({}):", added.len());
        for line in added {
            let _ = writeln!(out, "  +{}: {}", line_number(line.new_line), line.content);
        }
    }

    if let Some(removed) = &report.removed {
        let _ = writeln!(out, "\nRemoved lines ({}):", removed.len());
        for line in removed {
            let _ = writeln!(out, "  -{}: {}", line_number(line.old_line), line.content);
        }
    }

    if let Some(modified) = &report.modified {
        let _ = writeln!(out, "\nModified lines ({} pairs):", modified.len());
        for pair in modified {
            let _ = writeln!(
                out,
                "  -{}: {}",
                line_number(pair.removed.old_line),
                pair.removed.content
            );
            let _ = writeln!(
                out,
                "  +{}: {}\n",
                line_number(pair.added.new_line),
                pair.added.content
            );
        }
    }

    if let Some(ranges) = &report.ranges {
        let _ = writeln!(out, "\nAdded line ranges: {}", format_ranges(&ranges.added));
        let _ = writeln!(out, "Removed line ranges: {}", format_ranges(&ranges.removed));
    }

    out
}

fn line_number(line: Option<usize>) -> String {
    line.map(|n| n.to_string()).unwrap_or_default()
}

fn format_ranges(ranges: &[LineRange]) -> String {
    if ranges.is_empty() {
        return "none".to_string();
    }
    ranges
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// One row of `difflog files`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileSummary {
    pub filename: String,
    pub added: usize,
    pub removed: usize,
    pub new_file: bool,
    pub deleted_file: bool,
}

impl From<&FileChange> for FileSummary {
    fn from(file: &FileChange) -> Self {
        Self {
            filename: file.filename.clone(),
            added: file.added_count(),
            removed: file.removed_count(),
            new_file: file.is_new_file(),
            deleted_file: file.is_deleted_file(),
        }
    }
}

pub fn render_file_summary(summary: &FileSummary) -> String {
    let marker = if summary.new_file {
        " (new)"
    } else if summary.deleted_file {
        " (deleted)"
    } else {
        ""
    };
    format!(
        "{:>6} {:>6}  {}{}",
        format!("+{}", summary.added),
        format!("-{}", summary.removed),
        summary.filename,
        marker
    )
}
