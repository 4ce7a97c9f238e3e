//! Filename filtering with glob patterns.
//!
//! Note: in globset, `*` matches path separators too, so `*.rs` matches
//! `src/nested/lib.rs`.

use crate::diff::FileChange;
use crate::error::{DiffLogError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};

/// Include filter over diff filenames. An empty filter matches every file.
#[derive(Debug, Clone)]
pub struct FileFilter {
    patterns: Vec<String>,
    globs: GlobSet,
}

impl FileFilter {
    /// Build a filter from glob patterns.
    ///
    /// # Returns
    ///
    /// * `Ok(FileFilter)` - Compiled filter
    /// * `Err(DiffLogError::UserError)` - A pattern is not a valid glob
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();

        for pattern in patterns {
            let pattern = pattern.as_ref();
            let glob = Glob::new(&pattern.replace('\\', "/")).map_err(|e| {
                DiffLogError::UserError(format!("invalid glob pattern '{}': {}", pattern, e))
            })?;
            builder.add(glob);
        }

        let globs = builder
            .build()
            .map_err(|e| DiffLogError::UserError(format!("failed to compile globs: {}", e)))?;

        Ok(Self {
            patterns: patterns.iter().map(|p| p.as_ref().to_string()).collect(),
            globs,
        })
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn is_match(&self, filename: &str) -> bool {
        self.patterns.is_empty() || self.globs.is_match(filename)
    }

    /// Keep only the files whose name matches the filter.
    pub fn apply(&self, files: Vec<FileChange>) -> Vec<FileChange> {
        files
            .into_iter()
            .filter(|file| self.is_match(&file.filename))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> FileChange {
        FileChange {
            filename: name.to_string(),
            ..FileChange::default()
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = FileFilter::new::<&str>(&[]).unwrap();
        assert!(filter.is_match("anything/at/all.txt"));
    }

    #[test]
    fn globs_select_files() {
        let filter = FileFilter::new(&["*.json", "docs/**"]).unwrap();

        assert!(filter.is_match("config.json"));
        assert!(filter.is_match("nested/dir/data.json"));
        assert!(filter.is_match("docs/guide/intro.md"));
        assert!(!filter.is_match("src/main.rs"));
        assert_eq!(filter.patterns(), ["*.json", "docs/**"]);
    }

    #[test]
    fn apply_keeps_order_of_matching_files() {
        let filter = FileFilter::new(&["*.rs"]).unwrap();
        let kept = filter.apply(vec![file("b.rs"), file("a.md"), file("a.rs")]);

        let names: Vec<_> = kept.iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(names, vec!["b.rs", "a.rs"]);
    }

    #[test]
    fn invalid_glob_is_user_error() {
        let err = FileFilter::new(&["["]).unwrap_err();
        assert!(matches!(err, DiffLogError::UserError(_)));
        assert!(err.to_string().contains("invalid glob pattern '['"));
    }
}
