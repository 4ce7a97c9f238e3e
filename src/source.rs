//! Diff text acquisition.
//!
//! A diff comes either from `git diff` in a working directory, from a file,
//! or from stdin. Acquisition failures are surfaced as errors; parsing the
//! text afterwards never fails on malformed content.

use crate::diff::{self, ParsedDiff};
use crate::error::{DiffLogError, Result};
use crate::git;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where to read a diff from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffInput {
    /// Run `git diff` in `cwd`, optionally limited to one path.
    Git {
        cwd: PathBuf,
        path_filter: Option<String>,
    },
    /// Read a diff file from disk.
    File(PathBuf),
    /// Read the diff from stdin.
    Stdin,
}

impl DiffInput {
    /// Build the input from CLI arguments: `--input -` is stdin, any other
    /// `--input` is a file, and no `--input` means `git diff`.
    pub fn from_args(input: Option<&Path>, cwd: PathBuf, path_filter: Option<String>) -> Self {
        match input {
            Some(path) if path == Path::new("-") => DiffInput::Stdin,
            Some(path) => DiffInput::File(path.to_path_buf()),
            None => DiffInput::Git { cwd, path_filter },
        }
    }

    /// Obtain the raw diff bytes.
    pub fn read_bytes(&self) -> Result<Vec<u8>> {
        match self {
            DiffInput::Git { cwd, path_filter } => git::diff_text(cwd, path_filter.as_deref()),
            DiffInput::File(path) => std::fs::read(path).map_err(|e| {
                DiffLogError::UserError(format!(
                    "failed to read diff file '{}': {}",
                    path.display(),
                    e
                ))
            }),
            DiffInput::Stdin => {
                let mut buf = Vec::new();
                std::io::stdin()
                    .lock()
                    .read_to_end(&mut buf)
                    .map_err(|e| DiffLogError::UserError(format!("failed to read stdin: {}", e)))?;
                Ok(buf)
            }
        }
    }

    /// Obtain and parse the diff.
    pub fn load(&self) -> Result<ParsedDiff> {
        let bytes = self.read_bytes()?;
        let parsed = diff::parse_bytes(&bytes)?;
        tracing::info!(
            source = %self,
            files = parsed.files.len(),
            skipped = parsed.skipped.len(),
            "parsed diff"
        );
        Ok(parsed)
    }
}

impl std::fmt::Display for DiffInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiffInput::Git {
                path_filter: Some(path),
                ..
            } => write!(f, "git diff -- {}", path),
            DiffInput::Git { .. } => write!(f, "git diff"),
            DiffInput::File(path) => write!(f, "{}", path.display()),
            DiffInput::Stdin => write!(f, "stdin"),
        }
    }
}
