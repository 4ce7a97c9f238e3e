//! Git command runner for difflog.
//!
//! Provides a wrapper around git commands with captured stdout/stderr and
//! structured error handling. Git is the default diff text source; any
//! failure to run it surfaces as [`DiffLogError::SourceUnavailable`].

use crate::error::{DiffLogError, Result};
use std::path::Path;
use std::process::{Command, Output};

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command, as raw bytes.
    pub stdout: Vec<u8>,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: output.stdout.clone(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

/// Run a git command with the specified working directory.
///
/// # Arguments
///
/// * `cwd` - The working directory to run the command in
/// * `args` - The git command arguments (without "git" prefix)
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(DiffLogError::SourceUnavailable)` - Git could not be run or exited non-zero
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let cwd = cwd.as_ref();
    let subcommand = args.first().copied().unwrap_or("");

    tracing::debug!(cwd = %cwd.display(), ?args, "running git");

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            DiffLogError::SourceUnavailable(format!(
                "failed to execute git {}: {} (is git installed?)",
                subcommand, e
            ))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if git_output.stderr.is_empty() {
            String::from_utf8_lossy(&git_output.stdout).trim().to_string()
        } else {
            git_output.stderr
        };

        Err(DiffLogError::SourceUnavailable(format!(
            "git {} failed (exit code {}): {}",
            subcommand, exit_code, error_msg
        )))
    }
}

/// Get the working tree diff as raw unified diff bytes.
///
/// Runs `git diff`, or `git diff -- <path>` when a path filter is given.
/// Output is returned undecoded; empty output means nothing changed.
pub fn diff_text<P: AsRef<Path>>(cwd: P, path_filter: Option<&str>) -> Result<Vec<u8>> {
    let mut args = vec!["diff", "--no-color", "--no-ext-diff"];
    if let Some(path) = path_filter {
        args.push("--");
        args.push(path);
    }

    let output = run_git(cwd, &args)?;
    Ok(output.stdout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{create_test_repo, git};

    #[test]
    fn diff_text_is_empty_for_clean_tree() {
        let repo = create_test_repo();
        let bytes = diff_text(repo.path(), None).unwrap();
        assert!(bytes.is_empty());
    }

    #[test]
    fn diff_text_reports_working_tree_changes() {
        let repo = create_test_repo();
        std::fs::write(repo.path().join("README.md"), "# Test\nmore\n").unwrap();

        let text = String::from_utf8(diff_text(repo.path(), None).unwrap()).unwrap();

        assert!(text.starts_with("diff --git a/README.md b/README.md"));
        assert!(text.contains("+more"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn diff_text_honors_path_filter() {
        let repo = create_test_repo();
        std::fs::write(repo.path().join("notes.txt"), "one\n").unwrap();
        git(repo.path(), &["add", "notes.txt"]);
        git(repo.path(), &["commit", "-m", "Add notes"]);

        std::fs::write(repo.path().join("README.md"), "# Changed\n").unwrap();
        std::fs::write(repo.path().join("notes.txt"), "two\n").unwrap();

        let text =
            String::from_utf8(diff_text(repo.path(), Some("notes.txt")).unwrap()).unwrap();

        assert!(text.contains("diff --git a/notes.txt b/notes.txt"));
        assert!(!text.contains("README.md"));
    }

    #[test]
    fn diff_text_keeps_non_utf8_bytes() {
        let repo = create_test_repo();
        std::fs::write(repo.path().join("menu.txt"), b"caf\xe9\n").unwrap();
        git(repo.path(), &["add", "menu.txt"]);
        git(repo.path(), &["commit", "-m", "Add menu"]);
        std::fs::write(repo.path().join("menu.txt"), b"caf\xe9 au lait\n").unwrap();

        let bytes = diff_text(repo.path(), None).unwrap();

        assert!(bytes.windows(2).any(|w| w == b"\xe9\n"));
        assert!(String::from_utf8(bytes).is_err());
    }

    #[test]
    fn run_git_outside_repo_is_source_unavailable() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = diff_text(dir.path(), None).unwrap_err();

        assert!(matches!(err, DiffLogError::SourceUnavailable(_)));
        assert!(err.to_string().contains("git diff failed"));
    }
}
