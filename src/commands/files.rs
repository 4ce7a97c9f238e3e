//! Implementation of the `difflog files` command.
//!
//! Lists changed files with their added/removed line counts.

use super::load_diff;
use super::report::{FileSummary, render_file_summary};
use crate::cli::FilesArgs;
use difflog::config::Config;
use difflog::error::{DiffLogError, Result};
use std::path::Path;

/// Execute the `difflog files` command.
pub fn cmd_files(config: &Config, cwd: &Path, args: FilesArgs) -> Result<()> {
    let parsed = load_diff(config, cwd, &args.source)?;
    let summaries: Vec<FileSummary> = parsed.files.iter().map(FileSummary::from).collect();

    if args.json {
        let json = serde_json::to_string_pretty(&summaries).map_err(|e| {
            DiffLogError::UserError(format!("failed to serialize file list: {}", e))
        })?;
        println!("{}", json);
        return Ok(());
    }

    if summaries.is_empty() {
        println!("No changes found");
        return Ok(());
    }

    for summary in &summaries {
        println!("{}", render_file_summary(summary));
    }

    Ok(())
}
