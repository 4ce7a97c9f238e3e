//! Command implementations for difflog.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the shared diff loading step every command uses.

mod files;
mod report;
mod show;

use crate::cli::{Cli, Command, SourceArgs};
use difflog::config::Config;
use difflog::diff::{ParsedDiff, SkipEvent};
use difflog::error::{DiffLogError, Result};
use difflog::source::DiffInput;
use std::path::Path;

/// Dispatch a command to its implementation.
///
/// The config is resolved once here and handed to the command.
pub fn dispatch(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().map_err(|e| {
        DiffLogError::UserError(format!("failed to get current working directory: {}", e))
    })?;
    let config = Config::resolve(cli.config.as_deref(), &cwd)?;
    tracing::debug!(?config, "resolved config");

    match cli.command {
        Command::Show(args) => show::cmd_show(&config, &cwd, args),
        Command::Files(args) => files::cmd_files(&config, &cwd, args),
    }
}

/// Obtain, parse and filter the diff described by the source arguments.
///
/// Skip events are logged as warnings and kept in the result.
pub(crate) fn load_diff(config: &Config, cwd: &Path, source: &SourceArgs) -> Result<ParsedDiff> {
    let filter = config.include_filter(&source.include)?;
    let input =
        DiffInput::from_args(source.input.as_deref(), cwd.to_path_buf(), source.path.clone());

    let mut parsed = input.load()?;
    for event in &parsed.skipped {
        warn_skipped(event);
    }

    let total = parsed.files.len();
    parsed.files = filter.apply(parsed.files);
    if parsed.files.len() != total {
        tracing::info!(
            kept = parsed.files.len(),
            total,
            patterns = ?filter.patterns(),
            "filtered files by include globs"
        );
    }

    Ok(parsed)
}

fn warn_skipped(event: &SkipEvent) {
    tracing::warn!(
        line_number = event.line_number,
        reason = ?event.reason,
        line = %event.line,
        "skipped diff line"
    );
}
