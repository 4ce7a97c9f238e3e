//! Implementation of the `difflog show` command.
//!
//! Prints, for each file, the sections selected with `--section`.

use super::load_diff;
use super::report::{DiffReport, render_file};
use crate::cli::{Section, ShowArgs};
use difflog::config::Config;
use difflog::error::{DiffLogError, Result};
use std::path::Path;

/// Execute the `difflog show` command.
pub fn cmd_show(config: &Config, cwd: &Path, args: ShowArgs) -> Result<()> {
    let parsed = load_diff(config, cwd, &args.source)?;

    let sections: &[Section] = if args.section.is_empty() {
        &Section::ALL
    } else {
        &args.section
    };

    if args.json {
        let report = DiffReport::build(&parsed, sections);
        let json = serde_json::to_string_pretty(&report).map_err(|e| {
            DiffLogError::UserError(format!("failed to serialize report: {}", e))
        })?;
        println!("{}", json);
        return Ok(());
    }

    if parsed.files.is_empty() {
        println!("No changes found");
        return Ok(());
    }

    for file in &parsed.files {
        print!("{}", render_file(file, sections));
    }

    if !parsed.skipped.is_empty() {
        println!();
        println!(
            "Skipped {} malformed line(s); run with -v for details.",
            parsed.skipped.len()
        );
    }

    Ok(())
}
