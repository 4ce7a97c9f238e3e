//! CLI argument parsing for difflog.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// difflog: parse unified diffs into line-numbered change logs.
///
/// Reads `git diff` output (or a diff file / stdin) and reports, per file,
/// the added and removed lines, likely modifications, and changed line ranges.
#[derive(Parser, Debug)]
#[command(name = "difflog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a config file (default: ./.difflog.yaml if present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    /// `RUST_LOG` takes precedence when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for difflog.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the parsed changes of each file.
    ///
    /// Prints added lines, removed lines, modification pairs and
    /// changed line ranges for every file in the diff.
    Show(ShowArgs),

    /// List changed files with added/removed line counts.
    Files(FilesArgs),
}

/// Where the diff comes from, shared by all commands.
#[derive(Parser, Debug, Clone)]
pub struct SourceArgs {
    /// Limit `git diff` to this path.
    pub path: Option<String>,

    /// Read the diff from a file instead of running git (`-` for stdin).
    #[arg(short, long, conflicts_with = "path")]
    pub input: Option<PathBuf>,

    /// Only report files matching these globs (overrides config `include`).
    #[arg(long, value_delimiter = ',')]
    pub include: Vec<String>,
}

/// Report sections for `show`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Added lines with their new line numbers.
    Added,
    /// Removed lines with their old line numbers.
    Removed,
    /// Removed lines directly followed by added lines.
    Modified,
    /// Changed line numbers compacted into ranges.
    Ranges,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Added,
        Section::Removed,
        Section::Modified,
        Section::Ranges,
    ];
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Sections to print (default: all).
    #[arg(short, long, value_enum, value_delimiter = ',')]
    pub section: Vec<Section>,

    /// Emit a JSON document instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `files` command.
#[derive(Parser, Debug)]
pub struct FilesArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Emit a JSON document instead of text.
    #[arg(long)]
    pub json: bool,
}
