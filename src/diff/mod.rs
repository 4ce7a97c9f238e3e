//! Unified diff parsing primitives for difflog.
//!
//! This module turns raw `git diff` style output into a structured change
//! log per file and provides the queries built on top of it:
//! - added-only / removed-only projections
//! - heuristic pairing of adjacent removed+added lines as modifications
//! - compaction of changed line numbers into inclusive ranges
//!
//! The parsing is deterministic and never aborts on malformed content:
//! - Two independent line counters (old/new) reset at every hunk header
//! - Malformed hunk or file headers are recorded as skip events
//! - New and deleted files (`/dev/null`) keep their raw `---`/`+++` paths

mod helpers;
mod hunk;
mod model;
mod parser;
mod query;


// Re-export public API
pub use hunk::{HunkHeaderError, parse_hunk_header};
pub use model::{
    DEV_NULL, FileChange, HunkHeader, LineChange, LineKind, LineRange, LineRanges, Modification,
    ParsedDiff, SkipEvent, SkipReason,
};
pub use parser::{parse, parse_bytes, parse_diff};
pub use query::{added_only, compact_ranges, pair_modifications, removed_only};
