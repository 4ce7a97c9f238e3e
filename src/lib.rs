//! difflog: parse unified diffs into line-numbered change logs.
//!
//! The core is [`diff`]: a single-pass parser over `git diff` style text that
//! yields one [`diff::FileChange`] per file, plus pure queries over the
//! resulting change logs. [`source`] and [`git`] obtain the diff text,
//! [`config`] holds process configuration, and [`embed`] is the client side
//! of the embedding service that consumes parsed changes.
//!
//! ```
//! use difflog::diff::{LineRange, compact_ranges, parse};
//!
//! let files = parse("diff --git a/f.txt b/f.txt\n@@ -1 +1,2 @@\n-a\n+b\n+c\n");
//! let ranges = compact_ranges(&files[0].line_changes);
//! assert_eq!(ranges.added, vec![LineRange::new(1, 2)]);
//! ```

pub mod config;
pub mod diff;
pub mod embed;
pub mod error;
pub mod exit_codes;
pub mod filter;
pub mod git;
pub mod source;

#[cfg(test)]
mod test_support;
