//! Configuration model for difflog.
//!
//! This module defines the Config struct that represents `.difflog.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! defaults for every field, validation, and environment overrides for the
//! embedding service settings.

mod model;
mod operations;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::{Config, DEFAULT_CONFIG_FILE};
