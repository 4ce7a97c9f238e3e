//! Configuration for the embedding service client.
//!
//! Values come from the `embedder` section of the difflog config file, then
//! environment overrides are applied once at startup:
//!
//! - `DIFFLOG_EMBED_HOST` - service host (default `localhost`)
//! - `DIFFLOG_EMBED_PORT` - service port (default `50051`)
//! - `DIFFLOG_EMBED_TIMEOUT` - per-call timeout in seconds (default `5`)
//! - `DIFFLOG_EMBED_MAX_WORKERS` - concurrent calls for batches (default `1`)

use crate::error::{DiffLogError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

pub const ENV_HOST: &str = "DIFFLOG_EMBED_HOST";
pub const ENV_PORT: &str = "DIFFLOG_EMBED_PORT";
pub const ENV_TIMEOUT: &str = "DIFFLOG_EMBED_TIMEOUT";
pub const ENV_MAX_WORKERS: &str = "DIFFLOG_EMBED_MAX_WORKERS";

/// Connection settings for the embedding service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedderConfig {
    /// Service host name.
    pub host: String,

    /// Service port.
    pub port: u16,

    /// Per-call timeout in seconds.
    pub timeout_seconds: u64,

    /// Maximum number of concurrent calls in a batch.
    pub max_workers: usize,
}

impl Default for EmbedderConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 50051,
            timeout_seconds: 5,
            max_workers: 1,
        }
    }
}

impl EmbedderConfig {
    /// `host:port` address of the service.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Per-call timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// Empty values are ignored. A numeric value that does not parse keeps
    /// the current setting and logs a warning.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(host) = get(ENV_HOST) {
            self.host = host.trim().to_string();
        }
        if let Some(value) = get(ENV_PORT) {
            override_number(&mut self.port, ENV_PORT, &value);
        }
        if let Some(value) = get(ENV_TIMEOUT) {
            override_number(&mut self.timeout_seconds, ENV_TIMEOUT, &value);
        }
        if let Some(value) = get(ENV_MAX_WORKERS) {
            override_number(&mut self.max_workers, ENV_MAX_WORKERS, &value);
        }

        self
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `host` must be non-empty
    /// - `port`, `timeout_seconds` and `max_workers` must be positive
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(DiffLogError::UserError(
                "config validation failed: embedder.host must be non-empty".to_string(),
            ));
        }

        let positive = [
            ("embedder.port", u64::from(self.port)),
            ("embedder.timeout_seconds", self.timeout_seconds),
            ("embedder.max_workers", self.max_workers as u64),
        ];
        for (name, value) in positive {
            if value == 0 {
                return Err(DiffLogError::UserError(format!(
                    "config validation failed: {} must be greater than 0",
                    name
                )));
            }
        }

        Ok(())
    }
}

fn override_number<T: FromStr>(target: &mut T, key: &str, value: &str) {
    match value.trim().parse() {
        Ok(parsed) => *target = parsed,
        Err(_) => {
            tracing::warn!(key, value, "ignoring non-numeric environment override");
        }
    }
}
