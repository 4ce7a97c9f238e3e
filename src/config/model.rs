//! Config struct definition.

use crate::embed::EmbedderConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Config file looked up in the current directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = ".difflog.yaml";

/// Configuration for difflog.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default include globs for reports; `--include` replaces them.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,

    /// Embedding service connection settings.
    pub embedder: EmbedderConfig,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}
