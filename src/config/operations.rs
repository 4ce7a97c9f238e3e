//! Config loading, validation, and utility operations.

use super::model::{Config, DEFAULT_CONFIG_FILE};
use crate::error::{DiffLogError, Result};
use crate::filter::FileFilter;
use std::path::Path;

impl Config {
    /// Load config from a YAML file and apply environment overrides.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the config file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(DiffLogError::UserError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            DiffLogError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut config = Self::from_yaml(&content)?;
        config.embedder = config.embedder.with_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Resolve the config for this process.
    ///
    /// An explicit path must exist. Without one, `.difflog.yaml` in `cwd` is
    /// used when present, otherwise defaults. Environment overrides apply
    /// in every case.
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let default_path = cwd.join(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            return Self::load(default_path);
        }

        let mut config = Self::default();
        config.embedder = config.embedder.with_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| DiffLogError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            DiffLogError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Only `include` is checked here: every entry must be a valid glob.
    /// The `embedder` section is validated when an
    /// [`EmbeddingClient`](crate::embed::EmbeddingClient) is built from it.
    pub fn validate(&self) -> Result<()> {
        FileFilter::new(&self.include).map_err(|e| {
            DiffLogError::UserError(format!("config validation failed: include: {}", e))
        })?;
        Ok(())
    }

    /// Build the include filter, preferring command-line globs over config.
    pub fn include_filter(&self, cli_globs: &[String]) -> Result<FileFilter> {
        if cli_globs.is_empty() {
            FileFilter::new(&self.include)
        } else {
            FileFilter::new(cli_globs)
        }
    }
}
