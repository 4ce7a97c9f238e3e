//! Tests for config functionality.

use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::embed::{ENV_HOST, ENV_TIMEOUT, EmbedderConfig};
use serial_test::serial;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert!(config.include.is_empty());
    assert_eq!(config.embedder, EmbedderConfig::default());
    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();

    assert!(config.include.is_empty());
    assert_eq!(config.embedder.port, 50051);
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
embedder:
  host: embed.internal
  timeout_seconds: 10
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.embedder.host, "embed.internal");
    assert_eq!(config.embedder.timeout_seconds, 10);

    // Unspecified values should use defaults
    assert_eq!(config.embedder.port, 50051);
    assert_eq!(config.embedder.max_workers, 1);
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
include:
  - "*.json"
  - "src/**"
embedder:
  host: 10.0.0.5
  port: 6000
  timeout_seconds: 2
  max_workers: 8
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.include, vec!["*.json", "src/**"]);
    assert_eq!(config.embedder.address(), "10.0.0.5:6000");
    assert_eq!(config.embedder.timeout_seconds, 2);
    assert_eq!(config.embedder.max_workers, 8);
}

#[test]
fn test_parse_yaml_with_unknown_fields() {
    let yaml = r#"
include: ["*.rs"]
future_feature_x: enabled
another_unknown:
  nested: true
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.include, vec!["*.rs"]);
    assert!(config.extra.contains_key("future_feature_x"));
}

#[test]
fn test_invalid_yaml_is_user_error() {
    let err = Config::from_yaml("include: [unclosed").unwrap_err();
    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_validate_rejects_bad_glob() {
    let err = Config::from_yaml("include: [\"[\"]").unwrap_err();
    assert!(err.to_string().contains("config validation failed: include"));
}

#[test]
fn test_embedder_values_are_not_checked_at_load() {
    let config = Config::from_yaml("embedder:\n  timeout_seconds: 0\n").unwrap();
    assert_eq!(config.embedder.timeout_seconds, 0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_yaml_round_trip_keeps_values() {
    let mut config = Config::default();
    config.include = vec!["*.md".to_string()];
    config.embedder.port = 7000;

    let reparsed = Config::from_yaml(&config.to_yaml().unwrap()).unwrap();

    assert_eq!(reparsed.include, config.include);
    assert_eq!(reparsed.embedder, config.embedder);
}

#[test]
fn test_include_filter_prefers_cli_globs() {
    let config = Config::from_yaml("include: [\"*.json\"]").unwrap();

    let from_config = config.include_filter(&[]).unwrap();
    assert!(from_config.is_match("a.json"));
    assert!(!from_config.is_match("a.rs"));

    let from_cli = config.include_filter(&["*.rs".to_string()]).unwrap();
    assert!(from_cli.is_match("a.rs"));
    assert!(!from_cli.is_match("a.json"));
}

#[test]
#[serial]
fn test_resolve_reads_default_file_and_env_overrides() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(DEFAULT_CONFIG_FILE),
        "embedder:\n  host: from-file\n  timeout_seconds: 9\n",
    )
    .unwrap();

    // SAFETY: serialized with other tests touching these variables
    unsafe {
        std::env::set_var(ENV_TIMEOUT, "12");
        std::env::remove_var(ENV_HOST);
    }
    let config = Config::resolve(None, dir.path());
    unsafe {
        std::env::remove_var(ENV_TIMEOUT);
    }

    let config = config.unwrap();
    assert_eq!(config.embedder.host, "from-file");
    assert_eq!(config.embedder.timeout_seconds, 12);
}

#[test]
#[serial]
fn test_resolve_accepts_zero_embed_timeout_from_env() {
    let dir = TempDir::new().unwrap();

    // SAFETY: serialized with other tests touching these variables
    unsafe {
        std::env::set_var(ENV_TIMEOUT, "0");
    }
    let config = Config::resolve(None, dir.path());
    unsafe {
        std::env::remove_var(ENV_TIMEOUT);
    }

    // Diff commands never build an embedding client, so this must not fail
    let config = config.unwrap();
    assert_eq!(config.embedder.timeout_seconds, 0);
    assert!(config.embedder.validate().is_err());
}

#[test]
#[serial]
fn test_resolve_without_file_uses_defaults() {
    let dir = TempDir::new().unwrap();

    let config = Config::resolve(None, dir.path()).unwrap();

    assert!(config.include.is_empty());
    assert_eq!(config.embedder.host, "localhost");
}

#[test]
fn test_resolve_missing_explicit_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.yaml");

    let err = Config::resolve(Some(&missing), dir.path()).unwrap_err();

    assert!(err.to_string().contains("failed to read config file"));
}
