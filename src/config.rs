use crate::mcp::contracts::DEFAULT_KEYWORD_LIMIT;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Server settings, read from an optional TOML file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Default tracing directive; `RUST_LOG` still wins when set.
    pub log_filter: String,
    /// `extract_keywords` limit when the caller omits one.
    pub default_keyword_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            default_keyword_limit: DEFAULT_KEYWORD_LIMIT,
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn defaults_without_file() {
        let config = Config::load(None).expect("config");
        assert_eq!(config, Config::default());
        assert_eq!(config.default_keyword_limit, 5);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = Config::parse("log_filter = \"warn\"\n").expect("config");
        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.default_keyword_limit, 5);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(Config::parse("keyword_limt = 3\n").is_err());
        // analyze_document always reports five keywords
        assert!(Config::parse("analysis_keyword_limit = 3\n").is_err());
    }

    #[test]
    fn load_from_path() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("analyzer.toml");
        fs::write(&path, "log_filter = \"debug\"\ndefault_keyword_limit = 10\n").expect("write");
        let config = Config::load(Some(&path)).expect("config");
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.default_keyword_limit, 10);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempdir().expect("tempdir");
        let err = Config::load(Some(&dir.path().join("missing.toml"))).expect_err("error");
        assert!(err.to_string().contains("failed to read config"));
    }
}
