//! TOML configuration file support for the CLI.
//!
//! Settings here only ever tune how the CLI drives the writer/reader
//! (worker pool size, flush cadence); they never change what bytes end up
//! on disk.
//!
//! ```toml
//! # saw.toml
//! [writer]
//! worker_pool_size = 4
//! flush_interval = 5000
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use sawtable::WriterConfig;

/// Root configuration structure for saw.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Writer-specific settings.
    #[serde(default)]
    pub writer: WriterSettings,
}

/// Configuration for the writer.
#[derive(Debug, Default, Deserialize)]
pub struct WriterSettings {
    /// Upper bound on columns encoded concurrently.
    pub worker_pool_size: Option<usize>,

    /// Elements written before flushing the frame codec.
    pub flush_interval: Option<usize>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("failed to parse TOML configuration")
    }

    /// Applies this config's writer settings on top of the defaults.
    pub fn writer_config(&self) -> WriterConfig {
        let mut config = WriterConfig::default();
        if let Some(n) = self.writer.worker_pool_size {
            config.worker_pool_size = n;
        }
        if let Some(n) = self.writer.flush_interval {
            config.flush_interval = n;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [writer]
            worker_pool_size = 4
            flush_interval = 5000
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.writer.worker_pool_size, Some(4));
        assert_eq!(config.writer.flush_interval, Some(5000));
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [writer]
            worker_pool_size = 2
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.writer.worker_pool_size, Some(2));
        assert_eq!(config.writer.flush_interval, None);
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.writer.worker_pool_size, None);
        let writer_config = config.writer_config();
        assert_eq!(writer_config.worker_pool_size, WriterConfig::default().worker_pool_size);
    }
}
