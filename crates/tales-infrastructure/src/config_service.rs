//! Configuration service implementation.
//!
//! Loads the root configuration from `config.toml`
//! (`~/.config/tales/config.toml` unless overridden).

use std::path::PathBuf;

use tales_core::config::RootConfig;
use tales_core::error::{Result, TalesError};

use crate::paths::TalesPaths;

/// Loads [`RootConfig`] from a TOML file.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Uses the platform config file location.
    pub fn new() -> Result<Self> {
        let path = TalesPaths::config_file().map_err(|e| TalesError::config(e.to_string()))?;
        Ok(Self { path })
    }

    /// Uses an explicit config file, e.g. from `--config`.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the configuration.
    ///
    /// A missing file yields the defaults. A file that exists but does not
    /// parse, or has unusable font bounds, is a configuration error.
    pub fn load(&self) -> Result<RootConfig> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "No config file, using defaults");
            return Ok(RootConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let config: RootConfig = toml::from_str(&content).map_err(|e| {
            TalesError::config(format!("Invalid {}: {}", self.path.display(), e))
        })?;
        config.reader.validate()?;
        Ok(config)
    }
}
