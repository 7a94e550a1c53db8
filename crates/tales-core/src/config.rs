//! Configuration models loaded from `config.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TalesError};
use crate::locale::Locale;

/// Root of `config.toml`. Every field is optional in the file.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RootConfig {
    /// Path of the JSON story catalog.
    pub catalog_path: PathBuf,
    pub locale: Locale,
    pub reader: ReaderConfig,
    pub log: LogConfig,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("stories.json"),
            locale: Locale::default(),
            reader: ReaderConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// Font-size bounds enforced by the UI layer, in pixels.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ReaderConfig {
    pub font_size_min: f32,
    pub font_size_max: f32,
    pub font_size_default: f32,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            font_size_min: 14.0,
            font_size_max: 28.0,
            font_size_default: 18.0,
        }
    }
}

impl ReaderConfig {
    /// Checks that the bounds are finite and ordered.
    pub fn validate(&self) -> Result<()> {
        let values = [
            self.font_size_min,
            self.font_size_max,
            self.font_size_default,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(TalesError::config("reader font sizes must be finite"));
        }
        if self.font_size_min > self.font_size_max {
            return Err(TalesError::config(format!(
                "reader.font_size_min ({}) exceeds reader.font_size_max ({})",
                self.font_size_min, self.font_size_max
            )));
        }
        Ok(())
    }

    /// Clamps a requested size into the configured bounds.
    ///
    /// Bounds must have passed [`ReaderConfig::validate`].
    pub fn clamp_font_size(&self, px: f32) -> f32 {
        px.clamp(self.font_size_min, self.font_size_max)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    /// Default `tracing` filter directive; `RUST_LOG` takes precedence.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
