//! Unified path management for tales configuration and data files.
//!
//! This ensures consistency across all platforms (Linux, macOS, Windows).

use std::path::PathBuf;

const APP_DIR: &str = "tales";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config/data directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for tales.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/tales/             # Config directory
/// └── config.toml              # Application configuration
///
/// ~/.local/share/tales/        # Data directory
/// └── store.json               # Persisted key-value store (bookmarks, theme)
/// ```
pub struct TalesPaths;

impl TalesPaths {
    /// Returns the tales configuration directory (e.g., `~/.config/tales/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the tales data directory (e.g., `~/.local/share/tales/`).
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the persisted key-value store.
    pub fn store_file() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("store.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file() {
        let config_file = TalesPaths::config_file().unwrap();
        assert!(config_file.ends_with("tales/config.toml"));
        let config_dir = TalesPaths::config_dir().unwrap();
        assert!(config_file.starts_with(&config_dir));
    }

    #[test]
    fn test_store_file() {
        let store_file = TalesPaths::store_file().unwrap();
        assert!(store_file.ends_with("store.json"));
        let data_dir = TalesPaths::data_dir().unwrap();
        assert!(store_file.starts_with(&data_dir));
        assert!(data_dir.ends_with("tales"));
    }
}
