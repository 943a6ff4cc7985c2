//! Configuration file I/O operations

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::Config;

/// Environment variable overriding the global directory
pub const HOME_ENV: &str = "SHORTS_HOME";

impl Config {
    /// Get the global directory path ($SHORTS_HOME, else ~/.shorts/)
    ///
    /// This directory holds both the config file and the global store.
    pub fn global_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return PathBuf::from(dir);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".shorts")
    }

    /// Get the config file path inside a global directory
    pub fn config_path(global_dir: &Path) -> PathBuf {
        global_dir.join("config.toml")
    }

    /// Load configuration from a file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .settings
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from `<global_dir>/config.toml`.
    ///
    /// A missing file means defaults. Nothing is written: the config file is
    /// only ever created by the user.
    pub fn load_from(global_dir: &Path) -> Result<Self> {
        let path = Self::config_path(global_dir);
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::from_file(&path)
    }

    /// Load configuration from the global directory
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::global_dir())
    }
}
