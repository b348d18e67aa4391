//! Location and lifecycle of the configuration file.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Result, SettingsError};

const APP_DIR: &str = "chipplan";
const CONFIG_FILE: &str = "config.toml";

/// Finds, loads and stores the user's configuration.
pub struct SettingsManager;

impl SettingsManager {
    /// Platform configuration directory for ChipPlan.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no configuration directory on this platform".into())
            })
    }

    /// Full path of the configuration file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Creates the configuration directory if needed.
    pub fn ensure_config_dir() -> Result<PathBuf> {
        let dir = Self::config_dir()?;
        std::fs::create_dir_all(&dir).map_err(|e| {
            SettingsError::ConfigDirectory(format!("{}: {}", dir.display(), e))
        })?;
        Ok(dir)
    }

    /// Loads `path`, falling back to defaults when it is missing or invalid.
    pub fn load_or_default(path: &Path) -> Config {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Config::default();
        }

        match Config::load_from_file(path) {
            Ok(config) => {
                tracing::info!("Loaded settings from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load settings from {}: {}", path.display(), e);
                Config::default()
            }
        }
    }

    /// Loads the user's configuration from the standard location.
    pub fn load() -> Config {
        match Self::config_file_path() {
            Ok(path) => Self::load_or_default(&path),
            Err(e) => {
                tracing::warn!("{}", e);
                Config::default()
            }
        }
    }

    /// Saves the configuration to the standard location.
    pub fn save(config: &Config) -> Result<PathBuf> {
        let path = Self::ensure_config_dir()?.join(CONFIG_FILE);
        config.save_to_file(&path)?;
        Ok(path)
    }
}
