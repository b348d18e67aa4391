//! Configuration and settings management for ChipPlan
//!
//! Provides configuration file handling, settings management, and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Editor settings (starting unit, drawing and loading policies)
//! - UI preferences (window size, label font)
//! - Recent files

use std::path::{Path, PathBuf};

use chipplan_core::{DrawPolicy, LoadPolicy, Units};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SettingsError};

/// Editing behaviour
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Unit selected when the application starts
    pub default_units: Units,
    /// Drawing threshold and zoom steps
    pub draw: DrawPolicy,
    /// How forgiving document loading is
    pub load: LoadPolicy,
}

/// UI preference settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Window width
    pub window_width: u32,
    /// Window height
    pub window_height: u32,
    /// Dimension label size in screen pixels
    pub label_font_size: f64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            window_width: 1000,
            window_height: 700,
            label_font_size: chipplan_core::constants::LABEL_FONT_SIZE,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Recent files list, most recent first
    pub recent_files: Vec<PathBuf>,
    /// Maximum length of the recent files list
    pub recent_files_count: usize,
    /// Editor settings
    pub editor: EditorSettings,
    /// UI preferences
    pub ui: UiSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recent_files: Vec::new(),
            recent_files_count: 10,
            editor: EditorSettings::default(),
            ui: UiSettings::default(),
        }
    }
}

#[derive(Clone, Copy)]
enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> Result<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        _ => Err(SettingsError::UnsupportedFormat(format!(
            "{} (config file must be .json or .toml)",
            path.display()
        ))),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let draw = &self.editor.draw;
        if !draw.min_size.is_finite() || draw.min_size < 0.0 {
            return Err(SettingsError::invalid(
                "editor.draw.min_size",
                "must be a non-negative number",
            ));
        }
        if !draw.zoom_in_factor.is_finite() || draw.zoom_in_factor <= 1.0 {
            return Err(SettingsError::invalid(
                "editor.draw.zoom_in_factor",
                "must be greater than 1",
            ));
        }
        if !draw.zoom_out_factor.is_finite()
            || draw.zoom_out_factor <= 0.0
            || draw.zoom_out_factor >= 1.0
        {
            return Err(SettingsError::invalid(
                "editor.draw.zoom_out_factor",
                "must be between 0 and 1",
            ));
        }

        if self.ui.window_width == 0 || self.ui.window_height == 0 {
            return Err(SettingsError::invalid("ui.window", "dimensions must be > 0"));
        }
        if !self.ui.label_font_size.is_finite() || self.ui.label_font_size <= 0.0 {
            return Err(SettingsError::invalid("ui.label_font_size", "must be > 0"));
        }

        if self.recent_files_count == 0 {
            return Err(SettingsError::invalid("recent_files_count", "must be > 0"));
        }

        Ok(())
    }

    /// Add file to recent files list
    pub fn add_recent_file(&mut self, path: PathBuf) {
        self.recent_files.retain(|f| f != &path);
        self.recent_files.insert(0, path);
        self.recent_files.truncate(self.recent_files_count);
    }
}
