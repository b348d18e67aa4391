//! ChipPlan Settings Crate
//!
//! Handles application configuration and settings persistence.

pub mod config;
pub mod error;
pub mod manager;

pub use config::{Config, EditorSettings, UiSettings};
pub use error::{Result, SettingsError};
pub use manager::SettingsManager;
