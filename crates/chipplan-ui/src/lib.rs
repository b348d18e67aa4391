//! ChipPlan user interface.
//!
//! A single GTK4 window: toolbar, partition canvas and status bar, all driven
//! by a shared [`chipplan_designer::DesignerState`].

pub mod gtk_app;
pub mod ui;

pub use chipplan_settings::{Config, SettingsManager};
