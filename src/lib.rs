//! # ChipPlan
//!
//! An interactive editor for laying out rectangular partition regions of a
//! chip floorplan. Partitions are drawn with the mouse or entered by
//! coordinates, can be locked against movement, and are saved to and loaded
//! from JSON layout files.
//!
//! ## Architecture
//!
//! ChipPlan is organized as a workspace with multiple crates:
//!
//! 1. **chipplan-core** - Units, errors, editing policies and shared constants
//! 2. **chipplan-designer** - Partition model, canvas interaction, layout persistence
//! 3. **chipplan-settings** - User configuration and its file format
//! 4. **chipplan-ui** - GTK4 window, canvas widget and dialogs
//! 5. **chipplan** - Main binary that integrates all crates

pub use chipplan_designer as designer;
pub use chipplan_ui::ui;

pub use chipplan_core::{DocumentError, DrawPolicy, Error, LoadPolicy, Result, Units};

pub use chipplan_designer::{
    Canvas, CanvasEvent, DesignFile, DesignerState, InputOutcome, PartitionShape, Point, Rect,
    ShapeId, ShapeRecord, Viewport,
};

pub use chipplan_settings::{Config, EditorSettings, SettingsManager, UiSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    // In Windows GUI mode (release builds), log to a file instead of stdout
    #[cfg(all(target_os = "windows", not(debug_assertions)))]
    {
        use std::fs::OpenOptions;

        let log_dir = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| std::path::PathBuf::from("."));

        let log_file = log_dir.join("chipplan.log");

        match OpenOptions::new().create(true).append(true).open(&log_file) {
            Ok(file) => {
                let fmt_layer = fmt::layer()
                    .with_writer(file)
                    .with_target(true)
                    .with_level(true)
                    .with_line_number(true)
                    .with_ansi(false);

                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt_layer)
                    .init();
            }
            Err(_) => {
                tracing_subscriber::registry().with(env_filter).init();
            }
        }
    }

    #[cfg(not(all(target_os = "windows", not(debug_assertions))))]
    {
        // CHIPPLAN_LOG_JSON switches to one JSON object per line.
        if std::env::var_os("CHIPPLAN_LOG_JSON").is_some() {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stdout))
                .init();
        } else {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(true)
                .with_level(true)
                .with_thread_ids(true)
                .with_thread_names(true)
                .with_line_number(true)
                .pretty();

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .init();
        }
    }

    Ok(())
}
