//! Editor policies that shape interactive creation and document loading.
//!
//! Both policies are plain serde structs so the settings crate can embed them
//! in the configuration file.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Rules applied while drawing and zooming on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawPolicy {
    /// A drawn rectangle is kept only if both sides exceed this size
    pub min_size: f64,
    /// Scale multiplier for a wheel notch forward
    pub zoom_in_factor: f64,
    /// Scale multiplier for a wheel notch backward
    pub zoom_out_factor: f64,
}

impl Default for DrawPolicy {
    fn default() -> Self {
        Self {
            min_size: constants::MIN_DRAWN_SIZE,
            zoom_in_factor: constants::ZOOM_IN_FACTOR,
            zoom_out_factor: constants::ZOOM_OUT_FACTOR,
        }
    }
}

impl DrawPolicy {
    /// Whether a drawn rectangle of this size should become a partition.
    pub fn accepts(&self, width: f64, height: f64) -> bool {
        width > self.min_size && height > self.min_size
    }
}

/// Rules applied when turning a document into partitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadPolicy {
    /// Fill in missing id, units, locked, properties and type with defaults.
    /// When false those fields are required.
    pub tolerant: bool,
}

impl Default for LoadPolicy {
    fn default() -> Self {
        Self { tolerant: true }
    }
}

impl LoadPolicy {
    /// Policy that requires every field to be present.
    pub fn strict() -> Self {
        Self { tolerant: false }
    }
}
