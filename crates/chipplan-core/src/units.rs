//! Unit systems for partition geometry.
//!
//! Every partition stores the unit its coordinates were entered in. Values are
//! never converted between systems; the unit is a label that travels with the
//! geometry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Measurement unit attached to partition geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Units {
    /// Micrometers ("um")
    #[serde(rename = "um")]
    Micrometers,
    /// Millimeters ("mm")
    #[serde(rename = "mm")]
    Millimeters,
    /// Screen pixels ("px")
    #[serde(rename = "px")]
    Pixels,
}

impl Units {
    /// All selectable units, in toolbar order.
    pub const ALL: [Units; 3] = [Units::Micrometers, Units::Millimeters, Units::Pixels];

    /// Short label used in documents and the units selector.
    pub fn label(self) -> &'static str {
        match self {
            Self::Micrometers => "um",
            Self::Millimeters => "mm",
            Self::Pixels => "px",
        }
    }

    /// Position of this unit in [`Units::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Micrometers => 0,
            Self::Millimeters => 1,
            Self::Pixels => 2,
        }
    }

    /// Unit at `index` in [`Units::ALL`], if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl Default for Units {
    fn default() -> Self {
        Self::Micrometers
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
