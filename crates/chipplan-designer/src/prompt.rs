//! Numeric input requested from the user when adding a partition by coordinates.

use std::fmt;

use chipplan_core::Units;

/// One value asked for by "Add by Coords", in prompt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateField {
    X,
    Y,
    Width,
    Height,
}

impl CoordinateField {
    pub const ALL: [CoordinateField; 4] = [
        CoordinateField::X,
        CoordinateField::Y,
        CoordinateField::Width,
        CoordinateField::Height,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CoordinateField::X => "x",
            CoordinateField::Y => "y",
            CoordinateField::Width => "width",
            CoordinateField::Height => "height",
        }
    }

    /// Prompt text including the unit, e.g. `"width (mm):"`.
    pub fn prompt(self, units: Units) -> String {
        format!("{} ({}):", self.label(), units)
    }
}

impl fmt::Display for CoordinateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Source of numeric values; `None` means the user cancelled.
pub trait CoordinatePrompt {
    fn request(&mut self, field: CoordinateField, units: Units) -> Option<f64>;
}

impl<F> CoordinatePrompt for F
where
    F: FnMut(CoordinateField, Units) -> Option<f64>,
{
    fn request(&mut self, field: CoordinateField, units: Units) -> Option<f64> {
        self(field, units)
    }
}
