//! Layout and rendering constants.

/// Minimum width and height (exclusive) for an interactively drawn partition.
pub const MIN_DRAWN_SIZE: f64 = 1.0;

/// View scale multiplier for one wheel notch forward (away from the user).
pub const ZOOM_IN_FACTOR: f64 = 1.25;

/// View scale multiplier for one wheel notch backward (towards the user).
pub const ZOOM_OUT_FACTOR: f64 = 1.0 / ZOOM_IN_FACTOR;

/// Horizontal distance between a partition's right edge and its label.
pub const LABEL_OFFSET_X: f64 = 5.0;

/// Vertical distance between a partition's top edge and its label.
pub const LABEL_OFFSET_Y: f64 = -5.0;

/// Label font size in screen pixels; unaffected by zoom.
pub const LABEL_FONT_SIZE: f64 = 12.0;

/// Hit-test tolerance in screen pixels.
pub const HIT_TOLERANCE_PX: f64 = 3.0;

/// Shape kind tag written for rectangles in the document format.
pub const RECT_TYPE_TAG: &str = "rect";
