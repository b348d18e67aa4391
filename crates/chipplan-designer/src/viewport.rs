//! Viewport and coordinate transformation for canvas rendering.
//!
//! Handles conversion between pixel coordinates (screen space) and scene
//! coordinates (design space). Both spaces grow downwards on Y, so the mapping
//! is a plain scale plus translation.

use std::fmt;

use crate::model::Point;

/// Represents the viewport transformation state (zoom and pan).
#[derive(Debug, Clone)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
}

impl Viewport {
    /// Creates a new viewport with the scene origin at the top-left corner.
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level. Any positive finite value is accepted.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() && zoom > 0.0 {
            self.zoom = zoom;
        }
    }

    /// Gets the pan offset (X coordinate, pixels).
    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    /// Gets the pan offset (Y coordinate, pixels).
    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    /// Pans by a pixel delta; content follows the pointer.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Converts pixel coordinates to scene coordinates.
    ///
    /// Formula:
    /// ```text
    /// scene_x = (pixel_x - pan_x) / zoom
    /// scene_y = (pixel_y - pan_y) / zoom
    /// ```
    pub fn pixel_to_world(&self, pixel_x: f64, pixel_y: f64) -> Point {
        Point::new(
            (pixel_x - self.pan_x) / self.zoom,
            (pixel_y - self.pan_y) / self.zoom,
        )
    }

    /// Converts scene coordinates to pixel coordinates.
    pub fn world_to_pixel(&self, world_x: f64, world_y: f64) -> (f64, f64) {
        (
            world_x * self.zoom + self.pan_x,
            world_y * self.zoom + self.pan_y,
        )
    }

    /// Converts scene coordinates to pixel coordinates (using Point).
    pub fn world_point_to_pixel(&self, point: &Point) -> (f64, f64) {
        self.world_to_pixel(point.x, point.y)
    }

    /// Multiplies the zoom by `factor`, keeping the scene point under
    /// (`pixel_x`, `pixel_y`) fixed on screen.
    pub fn zoom_about(&mut self, pixel_x: f64, pixel_y: f64, factor: f64) {
        let new_zoom = self.zoom * factor;
        if !new_zoom.is_finite() || new_zoom <= 0.0 {
            return;
        }

        let anchor = self.pixel_to_world(pixel_x, pixel_y);
        self.zoom = new_zoom;
        self.pan_x = pixel_x - anchor.x * new_zoom;
        self.pan_y = pixel_y - anchor.y * new_zoom;
    }

    /// Resets viewport to default state (1:1 zoom, no pan).
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan_x, self.pan_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}
