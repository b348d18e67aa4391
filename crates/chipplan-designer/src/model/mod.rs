use lyon::path::Path;
use serde::{Deserialize, Serialize};

mod rectangle;

pub use rectangle::DesignRectangle;

use chipplan_core::constants::RECT_TYPE_TAG;

/// A point in scene coordinates (y grows downwards, like the screen).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset_by(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle spanning two corners in any order, with non-negative size.
    pub fn from_points(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }
    }

    /// Same area with negative width/height flipped onto the other side.
    pub fn normalized(&self) -> Self {
        Self::from_points(
            Point::new(self.x, self.y),
            Point::new(self.x + self.width, self.y + self.height),
        )
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.right(), self.top())
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    pub fn contains_point(&self, p: Point, tolerance: f64) -> bool {
        p.x >= self.left() - tolerance
            && p.x <= self.right() + tolerance
            && p.y >= self.top() - tolerance
            && p.y <= self.bottom() + tolerance
    }

    /// True when the two rectangles overlap or touch.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && other.left() <= self.right()
            && self.top() <= other.bottom()
            && other.top() <= self.bottom()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }
}

/// Capabilities every partition outline provides, regardless of its geometry.
pub trait DesignerShape {
    /// Outline as a vector path in shape-local coordinates.
    fn render(&self) -> Path;
    /// Axis-aligned bounds in shape-local coordinates.
    fn bounds(&self) -> Rect;
    fn contains_point(&self, p: Point, tolerance: f64) -> bool;
    fn translate(&mut self, dx: f64, dy: f64);
    fn kind(&self) -> ShapeKind;
}

/// Tag identifying a shape variant in documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    #[serde(rename = "rect")]
    Rectangle,
}

impl ShapeKind {
    pub fn tag(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => RECT_TYPE_TAG,
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            RECT_TYPE_TAG => Some(ShapeKind::Rectangle),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rectangle(DesignRectangle),
}

impl DesignerShape for Shape {
    fn render(&self) -> Path {
        match self {
            Shape::Rectangle(s) => s.render(),
        }
    }

    fn bounds(&self) -> Rect {
        match self {
            Shape::Rectangle(s) => s.bounds(),
        }
    }

    fn contains_point(&self, p: Point, tolerance: f64) -> bool {
        match self {
            Shape::Rectangle(s) => s.contains_point(p, tolerance),
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Shape::Rectangle(s) => s.translate(dx, dy),
        }
    }

    fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rectangle(s) => s.kind(),
        }
    }
}

impl Shape {
    /// Builds the variant named by `kind` from a bounding rectangle.
    pub fn from_bounds(kind: ShapeKind, rect: Rect) -> Self {
        match kind {
            ShapeKind::Rectangle => Shape::Rectangle(DesignRectangle::from_rect(rect)),
        }
    }
}
