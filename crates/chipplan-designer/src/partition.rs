//! Partition shapes: the rectangles a user lays out on the canvas.
//!
//! A partition keeps its outline in shape-local coordinates plus a separate
//! translation offset accumulated by interactive dragging. Documents always
//! store absolute geometry, so [`PartitionShape::to_record`] folds the offset
//! into the outline and [`PartitionShape::from_record`] starts with a zero
//! offset.

use std::fmt;

use chipplan_core::constants::{LABEL_OFFSET_X, LABEL_OFFSET_Y};
use chipplan_core::{DocumentError, LoadPolicy, Units};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::{DesignerShape, Point, Rect, Shape, ShapeKind};
use crate::serialization::ShapeRecord;

/// Free-form user annotations attached to a partition.
pub type Properties = Map<String, Value>;

/// Opaque, document-unique partition identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(String);

impl ShapeId {
    /// Fresh random identifier (UUID v4).
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ShapeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ShapeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 8-bit RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Components scaled to 0.0..=1.0 as (r, g, b, a).
    pub fn to_unit(self) -> (f64, f64, f64, f64) {
        (
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
            self.a as f64 / 255.0,
        )
    }
}

/// How an outline is stroked and filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeStyle {
    pub stroke: Rgba,
    pub fill: Rgba,
    pub dashed: bool,
}

impl ShapeStyle {
    pub const UNLOCKED: ShapeStyle = ShapeStyle {
        stroke: Rgba::new(0, 0, 0, 255),
        fill: Rgba::new(200, 220, 255, 160),
        dashed: false,
    };

    pub const LOCKED: ShapeStyle = ShapeStyle {
        stroke: Rgba::new(255, 0, 0, 255),
        fill: Rgba::new(255, 200, 200, 160),
        dashed: true,
    };

    /// Transient rectangle shown while drawing.
    pub const PREVIEW: ShapeStyle = ShapeStyle {
        stroke: Rgba::new(0, 0, 255, 255),
        fill: Rgba::new(150, 150, 255, 60),
        dashed: true,
    };

    /// Rubber-band selection outline.
    pub const SELECTION_BAND: ShapeStyle = ShapeStyle {
        stroke: Rgba::new(48, 140, 198, 255),
        fill: Rgba::new(48, 140, 198, 40),
        dashed: false,
    };
}

/// Dimension label drawn next to a partition.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeLabel {
    pub text: String,
    /// Scene position of the label's baseline origin.
    pub anchor: Point,
}

/// Formats a size as `"{w} x {h}"`, rounding half to even.
pub fn dimension_text(width: f64, height: f64) -> String {
    format!(
        "{} x {}",
        width.round_ties_even() as i64,
        height.round_ties_even() as i64
    )
}

/// A partition region on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionShape {
    id: ShapeId,
    shape: Shape,
    offset: Point,
    locked: bool,
    pub units: Units,
    pub properties: Properties,
    pub selected: bool,
}

impl PartitionShape {
    /// Creates an unlocked rectangular partition with a fresh id.
    pub fn new(rect: Rect, units: Units) -> Self {
        Self::with_shape(Shape::from_bounds(ShapeKind::Rectangle, rect), units)
    }

    /// Creates an unlocked partition around an arbitrary outline.
    pub fn with_shape(shape: Shape, units: Units) -> Self {
        Self {
            id: ShapeId::generate(),
            shape,
            offset: Point::default(),
            locked: false,
            units,
            properties: Properties::new(),
            selected: false,
        }
    }

    pub fn with_id(mut self, id: impl Into<ShapeId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }

    pub fn id(&self) -> &ShapeId {
        &self.id
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    /// Translation applied on top of the shape-local outline.
    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Locked partitions refuse interactive moves.
    pub fn is_movable(&self) -> bool {
        !self.locked
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    pub fn style(&self) -> ShapeStyle {
        if self.locked {
            ShapeStyle::LOCKED
        } else {
            ShapeStyle::UNLOCKED
        }
    }

    /// Moves the partition to `new_offset` unless it is locked.
    ///
    /// Returns whether the move was applied.
    pub fn attempt_move(&mut self, new_offset: Point) -> bool {
        if self.locked {
            tracing::debug!("Rejected move of locked partition {}", self.id);
            return false;
        }
        self.offset = new_offset;
        true
    }

    /// Relative form of [`attempt_move`](Self::attempt_move).
    pub fn move_by(&mut self, dx: f64, dy: f64) -> bool {
        let target = self.offset.offset_by(dx, dy);
        self.attempt_move(target)
    }

    /// Outline bounds without the drag offset.
    pub fn local_bounds(&self) -> Rect {
        self.shape.bounds()
    }

    /// Outline bounds in scene coordinates.
    pub fn scene_bounds(&self) -> Rect {
        self.local_bounds().translated(self.offset.x, self.offset.y)
    }

    /// Hit test in scene coordinates.
    pub fn contains_point(&self, p: Point, tolerance: f64) -> bool {
        let local = p.offset_by(-self.offset.x, -self.offset.y);
        self.shape.contains_point(local, tolerance)
    }

    /// Dimension label for the current geometry.
    pub fn label(&self) -> ShapeLabel {
        let bounds = self.scene_bounds();
        ShapeLabel {
            text: dimension_text(bounds.width, bounds.height),
            anchor: bounds.top_right().offset_by(LABEL_OFFSET_X, LABEL_OFFSET_Y),
        }
    }

    /// Serializable record with absolute geometry.
    pub fn to_record(&self) -> ShapeRecord {
        let bounds = self.scene_bounds();
        ShapeRecord {
            id: Some(self.id.to_string()),
            kind: Some(self.kind().tag().to_string()),
            x: Some(bounds.x),
            y: Some(bounds.y),
            width: Some(bounds.width),
            height: Some(bounds.height),
            units: Some(self.units),
            locked: Some(self.locked),
            properties: Some(self.properties.clone()),
        }
    }

    /// Rebuilds a partition from a document record.
    ///
    /// `index` is the record's position, used in error messages.
    /// `document_units` is the unit assumed when the record carries none.
    pub fn from_record(
        record: &ShapeRecord,
        index: usize,
        policy: LoadPolicy,
        document_units: Option<Units>,
    ) -> Result<Self, DocumentError> {
        let missing = |field: &str| DocumentError::MissingField {
            index,
            field: field.to_string(),
        };

        let kind = match record.kind.as_deref() {
            Some(tag) => ShapeKind::from_tag(tag).ok_or_else(|| DocumentError::UnknownShapeType {
                index,
                kind: tag.to_string(),
            })?,
            None if policy.tolerant => ShapeKind::Rectangle,
            None => return Err(missing("type")),
        };

        let x = record.x.ok_or_else(|| missing("x"))?;
        let y = record.y.ok_or_else(|| missing("y"))?;
        let width = record.width.ok_or_else(|| missing("width"))?;
        let height = record.height.ok_or_else(|| missing("height"))?;

        for (field, value) in [("x", x), ("y", y), ("width", width), ("height", height)] {
            if !value.is_finite() {
                return Err(DocumentError::NonFiniteGeometry {
                    index,
                    field: field.to_string(),
                });
            }
        }
        let rect = Rect::new(x, y, width, height);
        if width < 0.0 || height < 0.0 {
            return Err(DocumentError::NegativeSize {
                index,
                width,
                height,
            });
        }

        let id = match &record.id {
            Some(id) => ShapeId::from(id.as_str()),
            None if policy.tolerant => ShapeId::generate(),
            None => return Err(missing("id")),
        };

        let units = match record.units {
            Some(units) => units,
            None if policy.tolerant => document_units.unwrap_or_default(),
            None => return Err(missing("units")),
        };

        let locked = match record.locked {
            Some(locked) => locked,
            None if policy.tolerant => false,
            None => return Err(missing("locked")),
        };

        let properties = match &record.properties {
            Some(properties) => properties.clone(),
            None if policy.tolerant => Properties::new(),
            None => return Err(missing("properties")),
        };

        Ok(Self::with_shape(Shape::from_bounds(kind, rect), units)
            .with_id(id)
            .with_locked(locked)
            .with_properties(properties))
    }
}
