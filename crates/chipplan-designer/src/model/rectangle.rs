use lyon::math::{point, Box2D};
use lyon::path::{Path, Winding};
use serde::{Deserialize, Serialize};

use super::{DesignerShape, Point, Rect, ShapeKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignRectangle {
    pub rect: Rect,
}

impl DesignRectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
        }
    }

    pub fn from_rect(rect: Rect) -> Self {
        Self { rect }
    }
}

impl DesignerShape for DesignRectangle {
    fn render(&self) -> Path {
        let mut builder = Path::builder();
        builder.add_rectangle(
            &Box2D::new(
                point(self.rect.left() as f32, self.rect.top() as f32),
                point(self.rect.right() as f32, self.rect.bottom() as f32),
            ),
            Winding::Positive,
        );
        builder.build()
    }

    fn bounds(&self) -> Rect {
        self.rect
    }

    fn contains_point(&self, p: Point, tolerance: f64) -> bool {
        self.rect.contains_point(p, tolerance)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.rect = self.rect.translated(dx, dy);
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }
}
