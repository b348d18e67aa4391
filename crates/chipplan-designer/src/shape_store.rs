use chipplan_core::{DocumentError, Result};

use crate::model::{Point, Rect};
use crate::partition::{PartitionShape, ShapeId};

/// Ordered partition storage.
///
/// Vector order is draw order: later entries are drawn on top and win hit
/// tests. Ids are unique within a store.
#[derive(Debug, Clone, Default)]
pub struct ShapeStore {
    shapes: Vec<PartitionShape>,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn contains(&self, id: &ShapeId) -> bool {
        self.shapes.iter().any(|s| s.id() == id)
    }

    /// Appends a partition on top of the stack.
    pub fn insert(&mut self, shape: PartitionShape) -> Result<ShapeId> {
        if self.contains(shape.id()) {
            return Err(DocumentError::DuplicateId {
                id: shape.id().to_string(),
            }
            .into());
        }
        let id = shape.id().clone();
        self.shapes.push(shape);
        Ok(id)
    }

    pub fn get(&self, id: &ShapeId) -> Option<&PartitionShape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    pub fn get_mut(&mut self, id: &ShapeId) -> Option<&mut PartitionShape> {
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    /// Removes every partition matching `predicate`, returning how many went.
    pub fn remove_where(&mut self, mut predicate: impl FnMut(&PartitionShape) -> bool) -> usize {
        let before = self.shapes.len();
        self.shapes.retain(|s| !predicate(s));
        before - self.shapes.len()
    }

    /// Replaces the whole contents. The caller guarantees unique ids.
    pub fn replace_all(&mut self, shapes: Vec<PartitionShape>) {
        self.shapes = shapes;
    }

    /// Iterates bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &PartitionShape> {
        self.shapes.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PartitionShape> {
        self.shapes.iter_mut()
    }

    /// Topmost partition under `point`.
    pub fn topmost_at(&self, point: Point, tolerance: f64) -> Option<&PartitionShape> {
        self.shapes
            .iter()
            .rev()
            .find(|s| s.contains_point(point, tolerance))
    }

    /// Ids of partitions whose scene bounds touch `area`, bottom to top.
    pub fn ids_intersecting(&self, area: &Rect) -> Vec<ShapeId> {
        self.shapes
            .iter()
            .filter(|s| s.scene_bounds().intersects(area))
            .map(|s| s.id().clone())
            .collect()
    }
}
