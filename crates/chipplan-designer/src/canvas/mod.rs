//! Canvas: the partition scene together with its view and pointer state.

mod input;
pub mod types;

pub use types::{
    CanvasEvent, DragMode, InputContext, InputOutcome, InputState, Modifiers, Overlay,
    PointerButton,
};

use chipplan_core::constants::HIT_TOLERANCE_PX;
use chipplan_core::Result;

use crate::model::{Rect, ShapeKind};
use crate::partition::{PartitionShape, ShapeId};
use crate::selection_manager::SelectionManager;
use crate::shape_store::ShapeStore;
use crate::viewport::Viewport;

/// Canvas state managing partitions, selection and the view.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    store: ShapeStore,
    selection: SelectionManager,
    viewport: Viewport,
    drag_mode: DragMode,
    input_state: InputState,
}

impl Canvas {
    /// Creates a new empty canvas.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shape_count(&self) -> usize {
        self.store.len()
    }

    /// Partitions bottom to top.
    pub fn shapes(&self) -> impl DoubleEndedIterator<Item = &PartitionShape> {
        self.store.iter()
    }

    pub fn get_shape(&self, id: &ShapeId) -> Option<&PartitionShape> {
        self.store.get(id)
    }

    pub fn get_shape_mut(&mut self, id: &ShapeId) -> Option<&mut PartitionShape> {
        self.store.get_mut(id)
    }

    /// Adds a partition on top of the scene.
    pub fn add_partition(&mut self, shape: PartitionShape) -> Result<ShapeId> {
        let id = self.store.insert(shape)?;
        tracing::debug!("Added partition {}", id);
        Ok(id)
    }

    /// Replaces every partition, dropping the selection and any gesture.
    pub fn replace_shapes(&mut self, shapes: Vec<PartitionShape>) {
        self.cancel_interaction();
        self.store.replace_all(shapes);
        self.selection.prune(&self.store);
    }

    pub fn clear(&mut self) {
        self.replace_shapes(Vec::new());
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn selected_id(&self) -> Option<&ShapeId> {
        self.selection.selected_id()
    }

    pub fn selected_ids(&self) -> Vec<ShapeId> {
        self.selection.selected_ids(&self.store)
    }

    pub fn selected_count(&self) -> usize {
        self.store.iter().filter(|s| s.selected).count()
    }

    pub fn select_all(&mut self) {
        self.selection.select_all(&mut self.store);
    }

    pub fn deselect_all(&mut self) {
        self.selection.deselect_all(&mut self.store);
    }

    /// Removes every selected partition, returning how many went.
    pub fn remove_selected(&mut self) -> usize {
        let removed = self.store.remove_where(|s| s.selected);
        self.selection.prune(&self.store);
        removed
    }

    /// Flips the lock flag of every selected partition.
    pub fn toggle_lock_selected(&mut self) -> usize {
        let mut toggled = 0;
        for shape in self.store.iter_mut().filter(|s| s.selected) {
            let locked = !shape.is_locked();
            shape.set_locked(locked);
            toggled += 1;
        }
        toggled
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn zoom(&self) -> f64 {
        self.viewport.zoom()
    }

    pub fn drag_mode(&self) -> DragMode {
        self.drag_mode
    }

    pub fn set_drag_mode(&mut self, mode: DragMode) {
        self.drag_mode = mode;
    }

    pub fn input_state(&self) -> InputState {
        self.input_state
    }

    /// Abandons any gesture in progress without committing it.
    pub fn cancel_interaction(&mut self) {
        self.input_state = InputState::Idle;
    }

    /// Hit tolerance in scene units so picking feels the same at any zoom.
    pub fn hit_tolerance(&self) -> f64 {
        HIT_TOLERANCE_PX / self.viewport.zoom()
    }

    /// Transient outline for the gesture in progress, if any.
    pub fn overlay(&self) -> Option<Overlay> {
        match self.input_state {
            InputState::Drawing { start, current } => Some(Overlay::Preview {
                rect: Rect::from_points(start, current),
                kind: ShapeKind::Rectangle,
            }),
            InputState::RubberBand { start, current, .. } => Some(Overlay::SelectionBand {
                rect: Rect::from_points(start, current),
            }),
            _ => None,
        }
    }
}
