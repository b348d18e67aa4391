use crate::model::{Point, Rect};
use crate::partition::ShapeId;
use crate::shape_store::ShapeStore;

/// Manages partition selection state and selection operations.
///
/// `SelectionManager` is responsible for:
/// - Tracking which partition is the "primary" selection
/// - Handling point-based selection (clicking on partitions)
/// - Handling rectangle-based selection (rubber-band drag)
/// - Additive selection (Ctrl+click, Ctrl+drag)
///
/// # Selection Model
///
/// - **Primary Selection**: The most recently picked partition (stored in `selected_id`)
/// - **Multiple Selection**: Any number of partitions can have their `selected` flag set
///
/// Locked partitions are selectable; locking only prevents movement.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    /// The ID of the primary selected partition, if any
    selected_id: Option<ShapeId>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use chipplan_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.selected_id(), None);
    /// ```
    pub fn new() -> Self {
        Self { selected_id: None }
    }

    /// Returns the ID of the primary selected partition.
    pub fn selected_id(&self) -> Option<&ShapeId> {
        self.selected_id.as_ref()
    }

    /// Deselects all partitions and clears the primary selection.
    pub fn deselect_all(&mut self, store: &mut ShapeStore) {
        for obj in store.iter_mut() {
            obj.selected = false;
        }
        self.selected_id = None;
    }

    /// Selects every partition; the topmost becomes primary.
    pub fn select_all(&mut self, store: &mut ShapeStore) {
        for obj in store.iter_mut() {
            obj.selected = true;
        }
        self.selected_id = store.iter().last().map(|s| s.id().clone());
    }

    /// Selects the topmost partition at the given point.
    ///
    /// # Multi-select Behavior
    ///
    /// - If `multi` is `false`: a hit on an unselected partition replaces the
    ///   selection; a hit on an already selected one keeps the selection so a
    ///   group can be dragged; a miss clears the selection
    /// - If `multi` is `true`: toggles the hit partition without affecting others
    ///
    /// # Returns
    ///
    /// The ID of the partition under the point, or `None` if nothing was hit.
    pub fn select_at(
        &mut self,
        store: &mut ShapeStore,
        point: &Point,
        tolerance: f64,
        multi: bool,
    ) -> Option<ShapeId> {
        let hit = store
            .topmost_at(*point, tolerance)
            .map(|s| (s.id().clone(), s.selected));

        let Some((id, was_selected)) = hit else {
            if !multi {
                self.deselect_all(store);
            }
            return None;
        };

        if multi {
            if let Some(obj) = store.get_mut(&id) {
                obj.selected = !was_selected;
            }
            if was_selected {
                if self.selected_id.as_ref() == Some(&id) {
                    self.selected_id = None;
                }
            } else {
                self.selected_id = Some(id.clone());
            }
        } else {
            if !was_selected {
                self.deselect_all(store);
                if let Some(obj) = store.get_mut(&id) {
                    obj.selected = true;
                }
            }
            self.selected_id = Some(id.clone());
        }

        Some(id)
    }

    /// Selects every partition touching `area`.
    ///
    /// When `additive` is false the previous selection is replaced.
    /// Returns the number of partitions selected by the band.
    pub fn select_in_rect(&mut self, store: &mut ShapeStore, area: &Rect, additive: bool) -> usize {
        if !additive {
            self.deselect_all(store);
        }

        let ids = store.ids_intersecting(area);
        for id in &ids {
            if let Some(obj) = store.get_mut(id) {
                obj.selected = true;
            }
        }

        if let Some(last) = ids.last() {
            self.selected_id = Some(last.clone());
        }
        ids.len()
    }

    /// Ids of all selected partitions, bottom to top.
    pub fn selected_ids(&self, store: &ShapeStore) -> Vec<ShapeId> {
        store
            .iter()
            .filter(|s| s.selected)
            .map(|s| s.id().clone())
            .collect()
    }

    /// Forgets the primary selection if it no longer exists.
    pub fn prune(&mut self, store: &ShapeStore) {
        if let Some(id) = &self.selected_id {
            if !store.get(id).is_some_and(|s| s.selected) {
                self.selected_id = None;
            }
        }
    }
}
