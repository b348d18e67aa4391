//! Partition creation, locking, deletion and selection for designer state.

use chipplan_core::{Error, Result};

use super::DesignerState;
use crate::model::Rect;
use crate::partition::{PartitionShape, ShapeId};
use crate::prompt::{CoordinateField, CoordinatePrompt};

impl DesignerState {
    /// Asks for x, y, width and height in the current unit and adds an
    /// unlocked partition at exactly those coordinates.
    ///
    /// Returns `Ok(None)` when the user cancels any of the four values.
    pub fn add_by_coordinates(
        &mut self,
        prompt: &mut impl CoordinatePrompt,
    ) -> Result<Option<ShapeId>> {
        let units = self.session.current_units;
        let mut values = [0.0; 4];
        for (slot, field) in values.iter_mut().zip(CoordinateField::ALL) {
            match prompt.request(field, units) {
                Some(v) => *slot = v,
                None => {
                    tracing::debug!("Add by coordinates cancelled at {}", field);
                    return Ok(None);
                }
            }
        }

        let [x, y, width, height] = values;
        self.add_rectangle_at(x, y, width, height).map(Some)
    }

    /// Adds an unlocked partition in the current unit.
    pub fn add_rectangle_at(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<ShapeId> {
        let rect = Rect::new(x, y, width, height);
        if !rect.is_finite() {
            return Err(Error::invalid_geometry("coordinates must be finite numbers"));
        }
        if width < 0.0 || height < 0.0 {
            return Err(Error::invalid_geometry(format!(
                "size {} x {} is negative",
                width, height
            )));
        }

        let units = self.session.current_units;
        let id = self.canvas.add_partition(PartitionShape::new(rect, units))?;
        self.mark_modified();
        self.set_status(format!("Added partition at ({}, {}) {}", x, y, units));
        Ok(id)
    }

    /// Flips the lock on every selected partition.
    pub fn toggle_lock_selected(&mut self) -> usize {
        let count = self.canvas.toggle_lock_selected();
        if count > 0 {
            self.mark_modified();
            self.set_status(format!("Toggled lock on {} shapes", count));
        }
        count
    }

    /// Removes every selected partition.
    pub fn delete_selected(&mut self) -> usize {
        let count = self.canvas.remove_selected();
        if count > 0 {
            self.mark_modified();
            self.set_status(format!("Deleted {} shapes", count));
        }
        count
    }

    pub fn select_all(&mut self) {
        self.canvas.select_all();
    }

    pub fn deselect_all(&mut self) {
        self.canvas.deselect_all();
    }
}
