//! Pointer state machine for the canvas.
//!
//! Events arrive in widget pixel coordinates and are mapped to scene
//! coordinates through the viewport before they touch any partition.

use crate::model::{Point, Rect};
use crate::partition::PartitionShape;

use super::types::{
    CanvasEvent, DragMode, InputContext, InputOutcome, InputState, Modifiers, PointerButton,
};
use super::Canvas;

impl Canvas {
    /// Feeds one pointer event through the interaction state machine.
    pub fn handle_event(&mut self, event: CanvasEvent, ctx: &InputContext) -> InputOutcome {
        match event {
            CanvasEvent::Press {
                button,
                x,
                y,
                modifiers,
            } => self.on_press(button, x, y, modifiers, ctx),
            CanvasEvent::Motion { x, y } => self.on_motion(x, y),
            CanvasEvent::Release { button, x, y } => self.on_release(button, x, y, ctx),
            CanvasEvent::Scroll { dy, x, y } => self.on_scroll(dy, x, y, ctx),
        }
    }

    fn on_press(
        &mut self,
        button: PointerButton,
        x: f64,
        y: f64,
        modifiers: Modifiers,
        ctx: &InputContext,
    ) -> InputOutcome {
        // A second button pressed mid-gesture is ignored.
        if self.input_state != InputState::Idle {
            return InputOutcome::Ignored;
        }

        match button {
            PointerButton::Middle => {
                self.input_state = InputState::Panning { last: (x, y) };
                InputOutcome::Ignored
            }
            PointerButton::Left if ctx.draw_mode => {
                let start = self.viewport.pixel_to_world(x, y);
                self.input_state = InputState::Drawing {
                    start,
                    current: start,
                };
                InputOutcome::PreviewChanged
            }
            PointerButton::Left => self.begin_pick(x, y, modifiers),
            PointerButton::Right => InputOutcome::Ignored,
        }
    }

    fn begin_pick(&mut self, x: f64, y: f64, modifiers: Modifiers) -> InputOutcome {
        let point = self.viewport.pixel_to_world(x, y);
        let tolerance = self.hit_tolerance();
        let additive = modifiers.is_additive();

        match self
            .selection
            .select_at(&mut self.store, &point, tolerance, additive)
        {
            Some(id) => {
                let grabbed = self.store.get(&id).is_some_and(|s| s.selected);
                if grabbed {
                    self.input_state = InputState::Dragging { last: point };
                }
            }
            None if self.drag_mode == DragMode::RubberBand => {
                self.input_state = InputState::RubberBand {
                    start: point,
                    current: point,
                    additive,
                };
            }
            None => {}
        }

        InputOutcome::SelectionChanged
    }

    fn on_motion(&mut self, x: f64, y: f64) -> InputOutcome {
        match self.input_state {
            InputState::Idle => InputOutcome::Ignored,
            InputState::Panning { last } => {
                self.viewport.pan_by(x - last.0, y - last.1);
                self.input_state = InputState::Panning { last: (x, y) };
                InputOutcome::ViewChanged
            }
            InputState::Drawing { start, .. } => {
                let current = self.viewport.pixel_to_world(x, y);
                self.input_state = InputState::Drawing { start, current };
                InputOutcome::PreviewChanged
            }
            InputState::Dragging { last } => {
                let point = self.viewport.pixel_to_world(x, y);
                let (dx, dy) = (point.x - last.x, point.y - last.y);
                self.input_state = InputState::Dragging { last: point };
                InputOutcome::ShapesMoved(self.move_selected(dx, dy))
            }
            InputState::RubberBand { start, additive, .. } => {
                let current = self.viewport.pixel_to_world(x, y);
                self.input_state = InputState::RubberBand {
                    start,
                    current,
                    additive,
                };
                InputOutcome::PreviewChanged
            }
        }
    }

    fn on_release(
        &mut self,
        button: PointerButton,
        x: f64,
        y: f64,
        ctx: &InputContext,
    ) -> InputOutcome {
        match (button, self.input_state) {
            (PointerButton::Middle, InputState::Panning { .. }) => {
                self.input_state = InputState::Idle;
                InputOutcome::Ignored
            }
            (PointerButton::Left, InputState::Drawing { start, .. }) => {
                self.input_state = InputState::Idle;
                let end = self.viewport.pixel_to_world(x, y);
                self.commit_drawn(Rect::from_points(start, end), ctx)
            }
            (PointerButton::Left, InputState::Dragging { .. }) => {
                self.input_state = InputState::Idle;
                InputOutcome::Ignored
            }
            (PointerButton::Left, InputState::RubberBand { start, additive, .. }) => {
                self.input_state = InputState::Idle;
                let end = self.viewport.pixel_to_world(x, y);
                let area = Rect::from_points(start, end);
                let count = self.selection.select_in_rect(&mut self.store, &area, additive);
                tracing::debug!("Rubber band selected {} partitions", count);
                InputOutcome::SelectionChanged
            }
            _ => InputOutcome::Ignored,
        }
    }

    fn on_scroll(&mut self, dy: f64, x: f64, y: f64, ctx: &InputContext) -> InputOutcome {
        let factor = if dy < 0.0 {
            ctx.policy.zoom_in_factor
        } else if dy > 0.0 {
            ctx.policy.zoom_out_factor
        } else {
            return InputOutcome::Ignored;
        };

        self.viewport.zoom_about(x, y, factor);
        InputOutcome::ViewChanged
    }

    fn commit_drawn(&mut self, rect: Rect, ctx: &InputContext) -> InputOutcome {
        if !ctx.policy.accepts(rect.width, rect.height) {
            tracing::debug!(
                "Discarded drawn rectangle {:.3} x {:.3} below minimum size",
                rect.width,
                rect.height
            );
            return InputOutcome::DrawDiscarded;
        }

        match self.add_partition(PartitionShape::new(rect, ctx.units)) {
            Ok(id) => InputOutcome::ShapeCommitted(id),
            Err(e) => {
                tracing::warn!("Failed to add drawn partition: {}", e);
                InputOutcome::DrawDiscarded
            }
        }
    }

    /// Moves every selected, unlocked partition. Returns how many moved.
    pub fn move_selected(&mut self, dx: f64, dy: f64) -> usize {
        self.store
            .iter_mut()
            .filter(|s| s.selected)
            .map(|s| s.move_by(dx, dy))
            .filter(|moved| *moved)
            .count()
    }

    /// Scene point under a widget pixel.
    pub fn scene_point(&self, x: f64, y: f64) -> Point {
        self.viewport.pixel_to_world(x, y)
    }
}
