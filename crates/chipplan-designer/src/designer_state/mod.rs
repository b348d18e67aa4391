//! Designer state manager for UI integration.
//! Owns the canvas and the editing session, and turns toolbar actions into
//! canvas changes.
//!
//! This module is split into submodules:
//! - `shapes`: Partition creation, locking, deletion, selection
//! - `file_io`: Save/load operations

mod file_io;
mod shapes;

use chipplan_core::{DrawPolicy, LoadPolicy, Units};

use crate::canvas::{CanvasEvent, DragMode, InputContext, InputOutcome};
use crate::Canvas;

/// Per-window editing session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    /// Left drag draws new partitions instead of selecting.
    pub draw_mode: bool,
    /// Unit assigned to newly created partitions.
    pub current_units: Units,
}

/// Designer state for UI integration
#[derive(Debug, Clone)]
pub struct DesignerState {
    pub canvas: Canvas,
    pub session: Session,
    pub draw_policy: DrawPolicy,
    pub load_policy: LoadPolicy,
    pub current_file_path: Option<std::path::PathBuf>,
    pub is_modified: bool,
    pub design_name: String,
    status: String,
}

impl DesignerState {
    /// Creates a new designer state.
    pub fn new() -> Self {
        Self {
            canvas: Canvas::new(),
            session: Session::default(),
            draw_policy: DrawPolicy::default(),
            load_policy: LoadPolicy::default(),
            current_file_path: None,
            is_modified: false,
            design_name: "Untitled".to_string(),
            status: "Ready".to_string(),
        }
    }

    /// Creates a designer state using configured policies and starting unit.
    pub fn with_policies(draw_policy: DrawPolicy, load_policy: LoadPolicy, units: Units) -> Self {
        let mut state = Self::new();
        state.draw_policy = draw_policy;
        state.load_policy = load_policy;
        state.session.current_units = units;
        state
    }

    /// Latest status bar message.
    pub fn status(&self) -> &str {
        &self.status
    }

    pub(crate) fn set_status(&mut self, message: impl Into<String>) {
        self.status = message.into();
        tracing::info!("{}", self.status);
    }

    pub fn draw_mode(&self) -> bool {
        self.session.draw_mode
    }

    pub fn current_units(&self) -> Units {
        self.session.current_units
    }

    /// Turns rectangle drawing on or off.
    ///
    /// Rubber-band selection is only available while drawing is off.
    pub fn toggle_draw_mode(&mut self, on: bool) {
        self.session.draw_mode = on;
        self.canvas.cancel_interaction();
        if on {
            self.canvas.set_drag_mode(DragMode::NoDrag);
            self.set_status("Draw mode ON: drag left mouse to draw rectangles");
        } else {
            self.canvas.set_drag_mode(DragMode::RubberBand);
            self.set_status("Draw mode OFF");
        }
    }

    /// Sets the unit for partitions created from now on. Existing
    /// partitions keep their own unit.
    pub fn change_units(&mut self, units: Units) {
        self.session.current_units = units;
        self.set_status(format!("Units set to {}", units));
    }

    /// Context handed to the canvas for each pointer event.
    pub fn input_context(&self) -> InputContext {
        InputContext {
            draw_mode: self.session.draw_mode,
            units: self.session.current_units,
            policy: self.draw_policy,
        }
    }

    /// Routes a pointer event to the canvas and tracks document changes.
    pub fn handle_canvas_event(&mut self, event: CanvasEvent) -> InputOutcome {
        let ctx = self.input_context();
        let outcome = self.canvas.handle_event(event, &ctx);
        if outcome.modifies_document() {
            self.mark_modified();
        }
        if let InputOutcome::ShapeCommitted(id) = &outcome {
            if let Some(shape) = self.canvas.get_shape(id) {
                let label = shape.label();
                self.set_status(format!("Added partition {} {}", label.text, shape.units));
            }
        }
        outcome
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}
