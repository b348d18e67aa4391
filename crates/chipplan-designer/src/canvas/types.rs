//! Canvas type definitions: pointer events, input context, outcomes and preview.

use chipplan_core::{DrawPolicy, Units};

use crate::model::{Point, Rect, ShapeKind};
use crate::partition::ShapeId;

/// Mouse button that produced a press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
}

impl PointerButton {
    /// Maps a GDK button number (1 = primary, 2 = middle, 3 = secondary).
    pub fn from_gdk(button: u32) -> Option<Self> {
        match button {
            1 => Some(Self::Left),
            2 => Some(Self::Middle),
            3 => Some(Self::Right),
            _ => None,
        }
    }
}

/// Keyboard modifiers held during a press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        shift: false,
    };

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            shift: false,
        }
    }

    /// Whether a click should add to the selection instead of replacing it.
    pub fn is_additive(&self) -> bool {
        self.ctrl || self.shift
    }
}

/// Pointer input in widget pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasEvent {
    Press {
        button: PointerButton,
        x: f64,
        y: f64,
        modifiers: Modifiers,
    },
    Motion {
        x: f64,
        y: f64,
    },
    Release {
        button: PointerButton,
        x: f64,
        y: f64,
    },
    /// Wheel rotation; negative `dy` is a notch forward.
    Scroll {
        dy: f64,
        x: f64,
        y: f64,
    },
}

/// What a left drag on empty canvas does when not drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragMode {
    #[default]
    RubberBand,
    NoDrag,
}

/// Session values the canvas needs to interpret an event.
#[derive(Debug, Clone, Copy)]
pub struct InputContext {
    pub draw_mode: bool,
    pub units: Units,
    pub policy: DrawPolicy,
}

impl Default for InputContext {
    fn default() -> Self {
        Self {
            draw_mode: false,
            units: Units::default(),
            policy: DrawPolicy::default(),
        }
    }
}

/// Result of feeding one event to the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum InputOutcome {
    Ignored,
    ViewChanged,
    PreviewChanged,
    SelectionChanged,
    /// Number of partitions that actually moved.
    ShapesMoved(usize),
    ShapeCommitted(ShapeId),
    /// The drawn rectangle was too small and was dropped.
    DrawDiscarded,
}

impl InputOutcome {
    pub fn needs_redraw(&self) -> bool {
        !matches!(self, InputOutcome::Ignored)
    }

    /// Whether the outcome changed persisted document content.
    pub fn modifies_document(&self) -> bool {
        matches!(
            self,
            InputOutcome::ShapeCommitted(_) | InputOutcome::ShapesMoved(1..)
        )
    }
}

/// Transient outline shown while the user drags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Overlay {
    /// Rectangle being drawn.
    Preview { rect: Rect, kind: ShapeKind },
    /// Rubber-band selection area.
    SelectionBand { rect: Rect },
}

impl Overlay {
    pub fn rect(&self) -> Rect {
        match self {
            Overlay::Preview { rect, .. } | Overlay::SelectionBand { rect } => *rect,
        }
    }
}

/// Pointer interaction currently in progress. Points are in scene
/// coordinates except `Panning::last`, which stays in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    #[default]
    Idle,
    Panning {
        last: (f64, f64),
    },
    Drawing {
        start: Point,
        current: Point,
    },
    Dragging {
        last: Point,
    },
    RubberBand {
        start: Point,
        current: Point,
        additive: bool,
    },
}
