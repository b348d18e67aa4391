//! # ChipPlan Designer
//!
//! Partition layout editing for chip floorplans: the partition model, the
//! canvas interaction state machine, and JSON persistence of layouts.
//!
//! ## Core Components
//!
//! - **Partitions**: Rectangular regions with an id, a unit, a lock flag and
//!   free-form properties
//! - **Canvas**: Ordered partition store with selection, viewport and pointer
//!   state machine (draw, drag, pan, rubber-band, zoom)
//! - **Designer State**: Session controller behind the toolbar actions
//! - **Serialization**: All-or-nothing JSON documents
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (session, status, file association)
//!   └── Canvas
//!         ├── ShapeStore (partitions in draw order)
//!         ├── SelectionManager
//!         ├── Viewport (zoom/pan)
//!         └── InputState (pointer gesture in progress)
//!
//! DesignFile (JSON document) <-> PartitionShape
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use chipplan_designer::{CanvasEvent, DesignerState, Modifiers, PointerButton};
//!
//! let mut state = DesignerState::new();
//! state.toggle_draw_mode(true);
//! state.handle_canvas_event(CanvasEvent::Press {
//!     button: PointerButton::Left,
//!     x: 10.0,
//!     y: 10.0,
//!     modifiers: Modifiers::NONE,
//! });
//! state.handle_canvas_event(CanvasEvent::Release {
//!     button: PointerButton::Left,
//!     x: 60.0,
//!     y: 40.0,
//! });
//! assert_eq!(state.canvas.shape_count(), 1);
//! ```

pub mod canvas;
pub mod designer_state;
pub mod model;
pub mod partition;
pub mod prompt;
pub mod selection_manager;
pub mod serialization;
pub mod shape_store;
pub mod viewport;

pub use canvas::{
    Canvas, CanvasEvent, DragMode, InputContext, InputOutcome, InputState, Modifiers, Overlay,
    PointerButton,
};
pub use designer_state::{DesignerState, Session};
pub use model::{DesignRectangle, DesignerShape, Point, Rect, Shape, ShapeKind};
pub use partition::{
    dimension_text, PartitionShape, Properties, Rgba, ShapeId, ShapeLabel, ShapeStyle,
};
pub use prompt::{CoordinateField, CoordinatePrompt};
pub use serialization::{DesignFile, ShapeRecord};
pub use shape_store::ShapeStore;
pub use viewport::Viewport;
