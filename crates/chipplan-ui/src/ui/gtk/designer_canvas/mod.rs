//! Designer canvas widget.
//!
//! Translates GTK gestures into [`CanvasEvent`]s for the designer state and
//! paints the scene with cairo.

mod rendering;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gtk4::gdk::{Key, ModifierType};
use gtk4::prelude::*;
use gtk4::{
    glib, DrawingArea, EventControllerKey, EventControllerMotion, EventControllerScroll,
    EventControllerScrollFlags, GestureDrag,
};

use chipplan_designer::{CanvasEvent, DesignerState, Modifiers, PointerButton};

type ChangedCallback = Box<dyn Fn()>;

pub struct DesignerCanvas {
    pub widget: DrawingArea,
    state: Rc<RefCell<DesignerState>>,
    // Last pointer position in widget pixels, used as the zoom anchor.
    pointer: Cell<(f64, f64)>,
    drag_origin: Cell<(f64, f64)>,
    drag_button: Cell<Option<PointerButton>>,
    label_font_size: f64,
    on_changed: RefCell<Option<ChangedCallback>>,
}

fn modifiers_from(state: ModifierType) -> Modifiers {
    Modifiers {
        ctrl: state.contains(ModifierType::CONTROL_MASK),
        shift: state.contains(ModifierType::SHIFT_MASK),
    }
}

impl DesignerCanvas {
    pub fn new(state: Rc<RefCell<DesignerState>>, label_font_size: f64) -> Rc<Self> {
        let widget = DrawingArea::builder()
            .hexpand(true)
            .vexpand(true)
            .focusable(true)
            .css_classes(vec!["designer-canvas"])
            .build();

        let canvas = Rc::new(Self {
            widget: widget.clone(),
            state: state.clone(),
            pointer: Cell::new((0.0, 0.0)),
            drag_origin: Cell::new((0.0, 0.0)),
            drag_button: Cell::new(None),
            label_font_size,
            on_changed: RefCell::new(None),
        });

        let canvas_draw = canvas.clone();
        widget.set_draw_func(move |_, cr, width, height| {
            let state = canvas_draw.state.borrow();
            rendering::draw(
                cr,
                &state,
                width as f64,
                height as f64,
                canvas_draw.label_font_size,
            );
        });

        let motion_ctrl = EventControllerMotion::new();
        let canvas_motion = canvas.clone();
        motion_ctrl.connect_motion(move |_, x, y| {
            canvas_motion.pointer.set((x, y));
        });
        widget.add_controller(motion_ctrl);

        // One zoom step per scroll event, anchored at the pointer.
        let scroll_ctrl = EventControllerScroll::new(EventControllerScrollFlags::VERTICAL);
        let canvas_scroll = canvas.clone();
        scroll_ctrl.connect_scroll(move |_, _dx, dy| {
            let (x, y) = canvas_scroll.pointer.get();
            canvas_scroll.dispatch(CanvasEvent::Scroll { dy, x, y });
            glib::Propagation::Stop
        });
        widget.add_controller(scroll_ctrl);

        // Button 0 lets a single gesture report left, middle and right drags.
        let drag_gesture = GestureDrag::new();
        drag_gesture.set_button(0);

        let canvas_begin = canvas.clone();
        drag_gesture.connect_drag_begin(move |gesture, x, y| {
            canvas_begin.widget.grab_focus();
            let Some(button) = PointerButton::from_gdk(gesture.current_button()) else {
                canvas_begin.drag_button.set(None);
                return;
            };
            canvas_begin.drag_origin.set((x, y));
            canvas_begin.drag_button.set(Some(button));
            canvas_begin.dispatch(CanvasEvent::Press {
                button,
                x,
                y,
                modifiers: modifiers_from(gesture.current_event_state()),
            });
        });

        let canvas_update = canvas.clone();
        drag_gesture.connect_drag_update(move |_, offset_x, offset_y| {
            if canvas_update.drag_button.get().is_none() {
                return;
            }
            let (x0, y0) = canvas_update.drag_origin.get();
            let (x, y) = (x0 + offset_x, y0 + offset_y);
            canvas_update.pointer.set((x, y));
            canvas_update.dispatch(CanvasEvent::Motion { x, y });
        });

        let canvas_end = canvas.clone();
        drag_gesture.connect_drag_end(move |_, offset_x, offset_y| {
            let Some(button) = canvas_end.drag_button.take() else {
                return;
            };
            let (x0, y0) = canvas_end.drag_origin.get();
            canvas_end.dispatch(CanvasEvent::Release {
                button,
                x: x0 + offset_x,
                y: y0 + offset_y,
            });
        });
        widget.add_controller(drag_gesture);

        let key_controller = EventControllerKey::new();
        let canvas_key = canvas.clone();
        key_controller.connect_key_pressed(move |_, keyval, _keycode, modifier| {
            canvas_key.handle_key(keyval, modifier)
        });
        widget.add_controller(key_controller);

        canvas
    }

    /// Registers the callback run after any change to the scene or status.
    pub fn connect_changed(&self, callback: impl Fn() + 'static) {
        *self.on_changed.borrow_mut() = Some(Box::new(callback));
    }

    /// Repaints and notifies listeners after an external state change.
    pub fn refresh(&self) {
        let draw_mode = self.state.borrow().draw_mode();
        self.widget
            .set_cursor_from_name(Some(if draw_mode { "crosshair" } else { "default" }));
        self.widget.queue_draw();
        self.notify();
    }

    fn notify(&self) {
        if let Some(callback) = self.on_changed.borrow().as_ref() {
            callback();
        }
    }

    fn dispatch(&self, event: CanvasEvent) {
        let outcome = self.state.borrow_mut().handle_canvas_event(event);
        if outcome.needs_redraw() {
            self.widget.queue_draw();
            self.notify();
        }
    }

    fn handle_key(&self, keyval: Key, modifier: ModifierType) -> glib::Propagation {
        let ctrl = modifier.contains(ModifierType::CONTROL_MASK);
        {
            let mut state = self.state.borrow_mut();
            match keyval {
                Key::Delete | Key::BackSpace => {
                    state.delete_selected();
                }
                Key::Escape => {
                    state.canvas.cancel_interaction();
                    state.deselect_all();
                }
                Key::a | Key::A if ctrl => state.select_all(),
                _ => return glib::Propagation::Proceed,
            }
        }
        self.refresh();
        glib::Propagation::Stop
    }
}
