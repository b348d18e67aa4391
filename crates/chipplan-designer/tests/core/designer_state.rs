use chipplan_core::{Error, Units};
use chipplan_designer::{
    CanvasEvent, CoordinateField, DesignerState, DragMode, Modifiers, PointerButton, Rect,
};

/// Answers prompts from a fixed list, cancelling once it runs out.
fn scripted(values: &[f64]) -> impl FnMut(CoordinateField, Units) -> Option<f64> + '_ {
    let mut iter = values.iter().copied();
    move |_field, _units| iter.next()
}

#[test]
fn test_add_by_coordinates_mm_example() {
    let mut state = DesignerState::new();
    state.change_units(Units::Millimeters);

    let id = state
        .add_by_coordinates(&mut scripted(&[10.0, 10.0, 50.0, 30.0]))
        .unwrap()
        .expect("all values supplied");

    let shape = state.canvas.get_shape(&id).unwrap();
    assert_eq!(shape.scene_bounds(), Rect::new(10.0, 10.0, 50.0, 30.0));
    assert_eq!(shape.units, Units::Millimeters);
    assert!(!shape.is_locked());
    assert_eq!(shape.label().text, "50 x 30");
    assert!(state.is_modified);
}

#[test]
fn test_add_by_coordinates_prompts_in_order() {
    let mut state = DesignerState::new();
    state.change_units(Units::Pixels);
    let mut asked = Vec::new();
    let mut prompt = |field: CoordinateField, units: Units| {
        asked.push(field.prompt(units));
        Some(1.0)
    };
    state.add_by_coordinates(&mut prompt).unwrap();
    assert_eq!(asked, vec!["x (px):", "y (px):", "width (px):", "height (px):"]);
}

#[test]
fn test_cancelled_prompt_adds_nothing() {
    let mut state = DesignerState::new();
    let result = state
        .add_by_coordinates(&mut scripted(&[10.0, 10.0, 50.0]))
        .unwrap();
    assert!(result.is_none());
    assert_eq!(state.canvas.shape_count(), 0);
    assert!(!state.is_modified);
}

#[test]
fn test_negative_size_is_rejected() {
    let mut state = DesignerState::new();
    let err = state
        .add_by_coordinates(&mut scripted(&[0.0, 0.0, -5.0, 10.0]))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidGeometry { .. }));
    assert_eq!(state.canvas.shape_count(), 0);

    let err = state.add_rectangle_at(0.0, f64::NAN, 1.0, 1.0).unwrap_err();
    assert!(matches!(err, Error::InvalidGeometry { .. }));
}

#[test]
fn test_zero_size_by_coordinates_is_allowed() {
    let mut state = DesignerState::new();
    state.add_rectangle_at(5.0, 5.0, 0.0, 0.0).unwrap();
    assert_eq!(state.canvas.shape_count(), 1);
}

#[test]
fn test_toggle_lock_twice_is_identity() {
    let mut state = DesignerState::new();
    state.add_rectangle_at(0.0, 0.0, 10.0, 10.0).unwrap();
    state.add_rectangle_at(20.0, 0.0, 10.0, 10.0).unwrap();
    state.select_all();

    assert_eq!(state.toggle_lock_selected(), 2);
    assert!(state.canvas.shapes().all(|s| s.is_locked()));
    assert_eq!(state.toggle_lock_selected(), 2);
    assert!(state.canvas.shapes().all(|s| !s.is_locked()));
}

#[test]
fn test_toggle_lock_flips_each_shape() {
    let mut state = DesignerState::new();
    let a = state.add_rectangle_at(0.0, 0.0, 10.0, 10.0).unwrap();
    let b = state.add_rectangle_at(20.0, 0.0, 10.0, 10.0).unwrap();
    state.canvas.get_shape_mut(&a).unwrap().set_locked(true);
    state.select_all();

    state.toggle_lock_selected();
    assert!(!state.canvas.get_shape(&a).unwrap().is_locked());
    assert!(state.canvas.get_shape(&b).unwrap().is_locked());
}

#[test]
fn test_delete_selected_only() {
    let mut state = DesignerState::new();
    let keep = state.add_rectangle_at(0.0, 0.0, 10.0, 10.0).unwrap();
    let gone = state.add_rectangle_at(20.0, 0.0, 10.0, 10.0).unwrap();
    state.canvas.get_shape_mut(&gone).unwrap().selected = true;

    assert_eq!(state.delete_selected(), 1);
    assert!(state.canvas.get_shape(&keep).is_some());
    assert!(state.canvas.get_shape(&gone).is_none());
    assert_eq!(state.status(), "Deleted 1 shapes");

    assert_eq!(state.delete_selected(), 0);
}

#[test]
fn test_change_units_leaves_existing_shapes() {
    let mut state = DesignerState::new();
    let id = state.add_rectangle_at(0.0, 0.0, 10.0, 10.0).unwrap();
    state.change_units(Units::Pixels);
    assert_eq!(state.status(), "Units set to px");
    assert_eq!(state.canvas.get_shape(&id).unwrap().units, Units::Micrometers);

    let id = state.add_rectangle_at(0.0, 0.0, 10.0, 10.0).unwrap();
    assert_eq!(state.canvas.get_shape(&id).unwrap().units, Units::Pixels);
}

#[test]
fn test_toggle_draw_mode_switches_drag_mode() {
    let mut state = DesignerState::new();
    assert_eq!(state.status(), "Ready");

    state.toggle_draw_mode(true);
    assert!(state.draw_mode());
    assert_eq!(state.canvas.drag_mode(), DragMode::NoDrag);
    assert_eq!(state.status(), "Draw mode ON: drag left mouse to draw rectangles");

    state.toggle_draw_mode(false);
    assert!(!state.draw_mode());
    assert_eq!(state.canvas.drag_mode(), DragMode::RubberBand);
    assert_eq!(state.status(), "Draw mode OFF");
}

#[test]
fn test_drawing_marks_design_modified() {
    let mut state = DesignerState::new();
    state.toggle_draw_mode(true);
    assert_eq!(state.display_name(), "Untitled");

    state.handle_canvas_event(CanvasEvent::Press {
        button: PointerButton::Left,
        x: 0.0,
        y: 0.0,
        modifiers: Modifiers::NONE,
    });
    state.handle_canvas_event(CanvasEvent::Release {
        button: PointerButton::Left,
        x: 40.0,
        y: 20.0,
    });

    assert_eq!(state.canvas.shape_count(), 1);
    assert!(state.is_modified);
    assert_eq!(state.display_name(), "Untitled*");
}

#[test]
fn test_new_design_clears_everything() {
    let mut state = DesignerState::new();
    state.add_rectangle_at(0.0, 0.0, 10.0, 10.0).unwrap();
    state.canvas.viewport_mut().zoom_about(100.0, 100.0, 2.0);
    state.canvas.viewport_mut().pan_by(30.0, -10.0);
    state.new_design();
    assert_eq!(state.canvas.shape_count(), 0);
    assert!(!state.is_modified);
    assert!(state.current_file_path.is_none());
    assert_eq!(state.status(), "New design");
    assert_eq!(state.display_name(), "Untitled");
    assert_eq!(state.canvas.zoom(), 1.0);
    assert_eq!(state.canvas.viewport().pan_x(), 0.0);
    assert_eq!(state.canvas.viewport().pan_y(), 0.0);
}
