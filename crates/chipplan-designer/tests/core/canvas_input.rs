//! Pointer state machine tests: drawing, dragging, panning, rubber band, zoom.

use chipplan_core::{DrawPolicy, Units};
use chipplan_designer::{
    Canvas, CanvasEvent, DragMode, InputContext, InputOutcome, InputState, Modifiers, Overlay,
    PartitionShape, PointerButton, Rect, ShapeKind,
};
use proptest::prelude::*;

fn press(button: PointerButton, x: f64, y: f64) -> CanvasEvent {
    CanvasEvent::Press {
        button,
        x,
        y,
        modifiers: Modifiers::NONE,
    }
}

fn release(button: PointerButton, x: f64, y: f64) -> CanvasEvent {
    CanvasEvent::Release { button, x, y }
}

fn motion(x: f64, y: f64) -> CanvasEvent {
    CanvasEvent::Motion { x, y }
}

fn draw_ctx(units: Units) -> InputContext {
    InputContext {
        draw_mode: true,
        units,
        policy: DrawPolicy::default(),
    }
}

fn select_ctx() -> InputContext {
    InputContext::default()
}

#[test]
fn test_draw_commits_partition_in_session_units() {
    let mut canvas = Canvas::new();
    let ctx = draw_ctx(Units::Millimeters);

    assert_eq!(
        canvas.handle_event(press(PointerButton::Left, 10.0, 10.0), &ctx),
        InputOutcome::PreviewChanged
    );
    canvas.handle_event(motion(30.0, 20.0), &ctx);
    assert_eq!(
        canvas.overlay(),
        Some(Overlay::Preview {
            rect: Rect::new(10.0, 10.0, 20.0, 10.0),
            kind: ShapeKind::Rectangle,
        })
    );

    let id = match canvas.handle_event(release(PointerButton::Left, 60.0, 40.0), &ctx) {
        InputOutcome::ShapeCommitted(id) => id,
        other => panic!("expected a committed shape, got {:?}", other),
    };

    let shape = canvas.get_shape(&id).unwrap();
    assert_eq!(shape.scene_bounds(), Rect::new(10.0, 10.0, 50.0, 30.0));
    assert_eq!(shape.units, Units::Millimeters);
    assert!(!shape.is_locked());
    assert_eq!(canvas.overlay(), None);
    assert_eq!(canvas.input_state(), InputState::Idle);
}

#[test]
fn test_draw_towards_top_left_is_normalized() {
    let mut canvas = Canvas::new();
    let ctx = draw_ctx(Units::Micrometers);
    canvas.handle_event(press(PointerButton::Left, 60.0, 40.0), &ctx);
    canvas.handle_event(release(PointerButton::Left, 10.0, 10.0), &ctx);

    let shape = canvas.shapes().next().unwrap();
    assert_eq!(shape.scene_bounds(), Rect::new(10.0, 10.0, 50.0, 30.0));
}

#[test]
fn test_draw_at_exact_threshold_is_discarded() {
    let mut canvas = Canvas::new();
    let ctx = draw_ctx(Units::Micrometers);
    canvas.handle_event(press(PointerButton::Left, 0.0, 0.0), &ctx);
    let outcome = canvas.handle_event(release(PointerButton::Left, 1.0, 50.0), &ctx);
    assert_eq!(outcome, InputOutcome::DrawDiscarded);
    assert_eq!(canvas.shape_count(), 0);
}

#[test]
fn test_draw_uses_configured_minimum() {
    let mut canvas = Canvas::new();
    let mut ctx = draw_ctx(Units::Micrometers);
    ctx.policy.min_size = 20.0;
    canvas.handle_event(press(PointerButton::Left, 0.0, 0.0), &ctx);
    canvas.handle_event(release(PointerButton::Left, 15.0, 15.0), &ctx);
    assert_eq!(canvas.shape_count(), 0);
}

#[test]
fn test_middle_drag_pans_view() {
    let mut canvas = Canvas::new();
    let ctx = select_ctx();

    canvas.handle_event(press(PointerButton::Middle, 100.0, 100.0), &ctx);
    assert_eq!(
        canvas.handle_event(motion(130.0, 90.0), &ctx),
        InputOutcome::ViewChanged
    );
    assert_eq!(canvas.viewport().pan_x(), 30.0);
    assert_eq!(canvas.viewport().pan_y(), -10.0);

    canvas.handle_event(release(PointerButton::Middle, 130.0, 90.0), &ctx);
    assert_eq!(canvas.input_state(), InputState::Idle);
    assert_eq!(canvas.handle_event(motion(200.0, 200.0), &ctx), InputOutcome::Ignored);
}

#[test]
fn test_middle_press_while_drawing_is_ignored() {
    let mut canvas = Canvas::new();
    let ctx = draw_ctx(Units::Micrometers);
    canvas.handle_event(press(PointerButton::Left, 0.0, 0.0), &ctx);
    assert_eq!(
        canvas.handle_event(press(PointerButton::Middle, 5.0, 5.0), &ctx),
        InputOutcome::Ignored
    );
    assert!(matches!(canvas.input_state(), InputState::Drawing { .. }));
}

#[test]
fn test_scroll_zooms_about_cursor() {
    let mut canvas = Canvas::new();
    let ctx = select_ctx();
    let before = canvas.scene_point(200.0, 100.0);

    let outcome = canvas.handle_event(CanvasEvent::Scroll { dy: -1.0, x: 200.0, y: 100.0 }, &ctx);
    assert_eq!(outcome, InputOutcome::ViewChanged);
    assert!((canvas.zoom() - 1.25).abs() < 1e-12);

    let after = canvas.scene_point(200.0, 100.0);
    assert!((before.x - after.x).abs() < 1e-9);
    assert!((before.y - after.y).abs() < 1e-9);

    canvas.handle_event(CanvasEvent::Scroll { dy: 1.0, x: 200.0, y: 100.0 }, &ctx);
    assert!((canvas.zoom() - 1.0).abs() < 1e-12);
}

#[test]
fn test_zoom_has_no_bounds() {
    let mut canvas = Canvas::new();
    let ctx = select_ctx();
    for _ in 0..60 {
        canvas.handle_event(CanvasEvent::Scroll { dy: -1.0, x: 0.0, y: 0.0 }, &ctx);
    }
    assert!(canvas.zoom() > 1.0e5);
    for _ in 0..120 {
        canvas.handle_event(CanvasEvent::Scroll { dy: 1.0, x: 0.0, y: 0.0 }, &ctx);
    }
    assert!(canvas.zoom() < 1.0e-5);
    assert!(canvas.zoom() > 0.0);
}

#[test]
fn test_drag_moves_unlocked_selection() {
    let mut canvas = Canvas::new();
    let ctx = select_ctx();
    let id = canvas
        .add_partition(PartitionShape::new(Rect::new(0.0, 0.0, 10.0, 10.0), Units::Micrometers))
        .unwrap();

    assert_eq!(
        canvas.handle_event(press(PointerButton::Left, 5.0, 5.0), &ctx),
        InputOutcome::SelectionChanged
    );
    assert_eq!(
        canvas.handle_event(motion(15.0, 25.0), &ctx),
        InputOutcome::ShapesMoved(1)
    );
    canvas.handle_event(release(PointerButton::Left, 15.0, 25.0), &ctx);

    let shape = canvas.get_shape(&id).unwrap();
    assert_eq!(shape.scene_bounds(), Rect::new(10.0, 20.0, 10.0, 10.0));
}

#[test]
fn test_drag_leaves_locked_shape_in_place() {
    let mut canvas = Canvas::new();
    let ctx = select_ctx();
    let id = canvas
        .add_partition(
            PartitionShape::new(Rect::new(0.0, 0.0, 10.0, 10.0), Units::Micrometers)
                .with_locked(true),
        )
        .unwrap();

    canvas.handle_event(press(PointerButton::Left, 5.0, 5.0), &ctx);
    assert!(canvas.get_shape(&id).unwrap().selected);
    assert_eq!(
        canvas.handle_event(motion(50.0, 50.0), &ctx),
        InputOutcome::ShapesMoved(0)
    );

    assert_eq!(
        canvas.get_shape(&id).unwrap().scene_bounds(),
        Rect::new(0.0, 0.0, 10.0, 10.0)
    );
}

#[test]
fn test_group_drag_skips_locked_members() {
    let mut canvas = Canvas::new();
    let ctx = select_ctx();
    let free = canvas
        .add_partition(PartitionShape::new(Rect::new(0.0, 0.0, 10.0, 10.0), Units::Micrometers))
        .unwrap();
    let fixed = canvas
        .add_partition(
            PartitionShape::new(Rect::new(20.0, 0.0, 10.0, 10.0), Units::Micrometers)
                .with_locked(true),
        )
        .unwrap();
    canvas.select_all();

    canvas.handle_event(press(PointerButton::Left, 5.0, 5.0), &ctx);
    assert_eq!(
        canvas.handle_event(motion(8.0, 5.0), &ctx),
        InputOutcome::ShapesMoved(1)
    );
    assert_eq!(canvas.selected_count(), 2);
    assert_eq!(canvas.get_shape(&free).unwrap().scene_bounds().x, 3.0);
    assert_eq!(canvas.get_shape(&fixed).unwrap().scene_bounds().x, 20.0);
}

#[test]
fn test_rubber_band_selects_touching_shapes() {
    let mut canvas = Canvas::new();
    let ctx = select_ctx();
    canvas
        .add_partition(PartitionShape::new(Rect::new(0.0, 0.0, 10.0, 10.0), Units::Micrometers))
        .unwrap();
    let far = canvas
        .add_partition(PartitionShape::new(Rect::new(50.0, 50.0, 10.0, 10.0), Units::Micrometers))
        .unwrap();

    canvas.handle_event(press(PointerButton::Left, 100.0, 100.0), &ctx);
    assert!(matches!(canvas.input_state(), InputState::RubberBand { .. }));
    canvas.handle_event(motion(45.0, 45.0), &ctx);
    assert!(matches!(canvas.overlay(), Some(Overlay::SelectionBand { .. })));

    assert_eq!(
        canvas.handle_event(release(PointerButton::Left, 45.0, 45.0), &ctx),
        InputOutcome::SelectionChanged
    );
    assert_eq!(canvas.selected_ids(), vec![far]);
}

#[test]
fn test_ctrl_rubber_band_adds_to_selection() {
    let mut canvas = Canvas::new();
    let ctx = select_ctx();
    let near = canvas
        .add_partition(PartitionShape::new(Rect::new(0.0, 0.0, 10.0, 10.0), Units::Micrometers))
        .unwrap();
    let far = canvas
        .add_partition(PartitionShape::new(Rect::new(50.0, 50.0, 10.0, 10.0), Units::Micrometers))
        .unwrap();

    canvas.handle_event(press(PointerButton::Left, 5.0, 5.0), &ctx);
    canvas.handle_event(release(PointerButton::Left, 5.0, 5.0), &ctx);
    assert_eq!(canvas.selected_ids(), vec![near.clone()]);

    let ctrl_press = CanvasEvent::Press {
        button: PointerButton::Left,
        x: 100.0,
        y: 100.0,
        modifiers: Modifiers::ctrl(),
    };
    canvas.handle_event(ctrl_press, &ctx);
    assert!(matches!(canvas.input_state(), InputState::RubberBand { additive: true, .. }));
    canvas.handle_event(motion(45.0, 45.0), &ctx);
    canvas.handle_event(release(PointerButton::Left, 45.0, 45.0), &ctx);

    assert_eq!(canvas.selected_count(), 2);
    assert_eq!(canvas.selected_ids(), vec![near, far]);
}

#[test]
fn test_no_drag_mode_skips_rubber_band() {
    let mut canvas = Canvas::new();
    canvas.set_drag_mode(DragMode::NoDrag);
    let ctx = select_ctx();
    canvas.handle_event(press(PointerButton::Left, 100.0, 100.0), &ctx);
    assert_eq!(canvas.input_state(), InputState::Idle);
}

#[test]
fn test_hit_tolerance_scales_with_zoom() {
    let mut canvas = Canvas::new();
    let ctx = select_ctx();
    let id = canvas
        .add_partition(PartitionShape::new(Rect::new(0.0, 0.0, 10.0, 10.0), Units::Micrometers))
        .unwrap();
    canvas.viewport_mut().set_zoom(2.0);
    assert_eq!(canvas.hit_tolerance(), 1.5);

    // Two pixels right of the edge at 2x is one scene unit away.
    canvas.handle_event(press(PointerButton::Left, 22.0, 5.0), &ctx);
    assert_eq!(canvas.selected_ids(), vec![id]);
}

#[test]
fn test_cancel_interaction_drops_preview() {
    let mut canvas = Canvas::new();
    let ctx = draw_ctx(Units::Micrometers);
    canvas.handle_event(press(PointerButton::Left, 0.0, 0.0), &ctx);
    canvas.handle_event(motion(20.0, 20.0), &ctx);
    canvas.cancel_interaction();
    assert_eq!(canvas.overlay(), None);
    assert_eq!(
        canvas.handle_event(release(PointerButton::Left, 20.0, 20.0), &ctx),
        InputOutcome::Ignored
    );
    assert_eq!(canvas.shape_count(), 0);
}

proptest! {
    #[test]
    fn prop_small_draw_never_adds_shape(
        w in 0.0f64..=1.0,
        h in 0.0f64..100.0,
        swap in any::<bool>(),
    ) {
        let mut canvas = Canvas::new();
        let ctx = draw_ctx(Units::Micrometers);
        let (w, h) = if swap { (h, w) } else { (w, h) };

        canvas.handle_event(press(PointerButton::Left, 0.0, 0.0), &ctx);
        let outcome = canvas.handle_event(release(PointerButton::Left, w, h), &ctx);
        prop_assert_eq!(outcome, InputOutcome::DrawDiscarded);
        prop_assert_eq!(canvas.shape_count(), 0);
    }
}
