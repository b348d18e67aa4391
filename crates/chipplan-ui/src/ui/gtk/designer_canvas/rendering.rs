//! Cairo drawing for the partition canvas.

use gtk4::cairo::{Context, FontSlant, FontWeight};
use lyon::path::{Event, Path};

use chipplan_designer::{
    DesignerShape, DesignerState, Overlay, PartitionShape, Point, Rect, Rgba, ShapeStyle,
};

const SELECTED_OUTLINE: Rgba = Rgba::new(48, 140, 198, 255);
const DASH_PX: f64 = 4.0;

fn set_color(cr: &Context, color: Rgba) {
    let (r, g, b, a) = color.to_unit();
    cr.set_source_rgba(r, g, b, a);
}

/// Appends the lyon path to the cairo path, shifted by `offset`.
fn trace(cr: &Context, path: &Path, offset: Point) {
    cr.new_path();
    for event in path.iter() {
        match event {
            Event::Begin { at } => {
                cr.move_to(at.x as f64 + offset.x, at.y as f64 + offset.y);
            }
            Event::Line { to, .. } => {
                cr.line_to(to.x as f64 + offset.x, to.y as f64 + offset.y);
            }
            Event::Quadratic { ctrl, to, .. } => {
                // Cairo has no quadratic segments; raise to cubic.
                let (x0, y0) = cr.current_point().unwrap_or((0.0, 0.0));
                let (cx, cy) = (ctrl.x as f64 + offset.x, ctrl.y as f64 + offset.y);
                let (tx, ty) = (to.x as f64 + offset.x, to.y as f64 + offset.y);
                cr.curve_to(
                    x0 + (2.0 / 3.0) * (cx - x0),
                    y0 + (2.0 / 3.0) * (cy - y0),
                    tx + (2.0 / 3.0) * (cx - tx),
                    ty + (2.0 / 3.0) * (cy - ty),
                    tx,
                    ty,
                );
            }
            Event::Cubic {
                ctrl1, ctrl2, to, ..
            } => {
                cr.curve_to(
                    ctrl1.x as f64 + offset.x,
                    ctrl1.y as f64 + offset.y,
                    ctrl2.x as f64 + offset.x,
                    ctrl2.y as f64 + offset.y,
                    to.x as f64 + offset.x,
                    to.y as f64 + offset.y,
                );
            }
            Event::End { close, .. } => {
                if close {
                    cr.close_path();
                }
            }
        }
    }
}

/// Fills then strokes the current path. Widths are in screen pixels.
fn paint_current(cr: &Context, style: ShapeStyle, zoom: f64) {
    set_color(cr, style.fill);
    let _ = cr.fill_preserve();

    set_color(cr, style.stroke);
    cr.set_line_width(1.0 / zoom);
    if style.dashed {
        cr.set_dash(&[DASH_PX / zoom, DASH_PX / zoom], 0.0);
    } else {
        cr.set_dash(&[], 0.0);
    }
    let _ = cr.stroke();
}

fn draw_partition(cr: &Context, shape: &PartitionShape, zoom: f64) {
    trace(cr, &shape.shape().render(), shape.offset());
    paint_current(cr, shape.style(), zoom);

    if shape.selected {
        let bounds = shape.scene_bounds();
        let margin = 2.0 / zoom;
        cr.rectangle(
            bounds.x - margin,
            bounds.y - margin,
            bounds.width + 2.0 * margin,
            bounds.height + 2.0 * margin,
        );
        set_color(cr, SELECTED_OUTLINE);
        cr.set_line_width(1.5 / zoom);
        cr.set_dash(&[DASH_PX / zoom, 2.0 / zoom], 0.0);
        let _ = cr.stroke();
    }
}

fn draw_overlay(cr: &Context, overlay: &Overlay, zoom: f64) {
    let style = match overlay {
        Overlay::Preview { .. } => ShapeStyle::PREVIEW,
        Overlay::SelectionBand { .. } => ShapeStyle::SELECTION_BAND,
    };
    let Rect {
        x,
        y,
        width,
        height,
    } = overlay.rect();
    cr.new_path();
    cr.rectangle(x, y, width, height);
    paint_current(cr, style, zoom);
}

/// Cairo places text by its baseline; the anchor is the label's top-left.
fn label_baseline(x: f64, y: f64, font_size: f64) -> (f64, f64) {
    (x, y + font_size)
}

/// Renders the scene: partitions in draw order, the active overlay, then
/// dimension labels at a fixed screen size.
pub(super) fn draw(cr: &Context, state: &DesignerState, width: f64, height: f64, font_size: f64) {
    cr.set_source_rgb(1.0, 1.0, 1.0);
    cr.rectangle(0.0, 0.0, width, height);
    let _ = cr.fill();

    let canvas = &state.canvas;
    let viewport = canvas.viewport();
    let zoom = viewport.zoom();

    let _ = cr.save();
    cr.translate(viewport.pan_x(), viewport.pan_y());
    cr.scale(zoom, zoom);

    for shape in canvas.shapes() {
        draw_partition(cr, shape, zoom);
    }
    if let Some(overlay) = canvas.overlay() {
        draw_overlay(cr, &overlay, zoom);
    }
    let _ = cr.restore();

    // Labels stay in pixel space so they do not scale with zoom.
    cr.select_font_face("Sans", FontSlant::Normal, FontWeight::Normal);
    cr.set_font_size(font_size);
    cr.set_source_rgb(0.0, 0.0, 0.0);
    for shape in canvas.shapes() {
        let label = shape.label();
        let (px, py) = viewport.world_point_to_pixel(&label.anchor);
        let (bx, by) = label_baseline(px, py, font_size);
        cr.move_to(bx, by);
        let _ = cr.show_text(&label.text);
    }
}
