//! "Add by Coordinates" dialog.
//!
//! GTK dialogs are asynchronous, so all four values are collected in one
//! modal window and handed over together once the user confirms.

use chipplan_core::Units;
use chipplan_designer::CoordinateField;
use gtk4::prelude::*;
use gtk4::{Align, Box, Button, Grid, Label, Orientation, SpinButton, Window};

const LIMIT: f64 = 1.0e9;

/// Values entered by the user, in [`CoordinateField::ALL`] order.
pub type CoordinateValues = [f64; 4];

/// Shows the dialog and calls `on_accept` with the entered values.
/// Closing or cancelling the dialog calls nothing.
pub fn show_coordinates_dialog(
    parent: Option<&Window>,
    units: Units,
    on_accept: impl Fn(CoordinateValues) + 'static,
) {
    let window = Window::builder()
        .title("Add by Coordinates")
        .modal(true)
        .resizable(false)
        .build();
    if let Some(parent) = parent {
        window.set_transient_for(Some(parent));
    }

    let content = Box::new(Orientation::Vertical, 12);
    content.set_margin_top(12);
    content.set_margin_bottom(12);
    content.set_margin_start(12);
    content.set_margin_end(12);

    let grid = Grid::new();
    grid.set_row_spacing(6);
    grid.set_column_spacing(12);

    let spins: Vec<SpinButton> = CoordinateField::ALL
        .iter()
        .enumerate()
        .map(|(row, field)| {
            let label = Label::new(Some(&field.prompt(units)));
            label.set_halign(Align::End);
            grid.attach(&label, 0, row as i32, 1, 1);

            let spin = SpinButton::with_range(-LIMIT, LIMIT, 1.0);
            spin.set_digits(3);
            spin.set_value(0.0);
            spin.set_activates_default(true);
            grid.attach(&spin, 1, row as i32, 1, 1);
            spin
        })
        .collect();
    content.append(&grid);

    let buttons = Box::new(Orientation::Horizontal, 6);
    buttons.set_halign(Align::End);
    let cancel = Button::with_label("Cancel");
    let ok = Button::with_label("OK");
    ok.add_css_class("suggested-action");
    buttons.append(&cancel);
    buttons.append(&ok);
    content.append(&buttons);

    window.set_child(Some(&content));
    window.set_default_widget(Some(&ok));

    let window_cancel = window.clone();
    cancel.connect_clicked(move |_| window_cancel.close());

    let window_ok = window.clone();
    ok.connect_clicked(move |_| {
        let mut values = [0.0; 4];
        for (slot, spin) in values.iter_mut().zip(&spins) {
            // Commit text typed but not yet parsed.
            spin.update();
            *slot = spin.value();
        }
        window_ok.close();
        on_accept(values);
    });

    window.present();
}

/// Adapts collected values to the designer's prompt interface.
pub fn prompt_from(values: CoordinateValues) -> impl FnMut(CoordinateField, Units) -> Option<f64> {
    move |field, _units| {
        let index = CoordinateField::ALL.iter().position(|f| *f == field)?;
        values.get(index).copied()
    }
}
