//! File dialog helpers for layout documents.
//!
//! Uses `FileChooserDialog` rather than `FileChooserNative`; the portal-based
//! native chooser is unreliable on KDE and some Wayland compositors.

use std::path::PathBuf;

use gtk4::prelude::*;
use gtk4::{
    ButtonsType, FileChooserAction, FileChooserDialog, FileFilter, MessageDialog, MessageType,
    ResponseType,
};

fn json_filter() -> FileFilter {
    let filter = FileFilter::new();
    filter.set_name(Some("JSON Files (*.json)"));
    filter.add_pattern("*.json");
    filter
}

fn chooser(
    title: &str,
    parent: Option<&gtk4::Window>,
    action: FileChooserAction,
    accept: &str,
) -> FileChooserDialog {
    let dlg = FileChooserDialog::new(
        Some(title),
        parent,
        action,
        &[("Cancel", ResponseType::Cancel), (accept, ResponseType::Accept)],
    );
    dlg.set_default_size(900, 700);
    dlg.set_modal(true);
    dlg.add_filter(&json_filter());
    dlg
}

/// Runs `on_chosen` with the picked path once the dialog is accepted.
/// Cancelling does nothing.
fn run_chooser(dlg: FileChooserDialog, on_chosen: impl Fn(PathBuf) + 'static) {
    dlg.connect_response(move |d, response| {
        if response == ResponseType::Accept {
            if let Some(path) = d.file().and_then(|f| f.path()) {
                on_chosen(path);
            }
        }
        d.destroy();
    });
    dlg.present();
}

/// Asks for a layout file to open.
pub fn choose_open_path(parent: Option<&gtk4::Window>, on_chosen: impl Fn(PathBuf) + 'static) {
    run_chooser(
        chooser("Open JSON", parent, FileChooserAction::Open, "Open"),
        on_chosen,
    );
}

/// Asks for a path to save a layout to.
pub fn choose_save_path(
    parent: Option<&gtk4::Window>,
    suggested_name: &str,
    on_chosen: impl Fn(PathBuf) + 'static,
) {
    let dlg = chooser("Save JSON", parent, FileChooserAction::Save, "Save");
    dlg.set_current_name(suggested_name);
    run_chooser(dlg, on_chosen);
}

/// Show a modal error dialog with a title and detail message.
pub fn show_error_dialog(title: &str, message: &str, parent: Option<&gtk4::Window>) {
    let mut builder = MessageDialog::builder()
        .message_type(MessageType::Error)
        .buttons(ButtonsType::Ok)
        .text(title)
        .secondary_text(message);

    if let Some(win) = parent {
        builder = builder.transient_for(win).modal(true);
    }

    let dialog = builder.build();
    dialog.connect_response(|d, _| d.destroy());
    dialog.present();
}
