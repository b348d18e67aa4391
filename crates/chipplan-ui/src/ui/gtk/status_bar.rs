use gtk4::prelude::*;
use gtk4::{Align, Box, Label, Orientation};

/// Bottom bar: latest status message on the left, view and selection info on
/// the right.
#[derive(Clone)]
pub struct StatusBar {
    pub widget: Box,
    message_label: Label,
    selection_label: Label,
    view_label: Label,
}

impl StatusBar {
    pub fn new() -> Self {
        let widget = Box::new(Orientation::Horizontal, 0);
        widget.set_height_request(26);
        widget.add_css_class("status-bar");
        widget.set_margin_start(5);
        widget.set_margin_end(5);
        widget.set_margin_top(2);
        widget.set_margin_bottom(2);

        let message_label = Label::new(Some("Ready"));
        message_label.set_hexpand(true);
        message_label.set_halign(Align::Start);
        message_label.set_ellipsize(gtk4::pango::EllipsizeMode::Middle);
        widget.append(&message_label);

        let right_box = Box::new(Orientation::Horizontal, 10);
        right_box.set_halign(Align::End);

        let selection_label = Label::new(None);
        selection_label.add_css_class("dim-label");
        right_box.append(&selection_label);

        right_box.append(&Label::new(Some("|")));

        let view_label = Label::new(None);
        view_label.add_css_class("monospace");
        right_box.append(&view_label);

        widget.append(&right_box);

        Self {
            widget,
            message_label,
            selection_label,
            view_label,
        }
    }

    pub fn set_message(&self, message: &str) {
        self.message_label.set_text(message);
    }

    pub fn set_selection(&self, selected: usize, total: usize) {
        self.selection_label
            .set_text(&format!("{} of {} selected", selected, total));
    }

    pub fn set_view(&self, text: &str) {
        self.view_label.set_text(text);
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}
