use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use chipplan_core::Units;
use gtk4::prelude::*;
use gtk4::{
    Box, Button, DropDown, Label, MenuButton, Orientation, Popover, Separator, ToggleButton,
};

/// One-shot commands offered by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    New,
    AddByCoordinates,
    ToggleLock,
    Delete,
    Save,
    Load,
}

impl ToolbarAction {
    pub const ALL: [ToolbarAction; 6] = [
        ToolbarAction::New,
        ToolbarAction::AddByCoordinates,
        ToolbarAction::ToggleLock,
        ToolbarAction::Delete,
        ToolbarAction::Save,
        ToolbarAction::Load,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ToolbarAction::New => "New",
            ToolbarAction::AddByCoordinates => "Add by Coords",
            ToolbarAction::ToggleLock => "Toggle Lock Selected",
            ToolbarAction::Delete => "Delete Selected",
            ToolbarAction::Save => "Save JSON",
            ToolbarAction::Load => "Load JSON",
        }
    }

    pub fn tooltip(&self) -> &'static str {
        match self {
            ToolbarAction::New => "Start an empty layout",
            ToolbarAction::AddByCoordinates => "Add a rectangle from typed coordinates",
            ToolbarAction::ToggleLock => "Lock or unlock the selected partitions",
            ToolbarAction::Delete => "Delete the selected partitions (Del)",
            ToolbarAction::Save => "Save the layout to a JSON file",
            ToolbarAction::Load => "Load a layout from a JSON file",
        }
    }
}

type RecentCallback = Rc<dyn Fn(PathBuf)>;

/// Menu entry text for a recent file: file name, then the full path.
pub fn recent_label(path: &Path) -> String {
    match path.file_name() {
        Some(name) => format!("{} ({})", name.to_string_lossy(), path.display()),
        None => path.display().to_string(),
    }
}

/// Top toolbar: draw toggle, commands, recent files and the units selector.
pub struct DesignerToolbar {
    pub widget: Box,
    pub draw_toggle: ToggleButton,
    pub units_dropdown: DropDown,
    buttons: Vec<(ToolbarAction, Button)>,
    recent_button: MenuButton,
    recent_list: Box,
    on_recent: RefCell<Option<RecentCallback>>,
}

impl DesignerToolbar {
    pub fn new(units: Units) -> Self {
        let widget = Box::new(Orientation::Horizontal, 6);
        widget.add_css_class("toolbar");
        widget.set_margin_start(6);
        widget.set_margin_end(6);
        widget.set_margin_top(4);
        widget.set_margin_bottom(4);

        let draw_toggle = ToggleButton::with_label("Draw Rect");
        draw_toggle.set_tooltip_text(Some("Drag with the left button to draw rectangles"));
        widget.append(&draw_toggle);

        let buttons: Vec<(ToolbarAction, Button)> = ToolbarAction::ALL
            .iter()
            .map(|action| {
                let button = Button::with_label(action.label());
                button.set_tooltip_text(Some(action.tooltip()));
                widget.append(&button);
                (*action, button)
            })
            .collect();

        let recent_list = Box::new(Orientation::Vertical, 2);
        let recent_popover = Popover::new();
        recent_popover.set_child(Some(&recent_list));
        let recent_button = MenuButton::builder()
            .label("Recent")
            .tooltip_text("Open a recently used layout")
            .popover(&recent_popover)
            .sensitive(false)
            .build();
        widget.append(&recent_button);

        widget.append(&Separator::new(Orientation::Vertical));
        widget.append(&Label::new(Some("Units:")));

        let labels: Vec<&str> = Units::ALL.iter().map(|u| u.label()).collect();
        let units_dropdown = DropDown::from_strings(&labels);
        units_dropdown.set_selected(units.index() as u32);
        widget.append(&units_dropdown);

        Self {
            widget,
            draw_toggle,
            units_dropdown,
            buttons,
            recent_button,
            recent_list,
            on_recent: RefCell::new(None),
        }
    }

    /// Routes clicks on every command button to `handler`.
    pub fn connect_action(&self, handler: impl Fn(ToolbarAction) + 'static) {
        let handler = Rc::new(handler);
        for (action, button) in &self.buttons {
            let action = *action;
            let handler = handler.clone();
            button.connect_clicked(move |_| handler(action));
        }
    }

    pub fn connect_draw_toggled(&self, handler: impl Fn(bool) + 'static) {
        self.draw_toggle
            .connect_toggled(move |toggle| handler(toggle.is_active()));
    }

    pub fn connect_units_changed(&self, handler: impl Fn(Units) + 'static) {
        self.units_dropdown.connect_selected_notify(move |dropdown| {
            if let Some(units) = Units::from_index(dropdown.selected() as usize) {
                handler(units);
            }
        });
    }

    /// Registers the handler run when an entry of the recent menu is picked.
    pub fn connect_recent(&self, handler: impl Fn(PathBuf) + 'static) {
        *self.on_recent.borrow_mut() = Some(Rc::new(handler));
    }

    /// Rebuilds the recent menu, most recent first.
    pub fn set_recent_files(&self, files: &[PathBuf]) {
        while let Some(child) = self.recent_list.first_child() {
            self.recent_list.remove(&child);
        }
        let handler = self.on_recent.borrow().clone();
        for path in files {
            let entry = Button::with_label(&recent_label(path));
            entry.add_css_class("flat");
            let path = path.clone();
            let handler = handler.clone();
            let menu = self.recent_button.clone();
            entry.connect_clicked(move |_| {
                menu.popdown();
                if let Some(handler) = handler.as_ref() {
                    handler(path.clone());
                }
            });
            self.recent_list.append(&entry);
        }
        self.recent_button.set_sensitive(!files.is_empty());
    }

    /// Selects `units` in the dropdown unless it is already shown.
    pub fn show_units(&self, units: Units) {
        let index = units.index() as u32;
        if self.units_dropdown.selected() != index {
            self.units_dropdown.set_selected(index);
        }
    }
}
