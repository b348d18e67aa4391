use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, Box, Orientation};

use chipplan_designer::DesignerState;
use chipplan_settings::{Config, SettingsManager};

use crate::ui::gtk::coordinates_dialog::{prompt_from, show_coordinates_dialog};
use crate::ui::gtk::designer_canvas::DesignerCanvas;
use crate::ui::gtk::file_dialog::{choose_open_path, choose_save_path, show_error_dialog};
use crate::ui::gtk::status_bar::StatusBar;
use crate::ui::gtk::toolbar::{DesignerToolbar, ToolbarAction};

const APP_ID: &str = "io.github.chipplan.ChipPlan";
const DEFAULT_FILE_NAME: &str = "layout.json";

pub fn main() {
    let app = Application::builder().application_id(APP_ID).build();
    app.connect_activate(build_ui);
    app.run();
}

/// Everything the window's handlers share.
struct AppContext {
    window: ApplicationWindow,
    state: Rc<RefCell<DesignerState>>,
    config: RefCell<Config>,
    canvas: Rc<DesignerCanvas>,
    toolbar: DesignerToolbar,
    status_bar: StatusBar,
}

impl AppContext {
    fn parent(&self) -> &gtk4::Window {
        self.window.upcast_ref()
    }

    /// Pushes state into the status bar, title and units selector.
    fn sync_widgets(&self) {
        let units = {
            let state = self.state.borrow();
            let canvas = &state.canvas;
            self.status_bar.set_message(state.status());
            self.status_bar
                .set_selection(canvas.selected_count(), canvas.shape_count());
            self.status_bar.set_view(&canvas.viewport().to_string());
            self.window
                .set_title(Some(&format!("ChipPlan - {}", state.display_name())));
            state.current_units()
        };
        // Setting the dropdown fires its notify handler, which borrows state.
        self.toolbar.show_units(units);
    }

    fn remember_file(&self, path: PathBuf) {
        let mut config = self.config.borrow_mut();
        config.add_recent_file(path);
        if let Err(e) = SettingsManager::save(&config) {
            tracing::warn!("Failed to save settings: {}", e);
        }
        self.toolbar.set_recent_files(&config.recent_files);
    }

    fn on_action(self: &Rc<Self>, action: ToolbarAction) {
        tracing::debug!("Toolbar action {:?}", action);
        match action {
            ToolbarAction::New => {
                self.state.borrow_mut().new_design();
                self.canvas.refresh();
            }
            ToolbarAction::AddByCoordinates => self.add_by_coordinates(),
            ToolbarAction::ToggleLock => {
                self.state.borrow_mut().toggle_lock_selected();
                self.canvas.refresh();
            }
            ToolbarAction::Delete => {
                self.state.borrow_mut().delete_selected();
                self.canvas.refresh();
            }
            ToolbarAction::Save => self.save(),
            ToolbarAction::Load => self.load(),
        }
    }

    fn add_by_coordinates(self: &Rc<Self>) {
        let units = self.state.borrow().current_units();
        let ctx = self.clone();
        show_coordinates_dialog(Some(self.parent()), units, move |values| {
            let mut prompt = prompt_from(values);
            let result = ctx.state.borrow_mut().add_by_coordinates(&mut prompt);
            match result {
                Ok(_) => ctx.canvas.refresh(),
                Err(e) => show_error_dialog(
                    "Cannot add partition",
                    &e.to_string(),
                    Some(ctx.parent()),
                ),
            }
        });
    }

    fn save(self: &Rc<Self>) {
        let suggested = self
            .state
            .borrow()
            .current_file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string());

        let ctx = self.clone();
        choose_save_path(Some(self.parent()), &suggested, move |path| {
            let result = ctx.state.borrow_mut().save_document(&path);
            match result {
                Ok(_) => ctx.remember_file(path),
                Err(e) => {
                    tracing::error!("Save failed: {:#}", e);
                    show_error_dialog(
                        "Save failed",
                        &format!("{:#}", e),
                        Some(ctx.parent()),
                    );
                }
            }
            ctx.sync_widgets();
        });
    }

    fn load(self: &Rc<Self>) {
        let ctx = self.clone();
        choose_open_path(Some(self.parent()), move |path| ctx.load_path(path));
    }

    /// Loads `path` into the scene, from the open dialog or the recent menu.
    fn load_path(&self, path: PathBuf) {
        let result = self.state.borrow_mut().load_document(&path);
        match result {
            Ok(_) => self.remember_file(path),
            Err(e) => {
                tracing::error!("Load failed: {:#}", e);
                show_error_dialog("Load failed", &format!("{:#}", e), Some(self.parent()));
            }
        }
        self.canvas.refresh();
    }
}

fn build_ui(app: &Application) {
    let config = SettingsManager::load();
    let state = Rc::new(RefCell::new(DesignerState::with_policies(
        config.editor.draw,
        config.editor.load,
        config.editor.default_units,
    )));

    let window = ApplicationWindow::builder()
        .application(app)
        .title("ChipPlan")
        .default_width(config.ui.window_width as i32)
        .default_height(config.ui.window_height as i32)
        .build();

    let toolbar = DesignerToolbar::new(config.editor.default_units);
    let canvas = DesignerCanvas::new(state.clone(), config.ui.label_font_size);
    let status_bar = StatusBar::new();

    let main_box = Box::new(Orientation::Vertical, 0);
    main_box.append(&toolbar.widget);
    main_box.append(&canvas.widget);
    main_box.append(&status_bar.widget);
    window.set_child(Some(&main_box));

    let ctx = Rc::new(AppContext {
        window: window.clone(),
        state: state.clone(),
        config: RefCell::new(config),
        canvas: canvas.clone(),
        toolbar,
        status_bar,
    });

    // Weak handles break the canvas -> callback -> context -> canvas cycle.
    let ctx_changed = Rc::downgrade(&ctx);
    canvas.connect_changed(move || {
        if let Some(ctx) = ctx_changed.upgrade() {
            ctx.sync_widgets();
        }
    });

    let ctx_action = Rc::downgrade(&ctx);
    ctx.toolbar.connect_action(move |action| {
        if let Some(ctx) = ctx_action.upgrade() {
            ctx.on_action(action);
        }
    });

    let ctx_recent = Rc::downgrade(&ctx);
    ctx.toolbar.connect_recent(move |path| {
        if let Some(ctx) = ctx_recent.upgrade() {
            ctx.load_path(path);
        }
    });
    ctx.toolbar.set_recent_files(&ctx.config.borrow().recent_files);

    let ctx_draw = Rc::downgrade(&ctx);
    ctx.toolbar.connect_draw_toggled(move |on| {
        if let Some(ctx) = ctx_draw.upgrade() {
            ctx.state.borrow_mut().toggle_draw_mode(on);
            ctx.canvas.refresh();
        }
    });

    let ctx_units = Rc::downgrade(&ctx);
    ctx.toolbar.connect_units_changed(move |units| {
        if let Some(ctx) = ctx_units.upgrade() {
            if ctx.state.borrow().current_units() == units {
                return;
            }
            ctx.state.borrow_mut().change_units(units);
            ctx.canvas.refresh();
        }
    });

    // The window owns the context for its lifetime.
    let ctx_close = ctx.clone();
    window.connect_close_request(move |_| {
        let config = ctx_close.config.borrow();
        if let Err(e) = SettingsManager::save(&config) {
            tracing::warn!("Failed to save settings: {}", e);
        }
        gtk4::glib::Propagation::Proceed
    });

    ctx.sync_widgets();
    window.present();
    tracing::info!("ChipPlan window ready");
}
