pub mod coordinates_dialog;
pub mod designer_canvas;
pub mod file_dialog;
pub mod status_bar;
pub mod toolbar;
