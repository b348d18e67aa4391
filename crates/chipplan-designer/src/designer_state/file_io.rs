//! File I/O operations (save, load, new) for designer state.

use std::path::Path;

use anyhow::Context;

use chipplan_core::Error;

use super::DesignerState;
use crate::serialization::DesignFile;

impl DesignerState {
    /// Save design to file.
    ///
    /// Returns the number of partitions written.
    pub fn save_document(&mut self, path: impl AsRef<Path>) -> anyhow::Result<usize> {
        let path = path.as_ref();
        let design = DesignFile::from_partitions(self.session.current_units, self.canvas.shapes());
        let count = design.shapes.len();

        design
            .save_to_file(path)
            .context("Failed to write design file")?;

        self.current_file_path = Some(path.to_path_buf());
        self.is_modified = false;
        self.design_name = design_name_for(path);
        self.set_status(format!("Saved {} shapes to {}", count, path.display()));

        Ok(count)
    }

    /// Load design from file.
    ///
    /// The whole document is validated before the scene is touched, so a
    /// failure leaves the current design as it was.
    pub fn load_document(&mut self, path: impl AsRef<Path>) -> anyhow::Result<usize> {
        let path = path.as_ref();
        let design = DesignFile::load_from_file(path).map_err(|e| {
            let what = match e {
                Error::Io(_) => "Failed to read design file",
                _ => "Failed to parse design file",
            };
            anyhow::Error::new(e).context(what)
        })?;
        let units = design
            .document_units(self.load_policy)
            .context("Invalid design file")?;
        let shapes = design
            .to_partitions(self.load_policy)
            .context("Invalid design file")?;
        let count = shapes.len();

        self.canvas.replace_shapes(shapes);
        if let Some(units) = units {
            self.session.current_units = units;
        }

        self.current_file_path = Some(path.to_path_buf());
        self.is_modified = false;
        self.design_name = design_name_for(path);
        self.set_status(format!("Loaded {} shapes from {}", count, path.display()));

        Ok(count)
    }

    /// Create new design: empty scene, default view, no file.
    pub fn new_design(&mut self) {
        self.canvas.clear();
        self.canvas.viewport_mut().reset();
        self.current_file_path = None;
        self.is_modified = false;
        self.design_name = "Untitled".to_string();
        self.set_status("New design");
    }

    /// Mark design as modified.
    pub fn mark_modified(&mut self) {
        self.is_modified = true;
    }

    /// Design name with a trailing `*` when there are unsaved changes.
    pub fn display_name(&self) -> String {
        if self.is_modified {
            format!("{}*", self.design_name)
        } else {
            self.design_name.clone()
        }
    }
}

fn design_name_for(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Untitled".to_string())
}
