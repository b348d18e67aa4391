//! Serialization and deserialization for layout documents.
//!
//! A layout is a JSON object holding the session unit and the ordered list of
//! partition records:
//!
//! ```json
//! {
//!   "units": "mm",
//!   "shapes": [
//!     { "id": "…", "type": "rect", "x": 10, "y": 10, "width": 50, "height": 30,
//!       "units": "mm", "locked": false, "properties": {} }
//!   ]
//! }
//! ```
//!
//! Loading is all-or-nothing: a single bad record rejects the document.

use std::collections::HashSet;
use std::path::Path;

use chipplan_core::{DocumentError, Error, LoadPolicy, Units};
use serde::{Deserialize, Serialize};

use crate::partition::{PartitionShape, Properties};

/// Complete layout document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DesignFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<Units>,
    #[serde(default)]
    pub shapes: Vec<ShapeRecord>,
}

/// Serialized partition as it appears on disk.
///
/// Every field is optional at this level; [`PartitionShape::from_record`]
/// decides which absences the active [`LoadPolicy`] tolerates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<Units>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
}

impl DesignFile {
    /// Create an empty document in the given units
    pub fn new(units: Units) -> Self {
        Self {
            units: Some(units),
            shapes: Vec::new(),
        }
    }

    /// Snapshot the given partitions in draw order
    pub fn from_partitions<'a>(
        units: Units,
        partitions: impl IntoIterator<Item = &'a PartitionShape>,
    ) -> Self {
        Self {
            units: Some(units),
            shapes: partitions.into_iter().map(PartitionShape::to_record).collect(),
        }
    }

    /// Pretty JSON with two-space indentation
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a document from JSON text
    pub fn from_json(content: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(content)?)
    }

    /// Save design to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let json = self.to_json()?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }

    /// Load design from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Document unit after applying the load policy.
    ///
    /// `None` means the document names no unit and the caller keeps its own.
    pub fn document_units(&self, policy: LoadPolicy) -> Result<Option<Units>, DocumentError> {
        match self.units {
            Some(units) => Ok(Some(units)),
            None if policy.tolerant => Ok(None),
            None => Err(DocumentError::MissingDocumentField {
                field: "units".to_string(),
            }),
        }
    }

    /// Convert every record, failing on the first invalid one
    pub fn to_partitions(&self, policy: LoadPolicy) -> Result<Vec<PartitionShape>, DocumentError> {
        let units = self.document_units(policy)?;
        let mut seen = HashSet::new();
        let mut partitions = Vec::with_capacity(self.shapes.len());

        for (index, record) in self.shapes.iter().enumerate() {
            let partition = PartitionShape::from_record(record, index, policy, units)?;
            if !seen.insert(partition.id().clone()) {
                return Err(DocumentError::DuplicateId {
                    id: partition.id().to_string(),
                });
            }
            partitions.push(partition);
        }

        Ok(partitions)
    }
}
