//! Error handling for ChipPlan
//!
//! Provides the error types shared by the designer and the UI:
//! - Document errors (schema problems found while loading a layout)
//! - Geometry errors (values that cannot describe a partition)
//! - I/O and JSON errors from persistence
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Document error type
///
/// Raised while turning a parsed layout document into partitions. Any one of
/// these rejects the whole document.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DocumentError {
    /// A field required by the active load policy is absent
    #[error("Shape {index}: missing required field '{field}'")]
    MissingField {
        /// Position of the shape record in the document.
        index: usize,
        /// The missing field name.
        field: String,
    },

    /// The `type` tag names a shape kind this build cannot construct
    #[error("Shape {index}: unknown shape type '{kind}'")]
    UnknownShapeType {
        /// Position of the shape record in the document.
        index: usize,
        /// The unrecognised tag.
        kind: String,
    },

    /// A document-level field required by the active load policy is absent
    #[error("Document: missing required field '{field}'")]
    MissingDocumentField {
        /// The missing field name.
        field: String,
    },

    /// Width or height is below zero
    #[error("Shape {index}: negative size {width} x {height}")]
    NegativeSize {
        /// Position of the shape record in the document.
        index: usize,
        /// Recorded width.
        width: f64,
        /// Recorded height.
        height: f64,
    },

    /// A coordinate or dimension is NaN or infinite
    #[error("Shape {index}: '{field}' is not a finite number")]
    NonFiniteGeometry {
        /// Position of the shape record in the document.
        index: usize,
        /// The offending field name.
        field: String,
    },

    /// Two shapes share an id
    #[error("Duplicate shape id '{id}'")]
    DuplicateId {
        /// The repeated id.
        id: String,
    },
}

/// Main error type for ChipPlan
#[derive(Error, Debug)]
pub enum Error {
    /// Document schema error
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Geometry that cannot describe a partition
    #[error("Invalid geometry: {reason}")]
    InvalidGeometry {
        /// Why the geometry was rejected.
        reason: String,
    },

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a geometry error
    pub fn invalid_geometry(reason: impl Into<String>) -> Self {
        Error::InvalidGeometry {
            reason: reason.into(),
        }
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
