//! Error types for object graph access.

use lopdf::ObjectId;
use thiserror::Error;

/// Errors raised while reading or writing the PDF object graph.
#[derive(Debug, Error)]
pub enum CosError {
    /// Indirect object not present in the document.
    #[error("object {id:?} not found")]
    MissingObject { id: ObjectId },

    /// Indirect object exists but is not a dictionary.
    #[error("object {id:?} is a {found}, expected a Dictionary")]
    NotADictionary { id: ObjectId, found: &'static str },

    /// Entry present with the wrong object kind.
    #[error("/{key} is a {found}, expected {expected}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Reference chain or `/Parent` chain loops back on itself.
    #[error("reference cycle through object {id:?}")]
    ReferenceCycle { id: ObjectId },
}

/// Result type alias for object graph operations.
pub type Result<T> = std::result::Result<T, CosError>;

impl CosError {
    /// Create a TypeMismatch error.
    pub fn type_mismatch(key: impl Into<String>, expected: &'static str, found: &'static str) -> Self {
        Self::TypeMismatch {
            key: key.into(),
            expected,
            found,
        }
    }
}
