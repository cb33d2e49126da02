//! Error types for form field operations.

use acro_cos::CosError;
use lopdf::ObjectId;
use thiserror::Error;

use crate::field::FieldKind;

/// Errors that can occur when reading or updating form fields.
#[derive(Debug, Error)]
pub enum FormError {
    /// Object graph access failed.
    #[error(transparent)]
    Cos(#[from] CosError),

    /// Field attribute present with the wrong object kind.
    #[error("field {field:?} /{key} is a {found}, expected {expected}")]
    TypeMismatch {
        field: ObjectId,
        key: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// Widget has no usable normal appearance.
    #[error("widget {widget:?} has no normal appearance")]
    MissingAppearance { widget: ObjectId },

    /// No widget of the field has an appearance for the value.
    #[error("no widget of field {field} has an appearance for '{value}'; known: {known:?}")]
    UnknownValue {
        field: String,
        value: String,
        known: Vec<String>,
    },

    /// Document catalog has no `/AcroForm`.
    #[error("document has no interactive form")]
    MissingAcroForm,

    /// No field with the given fully qualified name.
    #[error("field not found: {name}")]
    FieldNotFound { name: String },

    /// Field exists but is not a radio button group.
    #[error("field {name} is a {kind}, not a radio button")]
    NotARadioButton { name: String, kind: FieldKind },
}

/// Result type for form operations.
pub type Result<T> = std::result::Result<T, FormError>;

impl FormError {
    /// Create a TypeMismatch error.
    pub fn type_mismatch(
        field: ObjectId,
        key: &'static str,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            field,
            key,
            expected,
            found,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FormError::type_mismatch((5, 0), "V", "Name", "String");
        assert_eq!(err.to_string(), "field (5, 0) /V is a String, expected Name");

        let err = FormError::NotARadioButton {
            name: "agree".to_string(),
            kind: FieldKind::Checkbox,
        };
        assert_eq!(err.to_string(), "field agree is a check box, not a radio button");
    }

    #[test]
    fn test_cos_error_is_transparent() {
        let err: FormError = CosError::MissingObject { id: (9, 0) }.into();
        assert_eq!(err.to_string(), "object (9, 0) not found");
    }
}
