//! Configuration options for form value updates.

use serde::{Deserialize, Serialize};

/// What `set_value` does with a value no widget has an appearance for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownValuePolicy {
    /// Store the value and turn every widget off.
    #[default]
    Allow,
    /// Fail with `FormError::UnknownValue` before touching the document.
    Reject,
}

/// What `set_value` does with a widget whose appearance structure is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingAppearancePolicy {
    /// Leave the widget as is, log a warning and report it.
    #[default]
    Skip,
    /// Fail with `FormError::MissingAppearance` before touching the document.
    Reject,
}

/// Options controlling how field values are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormOptions {
    /// Handling of values no widget has an appearance for.
    pub unknown_value: UnknownValuePolicy,

    /// Handling of widgets without a normal appearance.
    pub missing_appearance: MissingAppearancePolicy,
}

impl FormOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that refuse any update the widgets cannot represent.
    ///
    /// Both checks run before the document is modified, so a failed update
    /// leaves the field and all of its widgets untouched.
    pub fn strict() -> Self {
        Self {
            unknown_value: UnknownValuePolicy::Reject,
            missing_appearance: MissingAppearancePolicy::Reject,
        }
    }

    #[must_use]
    pub fn with_unknown_value(mut self, policy: UnknownValuePolicy) -> Self {
        self.unknown_value = policy;
        self
    }

    #[must_use]
    pub fn with_missing_appearance(mut self, policy: MissingAppearancePolicy) -> Self {
        self.missing_appearance = policy;
        self
    }
}
