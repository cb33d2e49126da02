//! Outcome of propagating a field value to its widgets.

use std::fmt;

use lopdf::ObjectId;
use serde::Serialize;

/// A widget left untouched during a value update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedWidget {
    pub widget: ObjectId,
    pub reason: String,
}

/// What `RadioButton::set_value` did to each widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    /// Value written to `/V`.
    pub value: String,
    /// Widgets whose applied state is now the value.
    pub selected: Vec<ObjectId>,
    /// Widgets whose applied state is now `Off`.
    pub cleared: Vec<ObjectId>,
    /// Widgets that could not be inspected or updated.
    pub skipped: Vec<SkippedWidget>,
}

impl SyncReport {
    pub(crate) fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            ..Self::default()
        }
    }

    /// True when every widget was brought in line with the value.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Number of widgets visited.
    pub fn widget_count(&self) -> usize {
        self.selected.len() + self.cleared.len() + self.skipped.len()
    }
}

impl fmt::Display for SyncReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "value /{}: {} selected, {} cleared, {} skipped",
            self.value,
            self.selected.len(),
            self.cleared.len(),
            self.skipped.len()
        )?;
        for skipped in &self.skipped {
            let (number, generation) = skipped.widget;
            write!(f, "\n  skipped {number} {generation} R: {}", skipped.reason)?;
        }
        Ok(())
    }
}
