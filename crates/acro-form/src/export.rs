//! Export values of radio button groups.
//!
//! A radio button group may list export strings in `/Opt`, one per on-state
//! widget, so that values which cannot be written as names (or which repeat
//! across widgets) still have a readable form. The export string is found by
//! position: the n-th widget that has an on-state maps to the n-th option.

use lopdf::Document;

use crate::error::Result;
use crate::radio::RadioButton;
use crate::widget::OnState;

impl RadioButton {
    /// Export value of the field.
    ///
    /// Without `/Opt` this is the field value. Otherwise it is the option at
    /// the position of the widget whose on-state equals the value. When no
    /// widget matches, the position is the number of widgets with an
    /// on-state. A position with no option gives `""`.
    pub fn export_value(&self, doc: &Document) -> Result<String> {
        let options = self.field().options(doc)?;
        if options.is_empty() {
            return self.value(doc);
        }

        let value = self.value(doc)?;
        let widgets = self.widgets(doc)?;
        let index = export_index(doc, &widgets, &value);
        match options.get(index) {
            Some(option) => Ok(option.clone()),
            None => {
                tracing::debug!(index, options = options.len(), "export index past end of /Opt");
                Ok(String::new())
            }
        }
    }
}

/// Position of the entry whose on-state is `value`, counting only entries
/// that have an on-state. Without a match this is the count of such entries.
fn export_index<T: OnState>(doc: &Document, entries: &[T], value: &str) -> usize {
    let mut index = 0;
    for entry in entries {
        match entry.on_state(doc) {
            Ok(Some(state)) if state == value => return index,
            Ok(Some(_)) => index += 1,
            Ok(None) => {}
            Err(err) => {
                tracing::debug!(error = %err, "entry without readable on-state does not count");
            }
        }
    }
    tracing::debug!(value, index, "no entry has the value as its on-state");
    index
}
