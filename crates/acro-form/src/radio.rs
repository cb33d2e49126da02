//! Radio button groups.
//!
//! A radio button field stores its value as a name in `/V`. Each widget of the
//! field has a normal appearance map keyed by state names; the widget whose map
//! contains the value shows it, every other widget shows `Off`. Writing the
//! value rewrites `/AS` on all widgets so the two never drift apart.

use std::collections::BTreeSet;

use acro_cos::{
    DictionaryExt, decode_name, dictionary_mut, inherited, kind_name, name_object,
    text_string_object,
};
use lopdf::{Dictionary, Document, Object};

use crate::error::{FormError, Result};
use crate::field::{Field, FieldKind};
use crate::flags;
use crate::options::{FormOptions, MissingAppearancePolicy, UnknownValuePolicy};
use crate::sync::{SkippedWidget, SyncReport};
use crate::widget::{OFF, OnState, Widget};

/// Live view of a radio button field.
///
/// Holds no field state of its own: reads query the document and writes go
/// straight into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadioButton {
    field: Field,
    options: FormOptions,
}

impl RadioButton {
    /// Wrap `field` without checking its type.
    pub fn new(field: Field) -> Self {
        Self {
            field,
            options: FormOptions::default(),
        }
    }

    /// Wrap `field` after checking that it is a radio button group.
    pub fn from_field(doc: &Document, field: Field) -> Result<Self> {
        match field.kind(doc)? {
            FieldKind::RadioButton => Ok(Self::new(field)),
            kind => Err(FormError::NotARadioButton {
                name: field.fully_qualified_name(doc)?,
                kind,
            }),
        }
    }

    /// Add a new, empty radio button field dictionary to the document.
    ///
    /// The field is not attached to a form; use `AcroForm::add_field`.
    pub fn create(doc: &mut Document, partial_name: &str) -> Self {
        let mut dict = Dictionary::new();
        dict.set_name("FT", "Btn");
        dict.set(flags::FIELD_FLAGS, Object::Integer(i64::from(flags::RADIO)));
        dict.set("T", text_string_object(partial_name));
        dict.set("Kids", Object::Array(Vec::new()));
        Self::new(Field::new(doc.add_object(dict)))
    }

    #[must_use]
    pub fn with_options(mut self, options: FormOptions) -> Self {
        self.options = options;
        self
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn form_options(&self) -> FormOptions {
        self.options
    }

    /// Create a widget whose on-state is `on_state` and append it to `/Kids`.
    pub fn add_widget(&self, doc: &mut Document, on_state: &str) -> Result<Widget> {
        let widget = Widget::create(doc, self.field.id(), on_state);
        let kid = Object::Reference(widget.id());
        let dict = dictionary_mut(doc, self.field.id())?;
        match dict.get_mut(b"Kids") {
            Ok(Object::Array(kids)) => kids.push(kid),
            Ok(other) => {
                return Err(FormError::type_mismatch(
                    self.field.id(),
                    "Kids",
                    "Array",
                    kind_name(other),
                ));
            }
            Err(_) => dict.set("Kids", Object::Array(vec![kid])),
        }
        Ok(widget)
    }

    pub fn widgets(&self, doc: &Document) -> Result<Vec<Widget>> {
        self.field.widgets(doc)
    }

    /// If set, widgets sharing an on-state turn on and off together. If
    /// clear, the widgets are mutually exclusive.
    pub fn set_radios_in_unison(&self, doc: &mut Document, radios_in_unison: bool) -> Result<()> {
        self.field
            .set_flag(doc, flags::RADIOS_IN_UNISON, radios_in_unison)
    }

    pub fn is_radios_in_unison(&self, doc: &Document) -> Result<bool> {
        self.field.has_flag(doc, flags::RADIOS_IN_UNISON)
    }

    /// Whether exactly one widget must stay on. Read-only here.
    pub fn is_no_toggle_to_off(&self, doc: &Document) -> Result<bool> {
        self.field.has_flag(doc, flags::NO_TOGGLE_TO_OFF)
    }

    /// Current value (`/V`, inherited). An absent value reads as `""`.
    pub fn value(&self, doc: &Document) -> Result<String> {
        self.name_attribute(doc, "V")
    }

    /// Default value (`/DV`, inherited). An absent value reads as `""`.
    pub fn default_value(&self, doc: &Document) -> Result<String> {
        self.name_attribute(doc, "DV")
    }

    fn name_attribute(&self, doc: &Document, key: &'static str) -> Result<String> {
        match inherited(doc, self.field.id(), key)? {
            None => Ok(String::new()),
            Some(Object::Name(bytes)) => Ok(decode_name(bytes)),
            Some(other) => Err(FormError::type_mismatch(
                self.field.id(),
                key,
                "Name",
                kind_name(other),
            )),
        }
    }

    /// On-states of all widgets. Widgets without a readable appearance are
    /// left out.
    pub fn on_values(&self, doc: &Document) -> Result<BTreeSet<String>> {
        let mut values = BTreeSet::new();
        for widget in self.field.widgets(doc)? {
            match widget.on_state(doc) {
                Ok(Some(state)) => {
                    values.insert(state);
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::debug!(widget = ?widget.id(), error = %err, "widget has no readable on-state");
                }
            }
        }
        Ok(values)
    }

    /// Store `value` in `/V` and rewrite `/AS` on every widget.
    ///
    /// A widget whose normal appearance has a `value` entry is set to `value`,
    /// every other widget to `Off`. With the default options, widgets whose
    /// appearance cannot be read are skipped and listed in the report; the
    /// rest are still updated. See [`FormOptions`] for the stricter policies,
    /// which fail before the document is modified.
    pub fn set_value(&self, doc: &mut Document, value: &str) -> Result<SyncReport> {
        let widgets = self.field.widgets(doc)?;

        if self.options.unknown_value == UnknownValuePolicy::Reject
            && !value.is_empty()
            && value != OFF
        {
            let known = state_names(doc, &widgets);
            if !known.contains(value) {
                return Err(FormError::UnknownValue {
                    field: self.field.fully_qualified_name(doc)?,
                    value: value.to_string(),
                    known: known.into_iter().collect(),
                });
            }
        }
        if self.options.missing_appearance == MissingAppearancePolicy::Reject {
            for widget in &widgets {
                widget.normal_appearance(doc)?;
            }
        }

        dictionary_mut(doc, self.field.id())?.set("V", name_object(value));

        let mut report = SyncReport::new(value);
        for widget in widgets {
            match sync_widget(doc, widget, value) {
                Ok(true) => report.selected.push(widget.id()),
                Ok(false) => report.cleared.push(widget.id()),
                Err(err) => {
                    tracing::warn!(
                        widget = ?widget.id(),
                        error = %err,
                        "skipping widget during value update"
                    );
                    report.skipped.push(SkippedWidget {
                        widget: widget.id(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        tracing::debug!(
            value,
            selected = report.selected.len(),
            cleared = report.cleared.len(),
            skipped = report.skipped.len(),
            "radio button value set"
        );
        Ok(report)
    }

    /// Turn every widget off by setting the value to `Off`.
    pub fn clear(&self, doc: &mut Document) -> Result<SyncReport> {
        self.set_value(doc, OFF)
    }
}

/// Point one widget's applied state at `value` or `Off`. Returns whether the
/// widget ended up selected.
fn sync_widget(doc: &mut Document, widget: Widget, value: &str) -> Result<bool> {
    let appearance = widget.normal_appearance(doc)?;
    let selected = value != OFF && appearance.contains(value);
    let state = if selected { value } else { OFF };
    widget.set_appearance_state(doc, state)?;
    tracing::trace!(widget = ?widget.id(), state, "applied state updated");
    Ok(selected)
}

/// Every state other than `Off` that some widget can display.
fn state_names(doc: &Document, widgets: &[Widget]) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    for widget in widgets {
        match widget.normal_appearance(doc) {
            Ok(appearance) => names.extend(
                appearance
                    .states()
                    .iter()
                    .filter(|state| state.as_str() != OFF)
                    .cloned(),
            ),
            Err(err) => {
                tracing::debug!(widget = ?widget.id(), error = %err, "widget has no readable states");
            }
        }
    }
    names
}
