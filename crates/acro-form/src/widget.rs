//! Widget annotations and their normal appearances.

use acro_cos::{
    CosError, DictionaryExt, decode_name, dictionary, dictionary_entry, dictionary_mut, kind_name,
    name_object, resolve,
};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use crate::error::{FormError, Result};

/// Reserved appearance state of a widget that is not selected.
pub const OFF: &str = "Off";

/// Handle to a widget annotation stored in the document.
///
/// The handle is only an object id. Every accessor reads the document again,
/// so handles stay valid across edits made through other handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Widget {
    id: ObjectId,
}

/// Normal appearance (`/AP /N`) of a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppearanceEntry {
    /// A single appearance stream without named states.
    Stream,
    /// State names of an appearance subdictionary, in stored order.
    States(Vec<String>),
}

impl AppearanceEntry {
    /// Whether the entry has a sub-appearance named `state`.
    #[must_use]
    pub fn contains(&self, state: &str) -> bool {
        match self {
            Self::Stream => false,
            Self::States(states) => states.iter().any(|name| name == state),
        }
    }

    /// First state that is not [`OFF`].
    #[must_use]
    pub fn on_state(&self) -> Option<&str> {
        match self {
            Self::Stream => None,
            Self::States(states) => states.iter().map(String::as_str).find(|name| *name != OFF),
        }
    }

    /// All state names, empty for a single stream.
    #[must_use]
    pub fn states(&self) -> &[String] {
        match self {
            Self::Stream => &[],
            Self::States(states) => states,
        }
    }
}

/// Capability of reporting the state token that means "selected".
///
/// Radio button widgets and check boxes both answer this from their own
/// appearance map, so export resolution does not depend on how the object
/// was classified.
pub trait OnState {
    /// The on-state token, or `None` when the object has no selectable state.
    fn on_state(&self, doc: &Document) -> Result<Option<String>>;
}

impl OnState for Widget {
    fn on_state(&self, doc: &Document) -> Result<Option<String>> {
        let entry = self.normal_appearance(doc)?;
        Ok(entry.on_state().map(str::to_string))
    }
}

impl Widget {
    pub fn new(id: ObjectId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Create a widget for `parent` with placeholder appearances for
    /// `on_state` and [`OFF`]. The widget starts in the off state.
    ///
    /// The widget is not linked from the parent's `/Kids`; see
    /// `RadioButton::add_widget` for that.
    pub fn create(doc: &mut Document, parent: ObjectId, on_state: &str) -> Self {
        let mut states = Dictionary::new();
        for state in [on_state, OFF] {
            let stream = doc.add_object(Stream::new(Dictionary::new(), Vec::new()));
            states.set(state, Object::Reference(stream));
        }
        let mut appearance = Dictionary::new();
        appearance.set("N", Object::Dictionary(states));

        let mut dict = Dictionary::new();
        dict.set_name("Type", "Annot");
        dict.set_name("Subtype", "Widget");
        dict.set("Parent", Object::Reference(parent));
        dict.set("AP", Object::Dictionary(appearance));
        dict.set_name("AS", OFF);
        Self::new(doc.add_object(dict))
    }

    /// Current applied state (`/AS`).
    pub fn appearance_state(&self, doc: &Document) -> Result<Option<String>> {
        Ok(dictionary(doc, self.id)?.name_entry("AS")?)
    }

    /// Replace the applied state (`/AS`).
    pub fn set_appearance_state(&self, doc: &mut Document, state: &str) -> Result<()> {
        dictionary_mut(doc, self.id)?.set("AS", name_object(state));
        Ok(())
    }

    /// Normal appearance entry.
    ///
    /// Fails with [`FormError::MissingAppearance`] when the widget has no
    /// `/AP` or no `/N` inside it.
    pub fn normal_appearance(&self, doc: &Document) -> Result<AppearanceEntry> {
        let dict = dictionary(doc, self.id)?;
        let missing = || FormError::MissingAppearance { widget: self.id };
        let appearance = dictionary_entry(doc, dict, "AP")?.ok_or_else(missing)?;
        let normal = appearance.get(b"N").map_err(|_| missing())?;
        match resolve(doc, normal)? {
            Object::Dictionary(states) => Ok(AppearanceEntry::States(
                states.iter().map(|(name, _)| decode_name(name)).collect(),
            )),
            Object::Stream(_) => Ok(AppearanceEntry::Stream),
            other => Err(CosError::type_mismatch("N", "Dictionary", kind_name(other)).into()),
        }
    }
}
