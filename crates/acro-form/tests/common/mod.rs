//! Shared document fixtures for acro-form integration tests.

#![allow(dead_code)]

use acro_cos::{dictionary_mut, name_object};
use acro_form::{AcroForm, RadioButton, Widget};
use lopdf::{Dictionary, Document, Object, ObjectId};

/// A document with one radio button group registered in its form.
pub struct Fixture {
    pub doc: Document,
    pub form: AcroForm,
    pub radio: RadioButton,
    pub widgets: Vec<Widget>,
}

impl Fixture {
    /// Applied state of every widget, in widget order.
    pub fn states(&self) -> Vec<Option<String>> {
        self.widgets
            .iter()
            .map(|widget| widget.appearance_state(&self.doc).unwrap())
            .collect()
    }

    /// Raw `/V` entry of the field.
    pub fn raw_value(&self) -> Option<Object> {
        self.radio
            .field()
            .dictionary(&self.doc)
            .unwrap()
            .get(b"V")
            .ok()
            .cloned()
    }

    /// Overwrite an entry on any indirect dictionary.
    pub fn set_entry(&mut self, id: ObjectId, key: &str, value: Object) {
        dictionary_mut(&mut self.doc, id).unwrap().set(key, value);
    }

    /// Drop the appearance dictionary of `widget`.
    pub fn strip_appearance(&mut self, widget: Widget) {
        dictionary_mut(&mut self.doc, widget.id())
            .unwrap()
            .remove(b"AP");
    }

    /// Add `state` to the normal appearance map of `widget`.
    pub fn add_state(&mut self, widget: Widget, state: &str) {
        let dict = dictionary_mut(&mut self.doc, widget.id()).unwrap();
        if let Ok(Object::Dictionary(appearance)) = dict.get_mut(b"AP") {
            if let Ok(Object::Dictionary(normal)) = appearance.get_mut(b"N") {
                normal.set(state, Object::Null);
            }
        }
    }

    /// Append a kid reference to the field without creating the object.
    pub fn add_dangling_kid(&mut self) -> ObjectId {
        let id = (self.doc.max_id + 100, 0);
        let field = dictionary_mut(&mut self.doc, self.radio.field().id()).unwrap();
        if let Ok(Object::Array(kids)) = field.get_mut(b"Kids") {
            kids.push(Object::Reference(id));
        }
        id
    }
}

/// Radio group `name` with one widget per entry of `states`.
pub fn radio_group(name: &str, states: &[&str]) -> Fixture {
    let mut doc = Document::new();
    let form = AcroForm::create(&mut doc).unwrap();
    let radio = RadioButton::create(&mut doc, name);
    let widgets = states
        .iter()
        .map(|state| radio.add_widget(&mut doc, state).unwrap())
        .collect();
    form.add_field(&mut doc, radio.field()).unwrap();
    Fixture {
        doc,
        form,
        radio,
        widgets,
    }
}

/// Radio group whose field dictionary is also its only widget.
pub fn merged_radio(name: &str, on_state: &str) -> (Document, RadioButton) {
    let mut doc = Document::new();
    let radio = RadioButton::create(&mut doc, name);

    let mut states = Dictionary::new();
    states.set(on_state, Object::Null);
    states.set("Off", Object::Null);
    let mut appearance = Dictionary::new();
    appearance.set("N", Object::Dictionary(states));

    let field = dictionary_mut(&mut doc, radio.field().id()).unwrap();
    field.remove(b"Kids");
    field.set("AP", Object::Dictionary(appearance));
    field.set("AS", name_object("Off"));
    (doc, radio)
}
