//! The interactive form root (`/AcroForm` in the document catalog).

use std::collections::BTreeSet;

use acro_cos::{
    CosError, DictionaryExt, array_entry, dictionary, dictionary_entry, dictionary_mut, kind_name,
};
use lopdf::{Dictionary, Document, Object, ObjectId};

use crate::error::{FormError, Result};
use crate::field::{Field, FieldKind};
use crate::radio::RadioButton;

/// Handle to the interactive form of a document.
///
/// The form dictionary may be an indirect object or sit directly in the
/// catalog; the handle keeps the catalog id and looks it up on each access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcroForm {
    catalog: ObjectId,
}

impl AcroForm {
    /// Find the form of an existing document.
    pub fn load(doc: &Document) -> Result<Self> {
        let catalog = match doc.trailer.get(b"Root") {
            Ok(Object::Reference(id)) => *id,
            Ok(other) => {
                return Err(CosError::type_mismatch("Root", "Reference", kind_name(other)).into());
            }
            Err(_) => return Err(FormError::MissingAcroForm),
        };
        let form = Self { catalog };
        form.dictionary(doc)?;
        Ok(form)
    }

    /// Find the form, creating the catalog and an empty form when missing.
    pub fn create(doc: &mut Document) -> Result<Self> {
        let catalog = match doc.trailer.get(b"Root") {
            Ok(Object::Reference(id)) => *id,
            Ok(other) => {
                return Err(CosError::type_mismatch("Root", "Reference", kind_name(other)).into());
            }
            Err(_) => {
                let mut dict = Dictionary::new();
                dict.set_name("Type", "Catalog");
                let id = doc.add_object(dict);
                doc.trailer.set("Root", Object::Reference(id));
                id
            }
        };
        if !dictionary(doc, catalog)?.has(b"AcroForm") {
            let mut form = Dictionary::new();
            form.set("Fields", Object::Array(Vec::new()));
            let form_id = doc.add_object(form);
            dictionary_mut(doc, catalog)?.set("AcroForm", Object::Reference(form_id));
            tracing::debug!(form = ?form_id, "created interactive form");
        }
        Ok(Self { catalog })
    }

    pub fn dictionary<'a>(&self, doc: &'a Document) -> Result<&'a Dictionary> {
        let catalog = dictionary(doc, self.catalog)?;
        dictionary_entry(doc, catalog, "AcroForm")?.ok_or(FormError::MissingAcroForm)
    }

    /// Top-level fields (`/Fields`).
    pub fn fields(&self, doc: &Document) -> Result<Vec<Field>> {
        let Some(fields) = array_entry(doc, self.dictionary(doc)?, "Fields")? else {
            return Ok(Vec::new());
        };
        fields
            .iter()
            .map(|entry| match entry {
                Object::Reference(id) => Ok(Field::new(*id)),
                other => Err(FormError::from(CosError::type_mismatch(
                    "Fields",
                    "Reference",
                    kind_name(other),
                ))),
            })
            .collect()
    }

    /// Every field of the form, parents before children, in stored order.
    pub fn field_tree(&self, doc: &Document) -> Result<Vec<Field>> {
        let mut tree = Vec::new();
        let mut visited = BTreeSet::new();
        let mut pending: Vec<Field> = self.fields(doc)?.into_iter().rev().collect();
        while let Some(field) = pending.pop() {
            if !visited.insert(field.id()) {
                return Err(CosError::ReferenceCycle { id: field.id() }.into());
            }
            tree.push(field);
            pending.extend(field.children(doc)?.into_iter().rev());
        }
        Ok(tree)
    }

    /// Field with fully qualified name `name`.
    pub fn field(&self, doc: &Document, name: &str) -> Result<Field> {
        for field in self.field_tree(doc)? {
            if field.fully_qualified_name(doc)? == name {
                return Ok(field);
            }
        }
        Err(FormError::FieldNotFound {
            name: name.to_string(),
        })
    }

    /// Radio button group with fully qualified name `name`.
    pub fn radio_button(&self, doc: &Document, name: &str) -> Result<RadioButton> {
        RadioButton::from_field(doc, self.field(doc, name)?)
    }

    /// All radio button groups of the form.
    pub fn radio_buttons(&self, doc: &Document) -> Result<Vec<RadioButton>> {
        let mut radios = Vec::new();
        for field in self.field_tree(doc)? {
            if field.kind(doc)? == FieldKind::RadioButton {
                radios.push(RadioButton::new(field));
            }
        }
        Ok(radios)
    }

    /// Append `field` to the top-level `/Fields`.
    pub fn add_field(&self, doc: &mut Document, field: Field) -> Result<()> {
        let form_id = match dictionary(doc, self.catalog)?.get(b"AcroForm") {
            Ok(Object::Reference(id)) => Some(*id),
            Ok(_) => None,
            Err(_) => return Err(FormError::MissingAcroForm),
        };
        let form = match form_id {
            Some(id) => dictionary_mut(doc, id)?,
            None => match dictionary_mut(doc, self.catalog)?.get_mut(b"AcroForm") {
                Ok(Object::Dictionary(form)) => form,
                Ok(other) => {
                    return Err(
                        CosError::type_mismatch("AcroForm", "Dictionary", kind_name(other)).into(),
                    );
                }
                Err(_) => return Err(FormError::MissingAcroForm),
            },
        };
        let entry = Object::Reference(field.id());
        match form.get_mut(b"Fields") {
            Ok(Object::Array(fields)) => fields.push(entry),
            Ok(other) => {
                return Err(CosError::type_mismatch("Fields", "Array", kind_name(other)).into());
            }
            Err(_) => form.set("Fields", Object::Array(vec![entry])),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_without_form() {
        let doc = Document::new();
        assert!(matches!(AcroForm::load(&doc), Err(FormError::MissingAcroForm)));
    }

    #[test]
    fn test_create_is_idempotent() {
        let mut doc = Document::new();
        let form = AcroForm::create(&mut doc).unwrap();
        let again = AcroForm::create(&mut doc).unwrap();
        assert_eq!(form, again);
        assert_eq!(AcroForm::load(&doc).unwrap(), form);
        assert!(form.fields(&doc).unwrap().is_empty());
    }

    #[test]
    fn test_direct_form_dictionary() {
        let mut doc = Document::new();
        let mut catalog = Dictionary::new();
        catalog.set("AcroForm", Object::Dictionary(Dictionary::new()));
        let catalog_id = doc.add_object(catalog);
        doc.trailer.set("Root", Object::Reference(catalog_id));

        let form = AcroForm::load(&doc).unwrap();
        let radio = RadioButton::create(&mut doc, "direct");
        form.add_field(&mut doc, radio.field()).unwrap();

        assert_eq!(form.fields(&doc).unwrap(), vec![radio.field()]);
        assert_eq!(form.radio_button(&doc, "direct").unwrap(), radio);
    }

    #[test]
    fn test_field_not_found() {
        let mut doc = Document::new();
        let form = AcroForm::create(&mut doc).unwrap();
        let err = form.field(&doc, "missing").unwrap_err();
        assert_eq!(err.to_string(), "field not found: missing");
    }
}
