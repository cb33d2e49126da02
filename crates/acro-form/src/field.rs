//! Generic form field handle.
//!
//! A field is a dictionary in the field tree. Terminal fields carry widgets in
//! `/Kids` (or are merged with their single widget); non-terminal fields carry
//! child fields. Attributes such as `/FT`, `/Ff`, `/V` and `/Opt` are
//! inheritable and are looked up through the `/Parent` chain.

use std::collections::BTreeSet;
use std::fmt;

use acro_cos::{
    CosError, DictionaryExt, array_entry, decode_name, decode_text_string, dictionary,
    dictionary_mut, flag_bit, inherited, inherited_integer, kind_name, resolve, set_flag_bit,
    text_string_object,
};
use lopdf::{Dictionary, Document, Object, ObjectId};

use crate::error::{FormError, Result};
use crate::flags;
use crate::widget::Widget;

/// Classification of a field by `/FT` and the button flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Checkbox,
    RadioButton,
    PushButton,
    Text,
    Choice,
    Signature,
    /// Has child fields instead of widgets.
    NonTerminal,
    /// Missing or unrecognized `/FT`.
    Unknown,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Checkbox => "check box",
            Self::RadioButton => "radio button",
            Self::PushButton => "push button",
            Self::Text => "text field",
            Self::Choice => "choice field",
            Self::Signature => "signature field",
            Self::NonTerminal => "non-terminal field",
            Self::Unknown => "unknown field",
        };
        f.write_str(label)
    }
}

/// Handle to a field dictionary stored in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Field {
    id: ObjectId,
}

impl Field {
    pub fn new(id: ObjectId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn dictionary<'a>(&self, doc: &'a Document) -> Result<&'a Dictionary> {
        Ok(dictionary(doc, self.id)?)
    }

    /// Partial name (`/T`).
    pub fn partial_name(&self, doc: &Document) -> Result<Option<String>> {
        Ok(self.dictionary(doc)?.text_entry("T")?)
    }

    /// Partial names of this field and its ancestors joined with `.`.
    /// Ancestors without a partial name contribute nothing.
    pub fn fully_qualified_name(&self, doc: &Document) -> Result<String> {
        let mut names = Vec::new();
        let mut visited = BTreeSet::new();
        let mut current = Some(*self);
        while let Some(field) = current {
            if !visited.insert(field.id) {
                return Err(CosError::ReferenceCycle { id: field.id }.into());
            }
            if let Some(name) = field.partial_name(doc)? {
                names.push(name);
            }
            current = field.parent(doc)?;
        }
        names.reverse();
        Ok(names.join("."))
    }

    pub fn parent(&self, doc: &Document) -> Result<Option<Field>> {
        match self.dictionary(doc)?.get(b"Parent") {
            Err(_) => Ok(None),
            Ok(Object::Reference(id)) => Ok(Some(Field::new(*id))),
            Ok(other) => Err(FormError::type_mismatch(
                self.id,
                "Parent",
                "Reference",
                kind_name(other),
            )),
        }
    }

    /// Field type (`/FT`), inherited.
    pub fn field_type(&self, doc: &Document) -> Result<Option<String>> {
        match inherited(doc, self.id, "FT")? {
            None => Ok(None),
            Some(Object::Name(name)) => Ok(Some(decode_name(name))),
            Some(other) => Err(FormError::type_mismatch(self.id, "FT", "Name", kind_name(other))),
        }
    }

    /// Field flags (`/Ff`), inherited, 0 when absent.
    pub fn flags(&self, doc: &Document) -> Result<u32> {
        let bits = inherited_integer(doc, self.id, flags::FIELD_FLAGS)?.unwrap_or(0);
        Ok((bits & i64::from(u32::MAX)) as u32)
    }

    pub fn has_flag(&self, doc: &Document, mask: u32) -> Result<bool> {
        Ok(flag_bit(doc, self.id, flags::FIELD_FLAGS, mask)?)
    }

    /// Set or clear one flag bit on this field's own dictionary.
    pub fn set_flag(&self, doc: &mut Document, mask: u32, on: bool) -> Result<()> {
        Ok(set_flag_bit(doc, self.id, flags::FIELD_FLAGS, mask, on)?)
    }

    pub fn is_read_only(&self, doc: &Document) -> Result<bool> {
        self.has_flag(doc, flags::READ_ONLY)
    }

    pub fn is_required(&self, doc: &Document) -> Result<bool> {
        self.has_flag(doc, flags::REQUIRED)
    }

    pub fn is_no_export(&self, doc: &Document) -> Result<bool> {
        self.has_flag(doc, flags::NO_EXPORT)
    }

    /// Classify the field.
    pub fn kind(&self, doc: &Document) -> Result<FieldKind> {
        if !self.children(doc)?.is_empty() {
            return Ok(FieldKind::NonTerminal);
        }
        let kind = match self.field_type(doc)?.as_deref() {
            Some("Btn") => {
                let bits = self.flags(doc)?;
                if bits & flags::PUSHBUTTON != 0 {
                    FieldKind::PushButton
                } else if bits & flags::RADIO != 0 {
                    FieldKind::RadioButton
                } else {
                    FieldKind::Checkbox
                }
            }
            Some("Tx") => FieldKind::Text,
            Some("Ch") => FieldKind::Choice,
            Some("Sig") => FieldKind::Signature,
            _ => FieldKind::Unknown,
        };
        Ok(kind)
    }

    /// Child fields: the kids that carry a partial name. A kid that cannot be
    /// read is not a field; [`Field::widgets`] returns it instead.
    pub fn children(&self, doc: &Document) -> Result<Vec<Field>> {
        let children = self
            .kids(doc)?
            .unwrap_or_default()
            .into_iter()
            .filter(|id| dictionary(doc, *id).is_ok_and(|dict| dict.has(b"T")))
            .map(Field::new)
            .collect();
        Ok(children)
    }

    /// Widgets in stored order.
    ///
    /// A field without `/Kids` is merged with its only widget and is returned
    /// as that widget. Kids carrying a partial name are child fields and are
    /// skipped. A kid that cannot be read is still returned so callers can
    /// report it.
    pub fn widgets(&self, doc: &Document) -> Result<Vec<Widget>> {
        let Some(kids) = self.kids(doc)? else {
            return Ok(vec![Widget::new(self.id)]);
        };
        let widgets = kids
            .into_iter()
            .filter(|id| !dictionary(doc, *id).is_ok_and(|dict| dict.has(b"T")))
            .map(Widget::new)
            .collect();
        Ok(widgets)
    }

    /// Export options (`/Opt`), inherited.
    ///
    /// Entries are text strings, or `[export display]` pairs from which the
    /// export string is taken.
    pub fn options(&self, doc: &Document) -> Result<Vec<String>> {
        let Some(value) = inherited(doc, self.id, "Opt")? else {
            return Ok(Vec::new());
        };
        let Object::Array(items) = value else {
            return Err(FormError::type_mismatch(self.id, "Opt", "Array", kind_name(value)));
        };
        items
            .iter()
            .map(|item| -> Result<String> {
                match resolve(doc, item)? {
                    Object::Array(pair) => {
                        let Some(export) = pair.first() else {
                            return Err(FormError::type_mismatch(self.id, "Opt", "String", "Array"));
                        };
                        self.option_text(resolve(doc, export)?)
                    }
                    other => self.option_text(other),
                }
            })
            .collect()
    }

    /// Replace `/Opt` on this field. An empty list removes the entry.
    pub fn set_options<S: AsRef<str>>(&self, doc: &mut Document, options: &[S]) -> Result<()> {
        let dict = dictionary_mut(doc, self.id)?;
        if options.is_empty() {
            dict.remove(b"Opt");
        } else {
            let items = options
                .iter()
                .map(|option| text_string_object(option.as_ref()))
                .collect();
            dict.set("Opt", Object::Array(items));
        }
        Ok(())
    }

    fn option_text(&self, item: &Object) -> Result<String> {
        match item {
            Object::String(bytes, _) => Ok(decode_text_string(bytes)),
            Object::Name(bytes) => Ok(decode_name(bytes)),
            other => Err(FormError::type_mismatch(self.id, "Opt", "String", kind_name(other))),
        }
    }

    /// Object ids listed in `/Kids`, `None` when the entry is absent.
    fn kids(&self, doc: &Document) -> Result<Option<Vec<ObjectId>>> {
        let dict = self.dictionary(doc)?;
        let Some(kids) = array_entry(doc, dict, "Kids")? else {
            return Ok(None);
        };
        kids.iter()
            .map(|kid| match kid {
                Object::Reference(id) => Ok(*id),
                other => Err(FormError::type_mismatch(
                    self.id,
                    "Kids",
                    "Reference",
                    kind_name(other),
                )),
            })
            .collect::<Result<Vec<_>>>()
            .map(Some)
    }
}
