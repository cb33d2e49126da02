//! Typed accessors on direct dictionary entries.

use lopdf::{Dictionary, Object};

use crate::error::{CosError, Result};
use crate::object::{decode_name, decode_text_string, kind_name, name_object};

/// Typed reads and writes of direct entries on a [`Dictionary`].
///
/// Absent keys read as `None`; present keys of the wrong kind fail with
/// [`CosError::TypeMismatch`].
pub trait DictionaryExt {
    /// Name entry, decoded.
    fn name_entry(&self, key: &str) -> Result<Option<String>>;

    /// Text string entry, decoded.
    fn text_entry(&self, key: &str) -> Result<Option<String>>;

    /// Integer entry.
    fn integer_entry(&self, key: &str) -> Result<Option<i64>>;

    /// Store `token` as a name.
    fn set_name(&mut self, key: &str, token: &str);
}

impl DictionaryExt for Dictionary {
    fn name_entry(&self, key: &str) -> Result<Option<String>> {
        match self.get(key.as_bytes()) {
            Err(_) => Ok(None),
            Ok(Object::Name(bytes)) => Ok(Some(decode_name(bytes))),
            Ok(other) => Err(CosError::type_mismatch(key, "Name", kind_name(other))),
        }
    }

    fn text_entry(&self, key: &str) -> Result<Option<String>> {
        match self.get(key.as_bytes()) {
            Err(_) => Ok(None),
            Ok(Object::String(bytes, _)) => Ok(Some(decode_text_string(bytes))),
            Ok(other) => Err(CosError::type_mismatch(key, "String", kind_name(other))),
        }
    }

    fn integer_entry(&self, key: &str) -> Result<Option<i64>> {
        match self.get(key.as_bytes()) {
            Err(_) => Ok(None),
            Ok(Object::Integer(value)) => Ok(Some(*value)),
            Ok(other) => Err(CosError::type_mismatch(key, "Integer", kind_name(other))),
        }
    }

    fn set_name(&mut self, key: &str, token: &str) {
        self.set(key, name_object(token));
    }
}
