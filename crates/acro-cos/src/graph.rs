//! Reference resolution and attribute inheritance.

use std::collections::BTreeSet;

use lopdf::{Dictionary, Document, Object, ObjectId};

use crate::error::{CosError, Result};
use crate::object::kind_name;

/// Longest reference chain followed before assuming a cycle.
const MAX_REFERENCE_DEPTH: usize = 32;

/// Follow indirect references until a direct object is reached.
pub fn resolve<'a>(doc: &'a Document, object: &'a Object) -> Result<&'a Object> {
    let mut current = object;
    let mut depth = 0;
    while let Object::Reference(id) = current {
        if depth == MAX_REFERENCE_DEPTH {
            return Err(CosError::ReferenceCycle { id: *id });
        }
        current = doc
            .objects
            .get(id)
            .ok_or(CosError::MissingObject { id: *id })?;
        depth += 1;
    }
    Ok(current)
}

/// Id of the object that `id` ends at once indirect references are followed.
fn direct_id(doc: &Document, id: ObjectId) -> Result<ObjectId> {
    let mut current = id;
    for _ in 0..=MAX_REFERENCE_DEPTH {
        match doc.objects.get(&current) {
            Some(Object::Reference(next)) => current = *next,
            Some(_) => return Ok(current),
            None => return Err(CosError::MissingObject { id: current }),
        }
    }
    Err(CosError::ReferenceCycle { id })
}

/// Indirect object `id` as a dictionary.
pub fn dictionary(doc: &Document, id: ObjectId) -> Result<&Dictionary> {
    match doc.objects.get(&direct_id(doc, id)?) {
        Some(Object::Dictionary(dict)) => Ok(dict),
        Some(other) => Err(CosError::NotADictionary {
            id,
            found: kind_name(other),
        }),
        None => Err(CosError::MissingObject { id }),
    }
}

/// Mutable access to indirect object `id` as a dictionary. References are
/// followed the same way [`dictionary`] follows them.
pub fn dictionary_mut(doc: &mut Document, id: ObjectId) -> Result<&mut Dictionary> {
    let target = direct_id(doc, id)?;
    match doc.objects.get_mut(&target) {
        Some(Object::Dictionary(dict)) => Ok(dict),
        Some(other) => Err(CosError::NotADictionary {
            id,
            found: kind_name(other),
        }),
        None => Err(CosError::MissingObject { id: target }),
    }
}

/// Entry `key` of `dict`, resolved, expected to be a dictionary.
pub fn dictionary_entry<'a>(
    doc: &'a Document,
    dict: &'a Dictionary,
    key: &str,
) -> Result<Option<&'a Dictionary>> {
    let Ok(value) = dict.get(key.as_bytes()) else {
        return Ok(None);
    };
    match resolve(doc, value)? {
        Object::Dictionary(inner) => Ok(Some(inner)),
        other => Err(CosError::type_mismatch(key, "Dictionary", kind_name(other))),
    }
}

/// Entry `key` of `dict`, resolved, expected to be an array.
pub fn array_entry<'a>(
    doc: &'a Document,
    dict: &'a Dictionary,
    key: &str,
) -> Result<Option<&'a [Object]>> {
    let Ok(value) = dict.get(key.as_bytes()) else {
        return Ok(None);
    };
    match resolve(doc, value)? {
        Object::Array(items) => Ok(Some(items.as_slice())),
        other => Err(CosError::type_mismatch(key, "Array", kind_name(other))),
    }
}

/// Look up `key` on object `id`, walking the `/Parent` chain when the entry
/// is absent locally. The returned value is already resolved.
///
/// Returns `None` when no dictionary in the chain carries the key.
pub fn inherited<'a>(doc: &'a Document, id: ObjectId, key: &str) -> Result<Option<&'a Object>> {
    let mut visited = BTreeSet::new();
    let mut current = id;
    loop {
        if !visited.insert(current) {
            return Err(CosError::ReferenceCycle { id: current });
        }
        let dict = dictionary(doc, current)?;
        if let Ok(value) = dict.get(key.as_bytes()) {
            if current != id {
                tracing::trace!(key, depth = visited.len() - 1, "attribute inherited from ancestor");
            }
            return resolve(doc, value).map(Some);
        }
        match dict.get(b"Parent") {
            Ok(Object::Reference(parent)) => current = *parent,
            Ok(other) => {
                return Err(CosError::type_mismatch("Parent", "Reference", kind_name(other)));
            }
            Err(_) => return Ok(None),
        }
    }
}

/// Inherited integer entry, `None` when absent everywhere in the chain.
pub fn inherited_integer(doc: &Document, id: ObjectId, key: &str) -> Result<Option<i64>> {
    match inherited(doc, id, key)? {
        None => Ok(None),
        Some(Object::Integer(value)) => Ok(Some(*value)),
        Some(other) => Err(CosError::type_mismatch(key, "Integer", kind_name(other))),
    }
}

/// Whether bit `mask` is set in the (inherited) integer entry `key`.
pub fn flag_bit(doc: &Document, id: ObjectId, key: &str, mask: u32) -> Result<bool> {
    let bits = inherited_integer(doc, id, key)?.unwrap_or(0);
    Ok(bits & i64::from(mask) != 0)
}

/// Set or clear bit `mask` of integer entry `key` on object `id`.
///
/// The starting value is the inherited one, so bits defined on an ancestor
/// survive the first local write.
pub fn set_flag_bit(doc: &mut Document, id: ObjectId, key: &str, mask: u32, on: bool) -> Result<()> {
    let bits = inherited_integer(doc, id, key)?.unwrap_or(0);
    let bits = if on {
        bits | i64::from(mask)
    } else {
        bits & !i64::from(mask)
    };
    dictionary_mut(doc, id)?.set(key, Object::Integer(bits));
    Ok(())
}
