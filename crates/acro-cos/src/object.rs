//! Object kinds and token codecs.
//!
//! Names and text strings are stored as raw bytes by `lopdf`. The helpers here
//! turn them into Rust strings and back so callers never touch byte encodings.

use lopdf::{Object, StringFormat};

/// Short kind name of an object, used in type mismatch errors.
#[must_use]
pub fn kind_name(object: &Object) -> &'static str {
    match object {
        Object::Null => "Null",
        Object::Boolean(_) => "Boolean",
        Object::Integer(_) => "Integer",
        Object::Real(_) => "Real",
        Object::Name(_) => "Name",
        Object::String(..) => "String",
        Object::Array(_) => "Array",
        Object::Dictionary(_) => "Dictionary",
        Object::Stream(_) => "Stream",
        Object::Reference(_) => "Reference",
    }
}

/// Decode the bytes of a name token.
///
/// Names are UTF-8 in practice; anything else is read as Latin-1.
#[must_use]
pub fn decode_name(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => latin1(bytes),
    }
}

/// Build a name object from a string token.
#[must_use]
pub fn name_object(token: &str) -> Object {
    Object::Name(token.as_bytes().to_vec())
}

/// Decode a PDF text string.
///
/// Handles UTF-16BE and UTF-8 byte order marks, then plain UTF-8 with a
/// Latin-1 fallback for legacy PDFDocEncoding bytes.
#[must_use]
pub fn decode_text_string(bytes: &[u8]) -> String {
    if let Some(rest) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = rest
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        return String::from_utf16_lossy(&units);
    }
    let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => latin1(bytes),
    }
}

/// Build a text string object.
///
/// ASCII text is stored as a literal string, everything else as UTF-16BE.
#[must_use]
pub fn text_string_object(text: &str) -> Object {
    if text.is_ascii() {
        return Object::String(text.as_bytes().to_vec(), StringFormat::Literal);
    }
    let mut bytes = vec![0xFE, 0xFF];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}

fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
