//! Typed projection over the PDF object graph.
//!
//! `lopdf` owns the document and its objects. This crate adds the pieces the
//! form layer needs on top of it:
//!
//! - **Kinds and codecs**: object kind names for diagnostics, name and text
//!   string decoding and encoding
//! - **Resolution**: following indirect references with cycle protection
//! - **Inheritance**: attribute lookup that walks the `/Parent` chain
//! - **Flags**: bit reads and writes on integer entries such as `/Ff`
//!
//! # Example
//!
//! ```
//! use acro_cos::{DictionaryExt, inherited, name_object};
//! use lopdf::{Dictionary, Document, Object};
//!
//! let mut doc = Document::new();
//! let mut parent = Dictionary::new();
//! parent.set("V", name_object("Yes"));
//! let parent_id = doc.add_object(parent);
//!
//! let mut child = Dictionary::new();
//! child.set("Parent", Object::Reference(parent_id));
//! let child_id = doc.add_object(child);
//!
//! let value = inherited(&doc, child_id, "V").unwrap();
//! assert!(matches!(value, Some(Object::Name(name)) if name == b"Yes"));
//!
//! let mut widget = Dictionary::new();
//! widget.set_name("AS", "Off");
//! assert_eq!(widget.name_entry("AS").unwrap().as_deref(), Some("Off"));
//! ```

mod dictionary;
mod error;
mod graph;
mod object;

pub use dictionary::DictionaryExt;
pub use error::{CosError, Result};
pub use graph::{
    array_entry, dictionary, dictionary_entry, dictionary_mut, flag_bit, inherited,
    inherited_integer, resolve, set_flag_bit,
};
pub use object::{decode_name, decode_text_string, kind_name, name_object, text_string_object};
