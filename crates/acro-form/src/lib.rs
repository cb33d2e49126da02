//! Interactive form fields over a PDF document.
//!
//! This crate models radio button groups on top of a `lopdf` document: the
//! field value, its widgets' applied states, the button flags and the export
//! value derived from the field's options.
//!
//! # Features
//!
//! - **Radio Field Model**: read and write the value with every widget's
//!   `/AS` kept in line with it
//! - **Export Values**: map the value to an `/Opt` entry by widget position
//! - **Field Tree**: fully qualified names, inherited attributes, widgets
//! - **Policies**: configurable handling of unknown values and widgets with
//!   missing appearances
//!
//! # Example
//!
//! ```
//! use acro_form::{AcroForm, RadioButton};
//! use lopdf::Document;
//!
//! let mut doc = Document::new();
//! let form = AcroForm::create(&mut doc).unwrap();
//!
//! let radio = RadioButton::create(&mut doc, "answer");
//! let yes = radio.add_widget(&mut doc, "Yes").unwrap();
//! let no = radio.add_widget(&mut doc, "No").unwrap();
//! form.add_field(&mut doc, radio.field()).unwrap();
//!
//! let radio = form.radio_button(&doc, "answer").unwrap();
//! let report = radio.set_value(&mut doc, "Yes").unwrap();
//! assert!(report.is_complete());
//!
//! assert_eq!(radio.value(&doc).unwrap(), "Yes");
//! assert_eq!(yes.appearance_state(&doc).unwrap().as_deref(), Some("Yes"));
//! assert_eq!(no.appearance_state(&doc).unwrap().as_deref(), Some("Off"));
//!
//! radio.field().set_options(&mut doc, &["Oui", "Non"]).unwrap();
//! assert_eq!(radio.export_value(&doc).unwrap(), "Oui");
//! ```
//!
//! All handles are object ids. Reads borrow the document, writes borrow it
//! mutably, so one document is only ever modified by one caller at a time.

mod acroform;
mod error;
mod export;
mod field;
pub mod flags;
mod options;
mod radio;
mod sync;
mod widget;

// === Error Types ===
pub use error::{FormError, Result};

// === Form and Fields ===
pub use acroform::AcroForm;
pub use field::{Field, FieldKind};
pub use radio::RadioButton;

// === Widgets ===
pub use widget::{AppearanceEntry, OFF, OnState, Widget};

// === Configuration and Reports ===
pub use options::{FormOptions, MissingAppearancePolicy, UnknownValuePolicy};
pub use sync::{SkippedWidget, SyncReport};
