//! Integration tests for export value resolution.

mod common;

use acro_cos::{name_object, text_string_object};
use acro_form::FormError;
use common::radio_group;
use lopdf::{Object, Stream};

#[test]
fn test_yes_no_scenario() {
    let mut fx = radio_group("answer", &["Yes", "No"]);
    fx.radio.field().set_options(&mut fx.doc, &["Yes", "No"]).unwrap();

    fx.radio.set_value(&mut fx.doc, "Yes").unwrap();

    assert_eq!(
        fx.widgets[0].appearance_state(&fx.doc).unwrap().as_deref(),
        Some("Yes")
    );
    assert_eq!(
        fx.widgets[1].appearance_state(&fx.doc).unwrap().as_deref(),
        Some("Off")
    );
    assert_eq!(fx.radio.export_value(&fx.doc).unwrap(), "Yes");
}

#[test]
fn test_options_map_positionally() {
    let mut fx = radio_group("size", &["0", "1", "2"]);
    fx.radio
        .field()
        .set_options(&mut fx.doc, &["Small", "Medium", "Large"])
        .unwrap();

    fx.radio.set_value(&mut fx.doc, "2").unwrap();
    assert_eq!(fx.radio.export_value(&fx.doc).unwrap(), "Large");

    fx.radio.set_value(&mut fx.doc, "0").unwrap();
    assert_eq!(fx.radio.export_value(&fx.doc).unwrap(), "Small");
}

#[test]
fn test_without_options_export_is_value() {
    let mut fx = radio_group("answer", &["Yes", "No"]);
    assert_eq!(fx.radio.export_value(&fx.doc).unwrap(), "");

    fx.radio.set_value(&mut fx.doc, "No").unwrap();
    assert_eq!(fx.radio.export_value(&fx.doc).unwrap(), "No");
}

#[test]
fn test_without_options_errors_pass_through() {
    let mut fx = radio_group("answer", &["Yes", "No"]);
    let id = fx.radio.field().id();
    fx.set_entry(id, "V", Object::Integer(1));

    let err = fx.radio.export_value(&fx.doc).unwrap_err();
    assert!(matches!(err, FormError::TypeMismatch { found: "Integer", .. }));
}

#[test]
fn test_with_options_value_error_propagates() {
    let mut fx = radio_group("answer", &["Yes", "No"]);
    fx.radio.field().set_options(&mut fx.doc, &["Y", "N"]).unwrap();
    let id = fx.radio.field().id();
    fx.set_entry(id, "V", text_string_object("Yes"));

    let err = fx.radio.export_value(&fx.doc).unwrap_err();
    assert!(matches!(err, FormError::TypeMismatch { found: "String", .. }));
}

#[test]
fn test_unmatched_value_exports_option_after_last_widget() {
    let mut fx = radio_group("answer", &["Yes", "No"]);
    fx.radio
        .field()
        .set_options(&mut fx.doc, &["Y", "N", "Extra"])
        .unwrap();

    assert_eq!(fx.radio.export_value(&fx.doc).unwrap(), "Extra");

    fx.radio.set_value(&mut fx.doc, "Maybe").unwrap();
    assert_eq!(fx.radio.export_value(&fx.doc).unwrap(), "Extra");

    fx.radio.set_value(&mut fx.doc, "No").unwrap();
    assert_eq!(fx.radio.export_value(&fx.doc).unwrap(), "N");
}

#[test]
fn test_unmatched_value_without_spare_option_exports_empty() {
    let mut fx = radio_group("answer", &["Yes", "No"]);
    fx.radio.field().set_options(&mut fx.doc, &["Y", "N"]).unwrap();

    fx.radio.set_value(&mut fx.doc, "Maybe").unwrap();
    assert_eq!(fx.radio.export_value(&fx.doc).unwrap(), "");

    fx.radio.clear(&mut fx.doc).unwrap();
    assert_eq!(fx.radio.export_value(&fx.doc).unwrap(), "");
}

#[test]
fn test_index_past_options_exports_empty() {
    let mut fx = radio_group("answer", &["A", "B", "C"]);
    fx.radio.field().set_options(&mut fx.doc, &["first", "second"]).unwrap();

    fx.radio.set_value(&mut fx.doc, "C").unwrap();
    assert_eq!(fx.radio.export_value(&fx.doc).unwrap(), "");

    fx.radio.set_value(&mut fx.doc, "B").unwrap();
    assert_eq!(fx.radio.export_value(&fx.doc).unwrap(), "second");
}

#[test]
fn test_widgets_without_on_state_do_not_count() {
    let mut fx = radio_group("answer", &["A", "B", "C"]);
    fx.radio.field().set_options(&mut fx.doc, &["a", "b"]).unwrap();

    // First widget loses its appearance, second gets a single stream.
    fx.strip_appearance(fx.widgets[0]);
    let stream = fx
        .doc
        .add_object(Stream::new(lopdf::Dictionary::new(), Vec::new()));
    let mut appearance = lopdf::Dictionary::new();
    appearance.set("N", Object::Reference(stream));
    let second = fx.widgets[1].id();
    fx.set_entry(second, "AP", Object::Dictionary(appearance));

    fx.set_entry(fx.radio.field().id(), "V", name_object("C"));
    assert_eq!(fx.radio.export_value(&fx.doc).unwrap(), "a");
}

#[test]
fn test_option_pairs_use_export_string() {
    let mut fx = radio_group("answer", &["Yes", "No"]);
    let pairs = Object::Array(vec![
        Object::Array(vec![text_string_object("1"), text_string_object("Yes please")]),
        Object::Array(vec![text_string_object("0"), text_string_object("No thanks")]),
    ]);
    let id = fx.radio.field().id();
    fx.set_entry(id, "Opt", pairs);

    fx.radio.set_value(&mut fx.doc, "No").unwrap();
    assert_eq!(fx.radio.export_value(&fx.doc).unwrap(), "0");
}
