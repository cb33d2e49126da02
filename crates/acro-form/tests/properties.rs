//! Property tests for the radio button value protocol.

mod common;

use acro_form::OFF;
use common::radio_group;
use proptest::prelude::*;

fn on_states() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(vec!["A", "B", "C"]), 1..6)
}

fn candidate_values() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["A", "B", "C", "D", "", OFF])
}

proptest! {
    #[test]
    fn prop_set_then_get_returns_value(value in "\\PC{0,16}") {
        let mut fx = radio_group("group", &["A", "B"]);
        fx.radio.set_value(&mut fx.doc, &value).unwrap();
        prop_assert_eq!(fx.radio.value(&fx.doc).unwrap(), value);
    }

    #[test]
    fn prop_every_widget_reflects_membership(states in on_states(), values in prop::collection::vec(candidate_values(), 1..4)) {
        let mut fx = radio_group("group", &states);
        for value in values {
            let report = fx.radio.set_value(&mut fx.doc, value).unwrap();
            prop_assert!(report.is_complete());
            prop_assert_eq!(report.widget_count(), states.len());

            for (widget, on_state) in fx.widgets.iter().zip(&states) {
                let expected = if *on_state == value { value } else { OFF };
                let applied = widget.appearance_state(&fx.doc).unwrap();
                prop_assert_eq!(applied.as_deref(), Some(expected));
            }
        }
    }

    #[test]
    fn prop_export_equals_value_without_options(states in on_states(), value in candidate_values()) {
        let mut fx = radio_group("group", &states);
        fx.radio.set_value(&mut fx.doc, value).unwrap();
        prop_assert_eq!(
            fx.radio.export_value(&fx.doc).unwrap(),
            fx.radio.value(&fx.doc).unwrap()
        );
    }

    #[test]
    fn prop_unison_flag_survives_value_updates(flags in prop::collection::vec(any::<bool>(), 1..6), value in candidate_values()) {
        let mut fx = radio_group("group", &["A", "B", "C"]);
        for unison in flags {
            fx.radio.set_radios_in_unison(&mut fx.doc, unison).unwrap();
            fx.radio.set_value(&mut fx.doc, value).unwrap();
            prop_assert_eq!(fx.radio.is_radios_in_unison(&fx.doc).unwrap(), unison);
        }
    }
}
