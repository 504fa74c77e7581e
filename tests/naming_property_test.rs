//! Property-based tests for entity name forms

use gocrud_gen::naming::{to_camel_case, to_kebab_case};
use gocrud_gen::{EntityName, NameForms};
use proptest::prelude::*;

/// Upper-camel identifiers: words of one capital followed by lower-case
/// letters or digits, with the occasional all-caps abbreviation.
fn pascal_name() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[A-Z][a-z0-9]{0,8}",
            "[A-Z]{2,4}",
        ],
        1..5,
    )
    .prop_map(|words| words.concat())
}

#[test]
fn prop_derive_is_deterministic() {
    proptest!(|(input in ".{1,40}")| {
        let name = EntityName::new(input).unwrap();
        prop_assert_eq!(NameForms::derive(&name), NameForms::derive(&name));
    });
}

#[test]
fn prop_camel_lowers_only_the_first_character() {
    proptest!(|(input in ".{1,40}")| {
        let camel = to_camel_case(&input);
        let mut chars = input.chars();
        let first = chars.next().unwrap();
        let expected_head: String = first.to_lowercase().collect();

        prop_assert!(camel.starts_with(&expected_head));
        prop_assert_eq!(&camel[expected_head.len()..], chars.as_str());
    });
}

#[test]
fn prop_kebab_is_lower_case_or_hyphen() {
    proptest!(|(input in pascal_name())| {
        let kebab = to_kebab_case(&input);
        prop_assert!(
            kebab.chars().all(|c| c == '-' || c.is_ascii_digit() || c.is_ascii_lowercase()),
            "unexpected character in {:?}", kebab
        );
        prop_assert!(!kebab.starts_with('-'), "leading hyphen in {:?}", kebab);
        prop_assert!(!kebab.ends_with('-'), "trailing hyphen in {:?}", kebab);
        prop_assert!(!kebab.contains("--"), "double hyphen in {:?}", kebab);
    });
}

#[test]
fn prop_kebab_without_hyphens_equals_lower() {
    proptest!(|(input in pascal_name())| {
        let forms = NameForms::derive(&EntityName::new(input).unwrap());
        prop_assert_eq!(forms.kebab.replace('-', ""), forms.lower);
    });
}

#[test]
fn prop_single_capital_run_has_no_hyphen() {
    proptest!(|(input in "[A-Z]{1,10}")| {
        prop_assert_eq!(to_kebab_case(&input), input.to_lowercase());
    });
}

#[test]
fn test_known_names() {
    let cases = [
        ("SbsFee", "sbsFee", "sbsfee", "sbs-fee"),
        ("Order", "order", "order", "order"),
        ("A", "a", "a", "a"),
        ("HTTPServer", "hTTPServer", "httpserver", "http-server"),
        ("UserID", "userID", "userid", "user-id"),
        ("DeliveryZoneV2", "deliveryZoneV2", "deliveryzonev2", "delivery-zone-v2"),
    ];

    for (input, camel, lower, kebab) in cases {
        let forms = NameForms::derive(&EntityName::new(input).unwrap());
        assert_eq!(forms.pascal, input);
        assert_eq!(forms.camel, camel, "camel of {}", input);
        assert_eq!(forms.lower, lower, "lower of {}", input);
        assert_eq!(forms.kebab, kebab, "kebab of {}", input);
    }
}
