//! Property-based tests for the decoding engine.
//!
//! These tests use proptest to verify invariants around:
//! - Shape validation over arbitrary input
//! - Decode determinism and panic-freedom
//! - Round-trip resolution of codes assembled from known symbols

use crate::decode::decode;
use crate::model::{ReferenceEntry, ReferenceTable};
use crate::shape::validate_article_format;
use artidec_types::{ArticleCode, Parameter, ARTICLE_LEN};
use ::proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Strategy for grit symbols: digits 1-9 or A/B.
fn arb_grit_symbol() -> impl Strategy<Value = String> {
    prop::string::string_regex("[1-9AB]").unwrap()
}

/// Strategy for diamond concentration symbols: digits 1-5.
fn arb_diamond_symbol() -> impl Strategy<Value = String> {
    prop::string::string_regex("[1-5]").unwrap()
}

/// Strategy for thickness symbols: two digits, or A0/A1/A2.
fn arb_thickness_symbol() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[0-9]{2}").unwrap(),
        prop::string::string_regex("A[0-2]").unwrap(),
    ]
}

/// Strategy for exposure symbols: three digits.
fn arb_exposure_symbol() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9]{3}").unwrap()
}

/// Strategy for hardness symbols: digits 1-3.
fn arb_hardness_symbol() -> impl Strategy<Value = String> {
    prop::string::string_regex("[1-3]").unwrap()
}

/// A full symbol set plus the article code assembled from it.
fn arb_known_code() -> impl Strategy<Value = (ArticleCode, ReferenceTable)> {
    (
        arb_grit_symbol(),
        arb_diamond_symbol(),
        arb_thickness_symbol(),
        arb_exposure_symbol(),
        arb_hardness_symbol(),
    )
        .prop_map(|(grit, diamond, thickness, exposure, hardness)| {
            let code = ArticleCode::new(format!(
                "00757-{grit}{diamond}{thickness}-{exposure}-{hardness}00"
            ));
            let entry = |parameter: Parameter, symbol: &str| ReferenceEntry {
                category: parameter.label().to_string(),
                symbol: symbol.to_string(),
                value: format!("value-of-{symbol}"),
                unit: None,
            };
            let table = ReferenceTable::new(vec![
                entry(Parameter::GritSize, &grit),
                entry(Parameter::DiamondPercent, &diamond),
                entry(Parameter::BladeThickness, &thickness),
                entry(Parameter::BladeExposure, &exposure),
                entry(Parameter::BondHardness, &hardness),
            ]);
            (code, table)
        })
}

proptest! {
    #[test]
    fn strings_of_wrong_length_never_validate(s in ".*") {
        prop_assume!(s.chars().count() != ARTICLE_LEN);
        prop_assert!(!validate_article_format(&s));
    }

    #[test]
    fn decode_never_hard_fails_on_arbitrary_input(s in ".*") {
        let code = ArticleCode::new(&s);
        let record = decode(&code, &ReferenceTable::empty());
        prop_assert!(record.is_ok());
        prop_assert_eq!(record.unwrap().article, s);
    }

    #[test]
    fn decode_is_deterministic(s in ".*") {
        let code = ArticleCode::new(&s);
        let table = ReferenceTable::empty();
        let first = decode(&code, &table).unwrap();
        let second = decode(&code, &table).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn assembled_codes_resolve_every_field((code, table) in arb_known_code()) {
        prop_assert!(validate_article_format(code.as_str()));
        let record = decode(&code, &table).unwrap();
        prop_assert!(record.fully_resolved());
        for parameter in Parameter::ALL {
            prop_assert!(record.field(parameter).starts_with("value-of-"));
        }
    }
}
