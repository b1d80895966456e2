//! Property tests for the text, form and vaccine helpers.

use brandmap_model::{CatalogRow, GenericVocabulary, VaccineComponentSet};
use brandmap_normalization::{NormalizationEngine, normalize};
use brandmap_standards::default_tables;
use proptest::prelude::*;

fn engine() -> NormalizationEngine {
    NormalizationEngine::new(GenericVocabulary::empty())
}

fn form_spelling() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Tablet".to_string()),
        Just("caps".to_string()),
        Just("Capsule".to_string()),
        Just("caplet".to_string()),
        Just("cream".to_string()),
        Just("ointment".to_string()),
        Just("solution".to_string()),
        Just("vial".to_string()),
        "[a-zA-Z ]{1,12}",
    ]
}

proptest! {
    #[test]
    fn normalize_is_idempotent(raw in "[a-zA-Z0-9 %/+.,()µμéÉøØßЖж-]{0,40}") {
        let once = normalize(&raw);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn any_text_splits_and_classifies(raw in "\\PC{0,40}") {
        let engine = engine();
        let ingredient = engine.split(&raw);
        prop_assert_eq!(ingredient.original_text, raw.clone());
        let _ = engine.infer_form_and_route(&raw);
        let _ = engine.match_vaccine_text(&raw);
    }

    #[test]
    fn normalize_output_is_trimmed_lowercase(raw in "[a-zA-Z0-9 %/+.,()-]{0,40}") {
        let out = normalize(&raw);
        prop_assert_eq!(out.trim(), out.as_str());
        prop_assert!(!out.contains("  "));
        prop_assert!(!out.chars().any(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn canonical_form_is_idempotent(form in form_spelling()) {
        let engine = engine();
        let once = engine.canonical_form(&form);
        prop_assert_eq!(engine.canonical_form(&once), once);
    }

    #[test]
    fn form_equivalence_is_reflexive_and_symmetric(a in form_spelling(), b in form_spelling()) {
        let engine = engine();
        prop_assert!(engine.forms_equivalent(&a, &a));
        prop_assert_eq!(engine.forms_equivalent(&a, &b), engine.forms_equivalent(&b, &a));
    }

    #[test]
    fn building_twice_is_stable(
        brand in "[A-Za-z]{1,8}",
        generic in "[A-Za-z]{1,8}",
        form in form_spelling(),
    ) {
        let engine = engine();
        let row = CatalogRow::new(brand, generic, form, "10mg");
        let first = engine.build_brand_map([row.clone(), row]);
        prop_assert_eq!(first.rows.len(), 1);
        prop_assert_eq!(first.summary.duplicates_dropped, 1);
    }
}

#[test]
fn every_acronym_round_trips_to_the_same_components() {
    let engine = engine();
    for acronym in default_tables().acronyms_by_length() {
        let components = engine.expand_acronym(acronym).expect("listed acronym expands");
        let back = engine.acronym_for(&components).expect("component set has an acronym");
        let again = engine.expand_acronym(&back).expect("reverse acronym expands");
        assert_eq!(
            VaccineComponentSet::new(&components),
            VaccineComponentSet::new(&again),
            "{acronym} -> {back}"
        );
    }
}
