//! Snapshot tests for ingredient, form and vaccine parsing.

use brandmap_model::GenericVocabulary;
use brandmap_normalization::NormalizationEngine;

fn engine() -> NormalizationEngine {
    NormalizationEngine::new(GenericVocabulary::empty())
}

#[test]
fn split_keeps_original_text() {
    let ingredient = engine().split("Amlodipine (as besilate)");
    insta::assert_json_snapshot!(ingredient, @r#"
    {
      "base_name": "AMLODIPINE",
      "salts": [
        "BESILATE"
      ],
      "original_text": "Amlodipine (as besilate)"
    }
    "#);
}

#[test]
fn inference_evidence_trail() {
    let engine = engine();
    let text = engine.normalize("Paracetamol 500 MG Tablet");
    insta::assert_snapshot!(text, @"paracetamol 500 mg tablet");

    let inference = engine.extract_route_and_form(&text);
    insta::assert_snapshot!(inference.evidence, @"form:tablet;impute_route:tablet->oral");
}

#[test]
fn form_record_for_capsule() {
    let record = engine().classify_form("Capsule");
    assert_eq!(record.canonical_form, "CAPSULE");
    assert_eq!(record.primary_route.as_deref(), Some("ORAL"));
    assert!(record.admits_route("oral"));
}

#[test]
fn vaccine_acronym_in_free_text() {
    let engine = engine();
    let found = engine.match_vaccine_text("DTaP-IPV vaccine 0.5 mL");
    insta::assert_json_snapshot!(found, @r#"
    {
      "acronym": "DTAP-IPV",
      "components": [
        "ACELLULAR PERTUSSIS",
        "DIPHTHERIA",
        "INACTIVATED POLIO",
        "TETANUS"
      ]
    }
    "#);
}

#[test]
fn canonical_vaccine_name_with_details() {
    let name = engine()
        .normalize_vaccine_name("Pneumococcal polysaccharide conjugate vaccine (13-valent) adsorbed")
        .expect("vaccine text");
    assert_eq!(name.canonical, "PNEUMOCOCCAL VACCINE");
    assert_eq!(name.details.as_deref(), Some("13-valent"));
}
