//! Data model for drug catalog normalization.

#![deny(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod form_route;
pub mod ingredient;
pub mod options;
pub mod summary;
pub mod vaccine;
pub mod vocabulary;

pub use catalog::{BrandMapRow, CatalogRow, DedupeKey};
pub use error::{ModelError, Result};
pub use form_route::{FormRouteInference, FormRouteRecord};
pub use ingredient::{NormalizedIngredient, TokenClass};
pub use options::NormalizationOptions;
pub use summary::{BrandMap, BrandMapSummary};
pub use vaccine::{VaccineComponentSet, VaccineMatch, VaccineName};
pub use vocabulary::{GenericVocabulary, VocabularyRecord};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_map_row_serializes_in_export_order() {
        let row = BrandMapRow {
            brand_name: "Amoxil".to_string(),
            generic_name: "Amoxicillin".to_string(),
            dosage_form: "CAPSULE".to_string(),
            route: "ORAL".to_string(),
            dosage_strength: "500mg".to_string(),
            registration_number: "DR-XY12345".to_string(),
        };
        let json = serde_json::to_string(&row).expect("serialize row");
        assert_eq!(
            json,
            r#"{"brand_name":"Amoxil","generic_name":"Amoxicillin","dosage_form":"CAPSULE","route":"ORAL","dosage_strength":"500mg","registration_number":"DR-XY12345"}"#
        );
    }

    #[test]
    fn catalog_row_defaults_missing_fields() {
        let row: CatalogRow =
            serde_json::from_str(r#"{"brand_name":"Biogesic"}"#).expect("deserialize row");
        assert_eq!(row.brand_name, "Biogesic");
        assert!(row.generic_name.is_empty());
        assert!(row.registration_number.is_empty());
    }

    #[test]
    fn default_options_enable_full_pipeline() {
        let options = NormalizationOptions::default();
        assert!(options.detect_flips);
        assert!(options.dedupe);
        assert!(options.skip_incomplete_rows);
        let relaxed = options.with_flip_detection(false).with_dedupe(false);
        assert!(!relaxed.detect_flips);
        assert!(!relaxed.dedupe);
    }
}
