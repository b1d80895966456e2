//! CSV round trip through the brand-map pipeline.

use std::fs;

use brandmap_cli::catalog::{read_catalog, write_brand_map};
use brandmap_model::{GenericVocabulary, VocabularyRecord};
use brandmap_normalization::NormalizationEngine;
use tempfile::TempDir;

const CATALOG: &str = "\
Registration Number,Generic Name,Brand Name,Dosage Strength,Dosage Form,Country of Origin
DR-XY12345,Amoxicillin,Amoxil,500mg,Capsule,India
DR-XY12346,Norvasc,Amlodipine,5mg,Tablet,USA
DR-XY12347,amoxicillin,AMOXIL,500MG,caps,India
DR-XY12348,Paracetamol,,500mg,Tablet,Philippines
";

fn engine() -> NormalizationEngine {
    let records = [
        VocabularyRecord::new("DB00381", "Amlodipine", ""),
        VocabularyRecord::new("DB01060", "Amoxicillin", ""),
    ];
    NormalizationEngine::new(GenericVocabulary::from_records(&records))
}

#[test]
fn catalog_csv_to_brand_map_csv() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("catalog.csv");
    let output = dir.path().join("brand_map.csv");
    fs::write(&input, CATALOG).expect("write catalog");

    let rows = read_catalog(&input).expect("read catalog");
    assert_eq!(rows.len(), 4);

    let map = engine().build_brand_map(rows);
    write_brand_map(&output, &map.rows).expect("write brand map");

    let written = fs::read_to_string(&output).expect("read output");
    insta::assert_snapshot!(written, @r"
    brand_name,generic_name,dosage_form,route,dosage_strength,registration_number
    Amoxil,Amoxicillin,CAPSULE,ORAL,500mg,DR-XY12345
    Norvasc,Amlodipine,TABLET,ORAL,5mg,DR-XY12346
    ");

    assert_eq!(map.summary.rows_read, 4);
    assert_eq!(map.summary.rows_incomplete, 1);
    assert_eq!(map.summary.rows_flipped, 1);
    assert_eq!(map.summary.duplicates_dropped, 1);
}

#[test]
fn missing_input_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let error = read_catalog(&dir.path().join("absent.csv")).expect_err("missing file");
    assert!(error.to_string().contains("absent.csv"));
}
