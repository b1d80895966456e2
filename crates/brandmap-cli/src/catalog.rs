//! CSV adapters for the regulator catalog export and the brand-map output.

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use brandmap_model::{BrandMapRow, CatalogRow};
use brandmap_normalization::normalize_columns;
use chrono::NaiveDate;
use csv::StringRecord;

/// Read a catalog CSV file. Headers are normalized to snake_case keys.
pub fn read_catalog(path: &Path) -> Result<Vec<CatalogRow>> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    read_catalog_from_reader(file).with_context(|| format!("read {}", path.display()))
}

pub fn read_catalog_from_reader<R: Read>(reader: R) -> Result<Vec<CatalogRow>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = reader.headers().context("read header row")?.clone();
    let keys = normalize_columns(
        headers
            .iter()
            .map(|header| header.trim_start_matches('\u{feff}').trim()),
    );
    reader.set_headers(StringRecord::from(keys));

    let mut rows = Vec::new();
    for (index, record) in reader.deserialize::<CatalogRow>().enumerate() {
        // Header is line 1.
        let row = record.with_context(|| format!("parse catalog line {}", index + 2))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Default output file name, `brand_map_<YYYY-MM-DD>.csv`.
pub fn default_output_path(date: NaiveDate) -> PathBuf {
    PathBuf::from(format!("brand_map_{}.csv", date.format("%Y-%m-%d")))
}

/// Write brand-map rows to a CSV file, header first.
pub fn write_brand_map(path: &Path, rows: &[BrandMapRow]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_brand_map_to_writer(file, rows).with_context(|| format!("write {}", path.display()))
}

/// The header row is always written, even for an empty map.
pub fn write_brand_map_to_writer<W: Write>(writer: W, rows: &[BrandMapRow]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    writer.write_record(BrandMapRow::FIELDS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regulator_headers_are_normalized() {
        let input = "\u{feff}Registration Number,Generic Name,Brand Name,Dosage Strength,Dosage Form,Manufacturer\n\
                     DR-XY12345,Amoxicillin,Amoxil,500mg,Capsule,GSK\n";
        let rows = read_catalog_from_reader(input.as_bytes()).expect("read catalog");
        assert_eq!(
            rows,
            vec![
                CatalogRow::new("Amoxil", "Amoxicillin", "Capsule", "500mg")
                    .with_registration_number("DR-XY12345")
            ]
        );
    }

    #[test]
    fn missing_columns_read_as_empty() {
        let rows = read_catalog_from_reader("Brand Name\nBiogesic\n".as_bytes()).expect("read");
        assert_eq!(rows[0].brand_name, "Biogesic");
        assert!(rows[0].generic_name.is_empty());
    }

    #[test]
    fn default_name_carries_date() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 9).expect("valid date");
        assert_eq!(default_output_path(date), PathBuf::from("brand_map_2026-03-09.csv"));
    }

    #[test]
    fn empty_map_still_has_header() {
        let mut out = Vec::new();
        write_brand_map_to_writer(&mut out, &[]).expect("write");
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "brand_name,generic_name,dosage_form,route,dosage_strength,registration_number\n"
        );
    }
}
