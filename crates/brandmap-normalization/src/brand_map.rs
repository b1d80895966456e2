//! Catalog rows to brand-map rows.
//!
//! Each row is trimmed, checked for a brand/generic flip, given a canonical
//! form and route (and, when enabled, its canonical generic name), then
//! deduplicated on its case-insensitive
//! `(brand, generic, form, route, strength)` key. Rows never depend on each
//! other except through deduplication.

use std::collections::{BTreeMap, HashSet};

use brandmap_model::{BrandMap, BrandMapRow, BrandMapSummary, CatalogRow};

use crate::engine::NormalizationEngine;

/// Regulator export headers and their snake_case keys.
const COLUMN_KEYS: &[(&str, &str)] = &[
    ("Registration Number", "registration_number"),
    ("Generic Name", "generic_name"),
    ("Brand Name", "brand_name"),
    ("Dosage Strength", "dosage_strength"),
    ("Dosage Form", "dosage_form"),
    ("Pharmacologic Category", "pharmacologic_category"),
    ("Manufacturer", "manufacturer"),
    ("Country of Origin", "country_of_origin"),
    ("Application Type", "application_type"),
    ("Issuance Date", "issuance_date"),
    ("Expiry Date", "expiry_date"),
    ("Product Information", "product_information"),
];

/// snake_case key for a column header.
///
/// Known regulator headers use their fixed key; anything else is lower-cased
/// with spaces replaced by underscores.
pub fn column_key(header: &str) -> String {
    COLUMN_KEYS
        .iter()
        .find(|(name, _)| *name == header)
        .map_or_else(|| header.to_lowercase().replace(' ', "_"), |(_, key)| (*key).to_string())
}

pub fn normalize_columns<I, S>(headers: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    headers
        .into_iter()
        .map(|header| column_key(header.as_ref()))
        .collect()
}

/// Catalog row from a header -> value mapping. Missing fields are empty.
pub fn catalog_row_from_columns(columns: &BTreeMap<String, String>) -> CatalogRow {
    let mut row = CatalogRow::default();
    for (header, value) in columns {
        let slot = match column_key(header).as_str() {
            "brand_name" => &mut row.brand_name,
            "generic_name" => &mut row.generic_name,
            "dosage_form" => &mut row.dosage_form,
            "dosage_strength" => &mut row.dosage_strength,
            "registration_number" => &mut row.registration_number,
            _ => continue,
        };
        slot.clone_from(value);
    }
    row
}

/// Outcome of normalizing a single catalog row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// Brand or generic name missing and incomplete rows are skipped.
    Incomplete,
    Normalized { row: BrandMapRow, flipped: bool },
}

/// Normalize one catalog row without deduplication.
pub fn normalize_row(engine: &NormalizationEngine, row: &CatalogRow) -> RowOutcome {
    let options = engine.options();
    let mut row = CatalogRow {
        brand_name: row.brand_name.trim().to_string(),
        generic_name: row.generic_name.trim().to_string(),
        dosage_form: row.dosage_form.trim().to_string(),
        dosage_strength: row.dosage_strength.trim().to_string(),
        registration_number: row.registration_number.trim().to_string(),
    };
    if options.skip_incomplete_rows && (row.brand_name.is_empty() || row.generic_name.is_empty())
    {
        return RowOutcome::Incomplete;
    }

    let flipped = options.detect_flips && engine.is_flip(&row.brand_name, &row.generic_name);
    if flipped {
        tracing::debug!(
            brand = %row.brand_name,
            generic = %row.generic_name,
            "brand/generic columns swapped"
        );
        row.swap_brand_generic();
    }

    if options.resolve_generic_synonyms
        && let Some(canonical) = engine.canonical_generic(&row.generic_name)
        && canonical != row.generic_name.to_uppercase()
    {
        tracing::debug!(
            generic = %row.generic_name,
            canonical = %canonical,
            "generic synonym resolved"
        );
        row.generic_name = canonical;
    }

    let raw_form = row.dosage_form.as_str();
    let inference = engine.infer_form_and_route(raw_form);
    let dosage_form = match (&inference.form, options.canonical_form_output) {
        (Some(token), true) => engine.canonical_form(token),
        (None, true) if !raw_form.is_empty() => engine.canonical_form(raw_form),
        (Some(token), false) => token.clone(),
        _ => raw_form.to_string(),
    };

    RowOutcome::Normalized {
        row: BrandMapRow {
            brand_name: row.brand_name,
            generic_name: row.generic_name,
            dosage_form,
            route: inference.route.unwrap_or_default(),
            dosage_strength: row.dosage_strength,
            registration_number: row.registration_number,
        },
        flipped,
    }
}

/// Run every row through [`normalize_row`] and deduplicate the results.
pub fn build_brand_map<I>(engine: &NormalizationEngine, rows: I) -> BrandMap
where
    I: IntoIterator<Item = CatalogRow>,
{
    let dedupe = engine.options().dedupe;
    let mut summary = BrandMapSummary::default();
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for row in rows {
        summary.rows_read += 1;
        let (row, flipped) = match normalize_row(engine, &row) {
            RowOutcome::Incomplete => {
                summary.rows_incomplete += 1;
                continue;
            }
            RowOutcome::Normalized { row, flipped } => (row, flipped),
        };
        if flipped {
            summary.rows_flipped += 1;
        }
        if dedupe && !seen.insert(row.dedupe_key()) {
            summary.duplicates_dropped += 1;
            continue;
        }
        out.push(row);
    }

    summary.rows_written = out.len();
    tracing::debug!(
        rows_read = summary.rows_read,
        rows_incomplete = summary.rows_incomplete,
        rows_flipped = summary.rows_flipped,
        duplicates_dropped = summary.duplicates_dropped,
        rows_written = summary.rows_written,
        "brand map built"
    );
    BrandMap { rows: out, summary }
}
