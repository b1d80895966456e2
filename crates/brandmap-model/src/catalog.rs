//! Catalog rows as delivered by the regulator export and the normalized
//! brand-map rows handed back to the exporter.

use serde::{Deserialize, Serialize};

/// A raw product row from the regulator catalog.
///
/// Every field is a plain string. Absent columns deserialize to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogRow {
    pub brand_name: String,
    pub generic_name: String,
    pub dosage_form: String,
    pub dosage_strength: String,
    pub registration_number: String,
}

impl CatalogRow {
    /// Create a row from its four descriptive fields.
    pub fn new(
        brand_name: impl Into<String>,
        generic_name: impl Into<String>,
        dosage_form: impl Into<String>,
        dosage_strength: impl Into<String>,
    ) -> Self {
        Self {
            brand_name: brand_name.into(),
            generic_name: generic_name.into(),
            dosage_form: dosage_form.into(),
            dosage_strength: dosage_strength.into(),
            registration_number: String::new(),
        }
    }

    #[must_use]
    pub fn with_registration_number(mut self, value: impl Into<String>) -> Self {
        self.registration_number = value.into();
        self
    }

    /// Exchange the brand and generic columns.
    pub fn swap_brand_generic(&mut self) {
        std::mem::swap(&mut self.brand_name, &mut self.generic_name);
    }
}

/// A normalized brand-map row.
///
/// Field order matches the exported CSV header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandMapRow {
    pub brand_name: String,
    pub generic_name: String,
    /// Canonical dosage form, or the raw form when nothing was recognized.
    pub dosage_form: String,
    pub route: String,
    pub dosage_strength: String,
    pub registration_number: String,
}

impl BrandMapRow {
    /// Column names in export order.
    pub const FIELDS: [&'static str; 6] = [
        "brand_name",
        "generic_name",
        "dosage_form",
        "route",
        "dosage_strength",
        "registration_number",
    ];

    /// Case-insensitive identity used for de-duplication.
    pub fn dedupe_key(&self) -> DedupeKey {
        DedupeKey {
            brand_name: self.brand_name.to_lowercase(),
            generic_name: self.generic_name.to_lowercase(),
            dosage_form: self.dosage_form.to_lowercase(),
            route: self.route.to_lowercase(),
            dosage_strength: self.dosage_strength.to_lowercase(),
        }
    }
}

/// Lowercased `(brand, generic, form, route, strength)` tuple.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DedupeKey {
    pub brand_name: String,
    pub generic_name: String,
    pub dosage_form: String,
    pub route: String,
    pub dosage_strength: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedupe_key_ignores_case() {
        let a = BrandMapRow {
            brand_name: "Amoxil".to_string(),
            generic_name: "Amoxicillin".to_string(),
            dosage_form: "CAPSULE".to_string(),
            route: "ORAL".to_string(),
            dosage_strength: "500mg".to_string(),
            registration_number: "DR-1".to_string(),
        };
        let b = BrandMapRow {
            brand_name: "AMOXIL".to_string(),
            registration_number: "DR-2".to_string(),
            ..a.clone()
        };
        assert_eq!(a.dedupe_key(), b.dedupe_key());
    }

    #[test]
    fn swap_exchanges_columns() {
        let mut row = CatalogRow::new("Amlodipine", "Norvasc", "Tablet", "5mg");
        row.swap_brand_generic();
        assert_eq!(row.brand_name, "Norvasc");
        assert_eq!(row.generic_name, "Amlodipine");
    }
}
