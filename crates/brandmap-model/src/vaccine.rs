//! Vaccine antigen sets and match results.

use serde::{Deserialize, Serialize};

/// Sorted, de-duplicated canonical antigen names.
///
/// Two sets built from the same antigens in any order compare equal and
/// share the same [`key`](Self::key).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VaccineComponentSet(Vec<String>);

impl VaccineComponentSet {
    pub fn new<I, S>(components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut items: Vec<String> = components
            .into_iter()
            .map(|c| c.as_ref().trim().to_uppercase())
            .filter(|c| !c.is_empty())
            .collect();
        items.sort();
        items.dedup();
        Self(items)
    }

    /// `" + "`-joined lookup key.
    pub fn key(&self) -> String {
        self.0.join(" + ")
    }

    pub fn components(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Result of resolving free vaccine text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaccineMatch {
    pub acronym: Option<String>,
    pub components: Option<VaccineComponentSet>,
}

impl VaccineMatch {
    pub fn is_match(&self) -> bool {
        self.acronym.is_some() || self.components.is_some()
    }
}

/// Canonical vaccine product name with descriptive details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaccineName {
    pub canonical: String,
    /// `; `-joined details such as `13-valent; Live attenuated`.
    pub details: Option<String>,
}
