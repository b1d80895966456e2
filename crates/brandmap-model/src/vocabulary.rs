//! Known generic-name vocabulary.
//!
//! The vocabulary is built from reference records of the shape
//! `(id, canonical name, lexeme)`. Every canonical name and every lexeme is a
//! known generic; each lexeme also maps back to its canonical name.
//!
//! Keys are stored upper-cased so lookups are case-insensitive.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// One row of the generic-name reference dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyRecord {
    /// External identifier (e.g. a DrugBank accession). May be empty.
    #[serde(alias = "drugbank_id")]
    pub id: String,
    #[serde(alias = "generic_name", alias = "canonical_generic_name")]
    pub canonical_name: String,
    /// Alternative name for the same substance. May be empty.
    #[serde(alias = "synonym")]
    pub lexeme: String,
}

impl VocabularyRecord {
    pub fn new(
        id: impl Into<String>,
        canonical_name: impl Into<String>,
        lexeme: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            canonical_name: canonical_name.into(),
            lexeme: lexeme.into(),
        }
    }
}

/// Immutable set of upper-cased generic names plus a synonym map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenericVocabulary {
    /// Where the records came from, for diagnostics.
    pub source: Option<String>,
    names: BTreeSet<String>,
    /// Upper-case lexeme -> upper-case canonical name.
    synonyms: BTreeMap<String, String>,
}

impl GenericVocabulary {
    /// An empty vocabulary: nothing matches and nothing resolves.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a VocabularyRecord>,
    {
        let mut vocabulary = Self::default();
        for record in records {
            vocabulary.add_record(record);
        }
        vocabulary
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Add a record. Blank names are ignored.
    pub fn add_record(&mut self, record: &VocabularyRecord) {
        let canonical = record.canonical_name.trim().to_uppercase();
        let lexeme = record.lexeme.trim().to_uppercase();
        if !canonical.is_empty() {
            self.names.insert(canonical.clone());
        }
        if !lexeme.is_empty() {
            self.names.insert(lexeme.clone());
            if !canonical.is_empty() && lexeme != canonical {
                self.synonyms.entry(lexeme).or_insert(canonical);
            }
        }
    }

    /// Exact, case-insensitive membership.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name.trim().to_uppercase())
    }

    /// Canonical name for a known generic or lexeme.
    ///
    /// Returns the upper-cased input when it is itself canonical, and `None`
    /// when the name is unknown.
    pub fn canonical_for(&self, name: &str) -> Option<String> {
        let key = name.trim().to_uppercase();
        if let Some(canonical) = self.synonyms.get(&key) {
            return Some(canonical.clone());
        }
        self.names.contains(&key).then_some(key)
    }

    /// All names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn synonym_count(&self) -> usize {
        self.synonyms.len()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GenericVocabulary {
        GenericVocabulary::from_records(&[
            VocabularyRecord::new("DB00316", "Acetaminophen", "Paracetamol"),
            VocabularyRecord::new("DB00316", "Acetaminophen", ""),
            VocabularyRecord::new("", "  ", "orphan"),
        ])
    }

    #[test]
    fn lookups_are_case_insensitive() {
        let vocabulary = sample();
        assert!(vocabulary.contains("paracetamol"));
        assert!(vocabulary.contains(" ACETAMINOPHEN "));
        assert!(!vocabulary.contains("acetamin"));
    }

    #[test]
    fn lexemes_resolve_to_canonical() {
        let vocabulary = sample();
        assert_eq!(
            vocabulary.canonical_for("Paracetamol").as_deref(),
            Some("ACETAMINOPHEN")
        );
        assert_eq!(
            vocabulary.canonical_for("acetaminophen").as_deref(),
            Some("ACETAMINOPHEN")
        );
        assert_eq!(vocabulary.canonical_for("ibuprofen"), None);
    }

    #[test]
    fn blank_canonical_keeps_lexeme_only() {
        let vocabulary = sample();
        assert!(vocabulary.contains("ORPHAN"));
        assert_eq!(vocabulary.len(), 3);
        assert_eq!(vocabulary.synonym_count(), 1);
    }
}
