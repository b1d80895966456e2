//! Configuration options for brand-map normalization.

use serde::{Deserialize, Serialize};

/// Options controlling the row pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationOptions {
    /// Swap brand and generic columns when they look transposed.
    pub detect_flips: bool,

    /// Drop rows whose `(brand, generic, form, route, strength)` key was
    /// already seen (case-insensitive, first occurrence wins).
    pub dedupe: bool,

    /// Skip rows with an empty brand or generic name.
    pub skip_incomplete_rows: bool,

    /// Emit the canonical form (`CAPSULE`) instead of the matched form
    /// keyword (`capsule`).
    pub canonical_form_output: bool,

    /// Replace a generic name that is a vocabulary lexeme with its canonical
    /// name (`PARACETAMOL` -> `ACETAMINOPHEN`).
    pub resolve_generic_synonyms: bool,
}

impl Default for NormalizationOptions {
    fn default() -> Self {
        Self {
            detect_flips: true,
            dedupe: true,
            skip_incomplete_rows: true,
            canonical_form_output: true,
            resolve_generic_synonyms: false,
        }
    }
}

impl NormalizationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_flip_detection(mut self, enable: bool) -> Self {
        self.detect_flips = enable;
        self
    }

    #[must_use]
    pub fn with_dedupe(mut self, enable: bool) -> Self {
        self.dedupe = enable;
        self
    }

    #[must_use]
    pub fn with_skip_incomplete_rows(mut self, enable: bool) -> Self {
        self.skip_incomplete_rows = enable;
        self
    }

    #[must_use]
    pub fn with_canonical_form_output(mut self, enable: bool) -> Self {
        self.canonical_form_output = enable;
        self
    }

    #[must_use]
    pub fn with_generic_synonyms(mut self, enable: bool) -> Self {
        self.resolve_generic_synonyms = enable;
        self
    }
}
