//! The normalization service.
//!
//! [`NormalizationEngine`] owns everything built from reference data: the
//! reference tables, the generic-name matcher and the compiled vaccine
//! patterns. Build one at process start (or use [`default_engine`]) and share
//! it by reference; it is immutable and `Send + Sync`, so rows can be
//! normalized from any number of threads.

use std::sync::OnceLock;

use brandmap_model::{
    BrandMap, CatalogRow, FormRouteInference, FormRouteRecord, GenericVocabulary,
    NormalizationOptions, NormalizedIngredient, TokenClass, VaccineMatch, VaccineName,
};
use brandmap_standards::{ReferenceTables, default_tables, load_vocabulary_or_empty};

use crate::brand_map;
use crate::flip::GenericMatcher;
use crate::forms;
use crate::salts;
use crate::synonyms;
use crate::text;
use crate::vaccine::{self, VaccineNamer};

static DEFAULT_ENGINE: OnceLock<NormalizationEngine> = OnceLock::new();

/// Engine over the embedded tables and the vocabulary named by
/// `BRANDMAP_VOCABULARY`, built on first use.
///
/// A missing vocabulary logs one warning and disables flip detection.
pub fn default_engine() -> &'static NormalizationEngine {
    DEFAULT_ENGINE.get_or_init(|| NormalizationEngine::new(load_vocabulary_or_empty(None)))
}

#[derive(Debug, Clone)]
pub struct NormalizationEngine {
    tables: &'static ReferenceTables,
    matcher: GenericMatcher,
    vaccines: VaccineNamer,
    options: NormalizationOptions,
}

impl NormalizationEngine {
    /// Engine over the embedded reference tables.
    pub fn new(vocabulary: GenericVocabulary) -> Self {
        Self::with_tables(default_tables(), vocabulary)
    }

    pub fn with_tables(tables: &'static ReferenceTables, vocabulary: GenericVocabulary) -> Self {
        tracing::debug!(
            vocabulary = vocabulary.len(),
            source = vocabulary.source.as_deref().unwrap_or("<none>"),
            "normalization engine ready"
        );
        Self {
            tables,
            matcher: GenericMatcher::new(tables, vocabulary),
            vaccines: VaccineNamer::new(tables),
            options: NormalizationOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: NormalizationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &NormalizationOptions {
        &self.options
    }

    pub fn tables(&self) -> &'static ReferenceTables {
        self.tables
    }

    pub fn matcher(&self) -> &GenericMatcher {
        &self.matcher
    }

    // -------------------------------------------------------------------------
    // Text and ingredients
    // -------------------------------------------------------------------------

    pub fn normalize(&self, raw: &str) -> String {
        text::normalize(raw)
    }

    /// Base name and salt qualifiers of an ingredient string.
    pub fn split(&self, raw: &str) -> NormalizedIngredient {
        salts::split_base_and_salts(self.tables, raw)
    }

    pub fn classify_tokens(&self, raw: &str) -> Vec<(String, TokenClass)> {
        salts::classify_tokens(self.tables, raw)
    }

    pub fn detect_as_boundary(&self, norm_text: &str) -> Option<usize> {
        salts::detect_as_boundary(self.tables, norm_text)
    }

    pub fn strip_after_as(&self, norm_text: &str) -> String {
        salts::strip_after_as(self.tables, norm_text)
    }

    pub fn parse_compound_salt(&self, name: &str) -> Option<(String, String)> {
        salts::parse_compound_salt(self.tables, name)
    }

    pub fn related_salts(&self, name: &str) -> Vec<String> {
        salts::related_salts(self.tables, name)
    }

    pub fn is_pure_salt_compound(&self, name: &str) -> bool {
        salts::is_pure_salt_compound(self.tables, name)
    }

    pub fn is_element_drug(&self, token: &str) -> bool {
        salts::is_element_drug(self.tables, token)
    }

    // -------------------------------------------------------------------------
    // Forms and routes
    // -------------------------------------------------------------------------

    pub fn canonical_form(&self, raw_form: &str) -> String {
        forms::canonical_form(self.tables, raw_form)
    }

    pub fn canonical_route(&self, route: &str) -> String {
        forms::canonical_route(self.tables, route)
    }

    pub fn primary_route(&self, form: &str) -> Option<String> {
        forms::primary_route(self.tables, form)
    }

    pub fn valid_routes(&self, form: &str) -> Vec<String> {
        forms::valid_routes(self.tables, form)
    }

    pub fn is_valid_form_route_pair(&self, form: &str, route: &str) -> bool {
        forms::is_valid_form_route_pair(self.tables, form, route)
    }

    pub fn forms_equivalent(&self, a: &str, b: &str) -> bool {
        forms::forms_equivalent(self.tables, a, b)
    }

    pub fn classify_form(&self, raw_form: &str) -> FormRouteRecord {
        forms::classify_form(self.tables, raw_form)
    }

    pub fn parse_form_from_text(&self, norm_text: &str) -> Option<String> {
        forms::parse_form_from_text(self.tables, norm_text)
    }

    pub fn extract_route_and_form(&self, norm_text: &str) -> FormRouteInference {
        forms::extract_route_and_form(self.tables, norm_text)
    }

    pub fn infer_form_and_route(&self, raw_form: &str) -> FormRouteInference {
        forms::infer_form_and_route(self.tables, raw_form)
    }

    // -------------------------------------------------------------------------
    // Generics
    // -------------------------------------------------------------------------

    /// Whether the brand and generic columns of a row are swapped.
    pub fn is_flip(&self, brand: &str, generic: &str) -> bool {
        self.matcher.is_flip(brand, generic)
    }

    pub fn is_known_generic(&self, name: &str) -> bool {
        self.matcher.is_match(name)
    }

    /// Canonical vocabulary name for a generic or one of its lexemes.
    ///
    /// Upper-case; `None` when the name is unknown or no vocabulary is loaded.
    pub fn canonical_generic(&self, name: &str) -> Option<String> {
        self.matcher.vocabulary().canonical_for(name)
    }

    pub fn resolve_spelling_synonym(&self, name: &str) -> String {
        synonyms::resolve_spelling_synonym(self.tables, name)
    }

    pub fn generic_synonym(&self, name: &str) -> Option<String> {
        synonyms::generic_synonym(self.tables, name)
    }

    pub fn regional_canonical(&self, name: &str) -> String {
        synonyms::regional_canonical(self.tables, name)
    }

    pub fn us_canonical(&self, name: &str) -> String {
        synonyms::us_canonical(self.tables, name)
    }

    pub fn is_multiword_generic(&self, name: &str) -> bool {
        synonyms::is_multiword_generic(self.tables, name)
    }

    // -------------------------------------------------------------------------
    // Vaccines and combinations
    // -------------------------------------------------------------------------

    pub fn expand_acronym(&self, acronym: &str) -> Option<Vec<String>> {
        vaccine::expand_acronym(self.tables, acronym)
    }

    pub fn acronym_for<I, S>(&self, components: I) -> Option<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        vaccine::acronym_for(self.tables, components)
    }

    pub fn match_vaccine_text(&self, text: &str) -> VaccineMatch {
        vaccine::match_text(self.tables, text)
    }

    pub fn normalize_vaccine_name(&self, text: &str) -> Option<VaccineName> {
        self.vaccines.normalize(text)
    }

    pub fn is_combination_atc(&self, atc_code: &str) -> bool {
        vaccine::is_combination_atc(self.tables, atc_code)
    }

    pub fn canonical_atc(&self, generic: &str) -> Option<String> {
        vaccine::canonical_atc(self.tables, generic)
    }

    pub fn is_combination_generic(&self, name: &str) -> bool {
        vaccine::is_combination_generic(self.tables, name)
    }

    // -------------------------------------------------------------------------
    // Catalog rows
    // -------------------------------------------------------------------------

    /// Normalize, flip-correct and deduplicate catalog rows.
    pub fn build_brand_map<I>(&self, rows: I) -> BrandMap
    where
        I: IntoIterator<Item = CatalogRow>,
    {
        brand_map::build_brand_map(self, rows)
    }
}
