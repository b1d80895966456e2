//! Process-wide reference tables.
//!
//! [`ReferenceTables`] is built once from the embedded CSV records and the
//! static word lists. Reverse maps (components -> acronym, form -> equivalence
//! group, lower-case match sets) are computed here so lookups never rebuild
//! them.

use std::collections::{HashMap, HashSet};
use std::io::Cursor;
use std::sync::OnceLock;

use brandmap_model::VaccineComponentSet;
use serde::de::DeserializeOwned;

use crate::embedded;
use crate::error::{Result, StandardsError};
use crate::records::{
    CanonicalGeneric, FormRouteDefaultRow, FormRow, FormRoutesRow, RouteAliasRow,
    SynonymKind, SynonymRow, VaccineAcronymRow, VaccineCanonical, VaccineCanonicalRow,
    VaccineKeywordRow, split_list,
};
use crate::tables;

static DEFAULT_TABLES: OnceLock<ReferenceTables> = OnceLock::new();

/// The embedded reference tables, built on first use.
///
/// # Panics
///
/// Panics if the compiled-in data is malformed. The crate's tests load every
/// embedded file, so this cannot happen in a tested build.
pub fn default_tables() -> &'static ReferenceTables {
    DEFAULT_TABLES.get_or_init(|| {
        ReferenceTables::load().expect("embedded reference tables are valid")
    })
}

/// All static lookup data used by the normalization engine.
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    form_canon: HashMap<String, String>,
    form_routes: HashMap<String, Vec<String>>,
    form_route_default: HashMap<String, String>,
    /// Lower-case default-route form keys, longest first.
    form_words: Vec<String>,
    /// Lower-case alias -> canonical route, in priority order.
    route_aliases: Vec<(String, String)>,
    route_canon: HashMap<String, String>,
    equivalence_group: HashMap<String, usize>,

    salt_words: HashSet<String>,
    cation_words: HashSet<String>,
    base_ignore_words: HashSet<String>,
    unit_words: HashSet<String>,
    pure_salt_compounds: HashSet<&'static str>,
    salt_cations: HashSet<&'static str>,
    salt_anions: HashSet<&'static str>,
    element_drugs: HashSet<&'static str>,
    multiword_generics: HashSet<&'static str>,

    generic_synonyms: HashMap<String, String>,
    spelling_synonyms: HashMap<String, String>,
    regional_canonical: HashMap<String, String>,
    regional_to_us: HashMap<String, String>,

    vaccine_canonical: Vec<VaccineCanonical>,
    vaccine_acronyms: HashMap<String, Vec<String>>,
    /// Acronyms longest first; equal lengths keep file order.
    acronyms_by_length: Vec<String>,
    /// `(keyword, component)` longest keyword first.
    component_keywords: Vec<(String, String)>,
    components_to_acronym: HashMap<String, String>,

    canonical_generics: Vec<CanonicalGeneric>,
    atc_by_name: HashMap<String, String>,
}

impl ReferenceTables {
    /// Parse every embedded table and build the reverse maps.
    pub fn load() -> Result<Self> {
        let mut tables = Self::from_word_lists();
        tables.load_forms()?;
        tables.load_routes()?;
        tables.load_synonyms()?;
        tables.load_vaccines()?;
        tables.load_canonical_generics()?;
        tracing::debug!(
            forms = tables.form_canon.len(),
            route_aliases = tables.route_aliases.len(),
            synonyms = tables.generic_synonyms.len() + tables.spelling_synonyms.len(),
            acronyms = tables.vaccine_acronyms.len(),
            "reference tables loaded"
        );
        Ok(tables)
    }

    fn from_word_lists() -> Self {
        let lower = |items: &[&str]| -> HashSet<String> {
            items.iter().map(|s| s.to_lowercase()).collect()
        };
        let upper = |items: &'static [&'static str]| -> HashSet<&'static str> {
            items.iter().copied().collect()
        };

        let mut salt_words = lower(tables::SALT_TOKENS);
        salt_words.insert("salt".to_string());
        salt_words.insert("salts".to_string());
        let unit_words = lower(tables::UNIT_TOKENS);
        let mut base_ignore_words = lower(tables::STOPWORDS);
        base_ignore_words.extend(unit_words.iter().cloned());

        let mut equivalence_group = HashMap::new();
        for (idx, group) in tables::FORM_EQUIVALENCE_GROUPS.iter().enumerate() {
            for form in *group {
                equivalence_group.insert((*form).to_string(), idx);
            }
        }

        Self {
            form_canon: HashMap::new(),
            form_routes: HashMap::new(),
            form_route_default: HashMap::new(),
            form_words: Vec::new(),
            route_aliases: Vec::new(),
            route_canon: HashMap::new(),
            equivalence_group,
            salt_words,
            cation_words: lower(tables::SALT_CATIONS),
            base_ignore_words,
            unit_words,
            pure_salt_compounds: upper(tables::PURE_SALT_COMPOUNDS),
            salt_cations: upper(tables::SALT_CATIONS),
            salt_anions: upper(tables::SALT_ANIONS),
            element_drugs: upper(tables::ELEMENT_DRUGS),
            multiword_generics: upper(tables::MULTIWORD_GENERICS),
            generic_synonyms: HashMap::new(),
            spelling_synonyms: HashMap::new(),
            regional_canonical: HashMap::new(),
            regional_to_us: HashMap::new(),
            vaccine_canonical: Vec::new(),
            vaccine_acronyms: HashMap::new(),
            acronyms_by_length: Vec::new(),
            component_keywords: Vec::new(),
            components_to_acronym: HashMap::new(),
            canonical_generics: Vec::new(),
            atc_by_name: HashMap::new(),
        }
    }

    fn load_forms(&mut self) -> Result<()> {
        for row in read_records::<FormRow>("forms.csv", embedded::FORMS)? {
            self.form_canon
                .insert(key(&row.form), row.canonical.trim().to_uppercase());
        }

        for row in read_records::<FormRoutesRow>("form_routes.csv", embedded::FORM_ROUTES)? {
            let routes = split_list(&row.routes, ';');
            if routes.is_empty() {
                return Err(StandardsError::InvalidRecord {
                    file: "form_routes.csv".to_string(),
                    message: format!("form '{}' lists no routes", row.form.trim()),
                });
            }
            self.form_routes.insert(key(&row.form), routes);
        }

        let defaults = read_records::<FormRouteDefaultRow>(
            "form_route_default.csv",
            embedded::FORM_ROUTE_DEFAULT,
        )?;
        let mut words: Vec<String> = Vec::with_capacity(defaults.len());
        for row in defaults {
            let form = key(&row.form);
            words.push(form.to_lowercase());
            self.form_route_default
                .insert(form, row.route.trim().to_uppercase());
        }
        words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        words.dedup();
        self.form_words = words;
        Ok(())
    }

    fn load_routes(&mut self) -> Result<()> {
        for row in read_records::<RouteAliasRow>("route_aliases.csv", embedded::ROUTE_ALIASES)? {
            let alias = key(&row.alias);
            let route = row.route.trim().to_uppercase();
            self.route_aliases
                .push((alias.to_lowercase(), route.clone()));
            self.route_canon.insert(alias, route);
        }
        Ok(())
    }

    fn load_synonyms(&mut self) -> Result<()> {
        for row in read_records::<SynonymRow>("synonyms.csv", embedded::SYNONYMS)? {
            let name = key(&row.name);
            let target = key(&row.target);
            match row.kind {
                // Later kinds override earlier ones for the same name.
                SynonymKind::Generic | SynonymKind::IvFluid | SynonymKind::Component => {
                    self.generic_synonyms.insert(name, target);
                }
                SynonymKind::Spelling => {
                    self.spelling_synonyms.insert(name, target);
                }
                SynonymKind::Regional => {
                    self.regional_to_us.insert(target.clone(), name.clone());
                    self.regional_canonical.insert(name, target);
                }
            }
        }
        Ok(())
    }

    fn load_vaccines(&mut self) -> Result<()> {
        for row in read_records::<VaccineCanonicalRow>(
            "vaccine_canonical.csv",
            embedded::VACCINE_CANONICAL,
        )? {
            let acronym = row.acronym.trim();
            self.vaccine_canonical.push(VaccineCanonical {
                canonical: key(&row.canonical),
                acronym: (!acronym.is_empty()).then(|| acronym.to_string()),
                patterns: split_list(&row.patterns, '|'),
            });
        }

        for row in read_records::<VaccineAcronymRow>(
            "vaccine_acronyms.csv",
            embedded::VACCINE_ACRONYMS,
        )? {
            let acronym = key(&row.acronym);
            let components = split_list(&row.components, '|');
            if components.is_empty() {
                return Err(StandardsError::InvalidRecord {
                    file: "vaccine_acronyms.csv".to_string(),
                    message: format!("acronym '{acronym}' lists no components"),
                });
            }
            let set_key = VaccineComponentSet::new(&components).key();
            let prefer = self
                .components_to_acronym
                .get(&set_key)
                .is_none_or(|existing| acronym.len() < existing.len());
            if prefer {
                self.components_to_acronym
                    .insert(set_key, acronym.clone());
            }
            if !self.vaccine_acronyms.contains_key(&acronym) {
                self.acronyms_by_length.push(acronym.clone());
            }
            self.vaccine_acronyms.insert(acronym, components);
        }
        self.acronyms_by_length
            .sort_by(|a, b| b.len().cmp(&a.len()));

        for row in read_records::<VaccineKeywordRow>(
            "vaccine_keywords.csv",
            embedded::VACCINE_KEYWORDS,
        )? {
            self.component_keywords
                .push((key(&row.keyword), key(&row.component)));
        }
        self.component_keywords
            .sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        Ok(())
    }

    fn load_canonical_generics(&mut self) -> Result<()> {
        for mut row in read_records::<CanonicalGeneric>(
            "canonical_generics.csv",
            embedded::CANONICAL_GENERICS,
        )? {
            row.generic_name = key(&row.generic_name);
            if let Some(atc) = &row.atc_code {
                self.atc_by_name
                    .entry(row.generic_name.clone())
                    .or_insert_with(|| atc.clone());
            }
            self.canonical_generics.push(row);
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Forms and routes
    // -------------------------------------------------------------------------

    /// Canonical form for an upper-case form key.
    pub fn form_canon(&self, form: &str) -> Option<&str> {
        self.form_canon.get(form).map(String::as_str)
    }

    /// Ordered routes for a canonical form.
    pub fn form_routes(&self, canonical: &str) -> Option<&[String]> {
        self.form_routes.get(canonical).map(Vec::as_slice)
    }

    /// Single default route for an upper-case form key.
    pub fn default_route(&self, form: &str) -> Option<&str> {
        self.form_route_default.get(form).map(String::as_str)
    }

    /// Lower-case form keywords, longest first.
    pub fn form_words(&self) -> &[String] {
        &self.form_words
    }

    /// Lower-case route aliases with their canonical route, in priority order.
    pub fn route_aliases(&self) -> &[(String, String)] {
        &self.route_aliases
    }

    /// Canonical route for an upper-case alias.
    pub fn route_canon(&self, alias: &str) -> Option<&str> {
        self.route_canon.get(alias).map(String::as_str)
    }

    /// Equivalence group index of a canonical form.
    pub fn equivalence_group(&self, canonical: &str) -> Option<usize> {
        self.equivalence_group.get(canonical).copied()
    }

    // -------------------------------------------------------------------------
    // Token vocabularies (lower-case keys)
    // -------------------------------------------------------------------------

    /// Salt vocabulary membership, including `salt`/`salts`.
    pub fn is_salt_word(&self, token: &str) -> bool {
        self.salt_words.contains(token)
    }

    pub fn is_cation_word(&self, token: &str) -> bool {
        self.cation_words.contains(token)
    }

    /// Stopwords and units: never part of a base name.
    pub fn is_base_ignore_word(&self, token: &str) -> bool {
        self.base_ignore_words.contains(token)
    }

    pub fn is_unit_word(&self, token: &str) -> bool {
        self.unit_words.contains(token)
    }

    /// Upper-case salt tokens, for building suffix patterns.
    pub fn salt_tokens(&self) -> &'static [&'static str] {
        tables::SALT_TOKENS
    }

    // -------------------------------------------------------------------------
    // Salt chemistry (upper-case keys)
    // -------------------------------------------------------------------------

    pub fn is_pure_salt_compound(&self, name: &str) -> bool {
        self.pure_salt_compounds.contains(name)
    }

    pub fn is_salt_cation(&self, name: &str) -> bool {
        self.salt_cations.contains(name)
    }

    pub fn is_salt_anion(&self, name: &str) -> bool {
        self.salt_anions.contains(name)
    }

    /// Cations commonly paired with an anion.
    pub fn cations_for_anion(&self, anion: &str) -> &'static [&'static str] {
        tables::ANION_TO_CATIONS
            .iter()
            .find(|(a, _)| *a == anion)
            .map(|(_, cations)| *cations)
            .unwrap_or_default()
    }

    pub fn is_element_drug(&self, name: &str) -> bool {
        self.element_drugs.contains(name)
    }

    pub fn is_multiword_generic(&self, name: &str) -> bool {
        self.multiword_generics.contains(name)
    }

    // -------------------------------------------------------------------------
    // Synonyms (upper-case keys)
    // -------------------------------------------------------------------------

    pub fn generic_synonym(&self, name: &str) -> Option<&str> {
        self.generic_synonyms.get(name).map(String::as_str)
    }

    pub fn spelling_synonym(&self, name: &str) -> Option<&str> {
        self.spelling_synonyms.get(name).map(String::as_str)
    }

    pub fn regional_canonical(&self, name: &str) -> Option<&str> {
        self.regional_canonical.get(name).map(String::as_str)
    }

    pub fn us_canonical(&self, name: &str) -> Option<&str> {
        self.regional_to_us.get(name).map(String::as_str)
    }

    // -------------------------------------------------------------------------
    // Vaccines
    // -------------------------------------------------------------------------

    pub fn vaccine_canonical(&self) -> &[VaccineCanonical] {
        &self.vaccine_canonical
    }

    /// Components of an upper-case acronym.
    pub fn vaccine_components(&self, acronym: &str) -> Option<&[String]> {
        self.vaccine_acronyms.get(acronym).map(Vec::as_slice)
    }

    pub fn acronyms_by_length(&self) -> &[String] {
        &self.acronyms_by_length
    }

    pub fn component_keywords(&self) -> &[(String, String)] {
        &self.component_keywords
    }

    /// Acronym for a `" + "`-joined sorted component key.
    pub fn acronym_for_key(&self, key: &str) -> Option<&str> {
        self.components_to_acronym.get(key).map(String::as_str)
    }

    // -------------------------------------------------------------------------
    // ATC
    // -------------------------------------------------------------------------

    pub fn canonical_generics(&self) -> &[CanonicalGeneric] {
        &self.canonical_generics
    }

    /// ATC code for an upper-case canonical generic.
    pub fn canonical_atc(&self, name: &str) -> Option<&str> {
        self.atc_by_name.get(name).map(String::as_str)
    }

    pub fn is_combination_atc_prefix(&self, code: &str) -> bool {
        tables::ATC_COMBINATION_PATTERNS
            .iter()
            .any(|prefix| code.starts_with(prefix))
    }

    pub fn is_combination_atc_suffix(&self, suffix: &str) -> bool {
        tables::COMBINATION_ATC_SUFFIXES.contains(&suffix)
    }
}

fn key(value: &str) -> String {
    value.trim().to_uppercase()
}

fn read_records<T: DeserializeOwned>(file: &str, content: &str) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(Cursor::new(content.as_bytes()));
    let mut rows = Vec::new();
    for result in reader.deserialize::<T>() {
        rows.push(result.map_err(|e| StandardsError::csv(file, &e))?);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> &'static ReferenceTables {
        default_tables()
    }

    #[test]
    fn embedded_tables_load() {
        let tables = ReferenceTables::load().expect("load tables");
        assert!(!tables.form_words().is_empty());
        assert!(!tables.route_aliases().is_empty());
        assert!(!tables.vaccine_canonical().is_empty());
    }

    #[test]
    fn form_lookups() {
        let t = tables();
        assert_eq!(t.form_canon("CAPS"), Some("CAPSULE"));
        assert_eq!(t.form_routes("TABLET").map(<[String]>::len), Some(1));
        assert_eq!(t.default_route("CAPSULE"), Some("ORAL"));
        assert_eq!(t.route_canon("PO"), Some("ORAL"));
        assert_eq!(t.equivalence_group("TABLET"), t.equivalence_group("CAPSULE"));
        assert_ne!(t.equivalence_group("TABLET"), t.equivalence_group("CREAM"));
    }

    #[test]
    fn form_words_are_longest_first() {
        let words = tables().form_words();
        assert!(words.windows(2).all(|w| w[0].len() >= w[1].len()));
        assert!(words.iter().all(|w| *w == w.to_lowercase()));
    }

    #[test]
    fn salt_vocabulary_is_lowercase_and_includes_salt() {
        let t = tables();
        assert!(t.is_salt_word("hydrochloride"));
        assert!(t.is_salt_word("salts"));
        assert!(!t.is_salt_word("HYDROCHLORIDE"));
        assert!(t.is_cation_word("sodium"));
        assert!(t.is_base_ignore_word("tablet"));
        assert!(t.is_base_ignore_word("mg"));
    }

    #[test]
    fn reverse_acronym_prefers_shortest() {
        let t = tables();
        let key = VaccineComponentSet::new(["TETANUS", "DIPHTHERIA", "PERTUSSIS"]).key();
        assert_eq!(t.acronym_for_key(&key), Some("DTP"));
        let first = &t.acronyms_by_length()[0];
        assert!(t.acronyms_by_length().iter().all(|a| a.len() <= first.len()));
    }

    #[test]
    fn keywords_are_longest_first() {
        let keywords = tables().component_keywords();
        assert!(keywords.windows(2).all(|w| w[0].0.len() >= w[1].0.len()));
    }

    #[test]
    fn synonyms_resolve() {
        let t = tables();
        assert_eq!(t.spelling_synonym("ASPIRIN"), Some("ACETYLSALICYLIC ACID"));
        assert_eq!(t.regional_canonical("ACETAMINOPHEN"), Some("PARACETAMOL"));
        assert_eq!(t.us_canonical("PARACETAMOL"), Some("ACETAMINOPHEN"));
        assert_eq!(t.generic_synonym("NSS"), Some("SODIUM CHLORIDE"));
        assert_eq!(t.generic_synonym("GENTAMICIN"), Some("GENTAMICIN C2"));
    }

    #[test]
    fn canonical_atc_lookup() {
        let t = tables();
        assert_eq!(t.canonical_atc("CO-AMOXICLAV"), Some("J01CR02"));
        assert_eq!(t.canonical_atc("COTRIMOXAZOLE"), Some("J01EE01"));
        assert_eq!(t.canonical_atc("PARACETAMOL"), None);
        assert_eq!(t.cations_for_anion("FUMARATE"), &["FERROUS"]);
    }
}
