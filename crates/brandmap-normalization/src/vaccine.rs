//! Vaccine acronyms, component sets and canonical vaccine names, plus
//! ATC-based combination detection for everything else.

use std::sync::LazyLock;

use brandmap_model::{VaccineComponentSet, VaccineMatch, VaccineName};
use brandmap_standards::ReferenceTables;
use regex::{Regex, RegexBuilder};

use crate::text::{collapse_whitespace, contains_word};

static VALENCY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)-?VALENT").expect("Invalid valency regex"));

static TYPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(TYPES?\s+([^)]+)\)").expect("Invalid type regex"));

static GROUP_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:GROUP|SEROGROUP)\s+([A-Z,\s+]+?)(?:\s|$|\))").expect("Invalid group regex")
});

const ACRONYM_SUFFIXES: [&str; 3] = [" VACCINE", "-VACCINE", "VACCINE"];

/// Components of a vaccine acronym, e.g. `DTP` or `dtp vaccine`.
pub fn expand_acronym(tables: &ReferenceTables, acronym: &str) -> Option<Vec<String>> {
    let mut key = acronym.trim().to_uppercase();
    for suffix in ACRONYM_SUFFIXES {
        if let Some(stripped) = key.strip_suffix(suffix) {
            key = stripped.trim().to_string();
        }
    }
    tables.vaccine_components(&key).map(<[String]>::to_vec)
}

/// Acronym for a set of components, order-insensitive.
///
/// When several acronyms share a component set the shortest is returned.
pub fn acronym_for<I, S>(tables: &ReferenceTables, components: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let set = VaccineComponentSet::new(components);
    if set.is_empty() {
        return None;
    }
    tables.acronym_for_key(&set.key()).map(str::to_string)
}

/// Component antigens named in free text, longest keyword first.
///
/// Each matched keyword is blanked out so shorter keywords inside it do not
/// match again.
pub fn vaccine_components(tables: &ReferenceTables, text: &str) -> VaccineComponentSet {
    let mut remaining = text.to_uppercase();
    let mut found = Vec::new();
    for (keyword, component) in tables.component_keywords() {
        if remaining.contains(keyword.as_str()) {
            found.push(component.clone());
            remaining = remaining.replace(keyword.as_str(), " ");
        }
    }
    VaccineComponentSet::new(found)
}

/// Acronym and components for vaccine text.
///
/// A known acronym appearing as a whole word wins, longest acronyms first.
/// Otherwise components are read from the text and resolved back to an
/// acronym where one exists.
pub fn match_text(tables: &ReferenceTables, text: &str) -> VaccineMatch {
    let upper = text.to_uppercase();
    for acronym in tables.acronyms_by_length() {
        if contains_word(&upper, acronym) {
            return VaccineMatch {
                acronym: Some(acronym.clone()),
                components: tables
                    .vaccine_components(acronym)
                    .map(VaccineComponentSet::new),
            };
        }
    }

    let components = vaccine_components(tables, text);
    if components.is_empty() {
        return VaccineMatch::default();
    }
    VaccineMatch {
        acronym: tables.acronym_for_key(&components.key()).map(str::to_string),
        components: Some(components),
    }
}

/// Canonical vaccine naming over the embedded pattern table.
///
/// Patterns are tried as literal substrings first and as case-insensitive
/// regular expressions second; both are prepared once here.
#[derive(Debug, Clone)]
pub struct VaccineNamer {
    entries: Vec<CanonicalPatterns>,
}

#[derive(Debug, Clone)]
struct CanonicalPatterns {
    canonical: String,
    patterns: Vec<(String, Option<Regex>)>,
}

impl VaccineNamer {
    pub fn new(tables: &ReferenceTables) -> Self {
        let entries = tables
            .vaccine_canonical()
            .iter()
            .map(|entry| CanonicalPatterns {
                canonical: entry.canonical.clone(),
                patterns: entry
                    .patterns
                    .iter()
                    .map(|pattern| {
                        let regex = RegexBuilder::new(pattern)
                            .case_insensitive(true)
                            .build()
                            .inspect_err(|e| {
                                tracing::debug!(
                                    pattern = %pattern,
                                    error = %e,
                                    "vaccine pattern kept literal"
                                );
                            })
                            .ok();
                        (pattern.clone(), regex)
                    })
                    .collect(),
            })
            .collect();
        Self { entries }
    }

    /// Canonical vaccine name plus details, or `None` for non-vaccines.
    ///
    /// Text must mention `VACCINE` or `TOXOID`. Unmatched vaccines fall back to
    /// the canonical name `VACCINE` with the remaining text as details.
    pub fn normalize(&self, text: &str) -> Option<VaccineName> {
        let upper = text.to_uppercase();
        if !upper.contains("VACCINE") && !upper.contains("TOXOID") {
            return None;
        }

        let matched = self.entries.iter().find(|entry| {
            entry.patterns.iter().any(|(literal, regex)| {
                upper.contains(literal.as_str())
                    || regex.as_ref().is_some_and(|re| re.is_match(&upper))
            })
        });
        if let Some(entry) = matched {
            let details = vaccine_details(&upper);
            return Some(VaccineName {
                canonical: entry.canonical.clone(),
                details: (!details.is_empty()).then(|| details.join("; ")),
            });
        }

        if upper.contains("VACCINE") {
            let rest = collapse_whitespace(&upper.replace("VACCINE", " "));
            return Some(VaccineName {
                canonical: "VACCINE".to_string(),
                details: (!rest.is_empty()).then_some(rest),
            });
        }
        None
    }
}

fn vaccine_details(upper: &str) -> Vec<String> {
    let mut details = Vec::new();
    if let Some(caps) = VALENCY_REGEX.captures(upper) {
        details.push(format!("{}-valent", &caps[1]));
    }
    if let Some(caps) = TYPE_REGEX.captures(upper) {
        details.push(format!("Type {}", &caps[1]));
    }
    if let Some(caps) = GROUP_REGEX.captures(upper) {
        details.push(format!("Group {}", caps[1].trim()));
    }
    if upper.contains("RECOMBINANT") {
        details.push("Recombinant".to_string());
    }
    if upper.contains("ATTENUATED") && upper.contains("LIVE") {
        details.push("Live attenuated".to_string());
    } else if upper.contains("INACTIVATED") {
        details.push("Inactivated".to_string());
    }
    if upper.contains("PEDIATRIC") || upper.contains("JUNIOR") {
        details.push("Pediatric".to_string());
    } else if upper.contains("ADULT") {
        details.push("Adult".to_string());
    }
    details
}

/// Whether an ATC code denotes a combination product.
///
/// Matches a known combination prefix or a combination suffix in the last
/// two characters.
pub fn is_combination_atc(tables: &ReferenceTables, atc_code: &str) -> bool {
    let code = atc_code.trim().to_uppercase();
    if code.is_empty() {
        return false;
    }
    if tables.is_combination_atc_prefix(&code) {
        return true;
    }
    code.len() >= 2
        && code
            .get(code.len() - 2..)
            .is_some_and(|suffix| tables.is_combination_atc_suffix(suffix))
}

/// ATC code of a canonical combination generic.
pub fn canonical_atc(tables: &ReferenceTables, generic: &str) -> Option<String> {
    tables
        .canonical_atc(&generic.trim().to_uppercase())
        .map(str::to_string)
}

/// A `+`-joined name, or a name whose canonical ATC code is a combination.
pub fn is_combination_generic(tables: &ReferenceTables, name: &str) -> bool {
    name.contains('+')
        || canonical_atc(tables, name).is_some_and(|code| is_combination_atc(tables, &code))
}
