//! Embedded reference data.
//!
//! Keyed tables are compiled in with `include_str!()` so the engine never
//! touches the filesystem for them. Plain word lists live in [`crate::tables`].

// =============================================================================
// Forms and routes
// =============================================================================

/// Form spelling -> canonical form.
pub const FORMS: &str = include_str!("../data/forms.csv");

/// Canonical form -> `;`-separated routes, most frequent first.
pub const FORM_ROUTES: &str = include_str!("../data/form_routes.csv");

/// Form spelling -> single default route.
pub const FORM_ROUTE_DEFAULT: &str = include_str!("../data/form_route_default.csv");

/// Route alias -> canonical route, in match priority order.
pub const ROUTE_ALIASES: &str = include_str!("../data/route_aliases.csv");

// =============================================================================
// Names
// =============================================================================

/// `(kind, name, target)` synonym records.
pub const SYNONYMS: &str = include_str!("../data/synonyms.csv");

/// Canonical generics with DrugBank ids and ATC codes.
pub const CANONICAL_GENERICS: &str = include_str!("../data/canonical_generics.csv");

// =============================================================================
// Vaccines
// =============================================================================

/// Canonical vaccine names with their acronym and `|`-separated text patterns.
pub const VACCINE_CANONICAL: &str = include_str!("../data/vaccine_canonical.csv");

/// Acronym -> `|`-separated antigen components.
pub const VACCINE_ACRONYMS: &str = include_str!("../data/vaccine_acronyms.csv");

/// Free-text keyword -> canonical antigen component.
pub const VACCINE_KEYWORDS: &str = include_str!("../data/vaccine_keywords.csv");

/// All embedded files as `(file name, content)` pairs.
pub fn all_files() -> [(&'static str, &'static str); 9] {
    [
        ("forms.csv", FORMS),
        ("form_routes.csv", FORM_ROUTES),
        ("form_route_default.csv", FORM_ROUTE_DEFAULT),
        ("route_aliases.csv", ROUTE_ALIASES),
        ("synonyms.csv", SYNONYMS),
        ("canonical_generics.csv", CANONICAL_GENERICS),
        ("vaccine_canonical.csv", VACCINE_CANONICAL),
        ("vaccine_acronyms.csv", VACCINE_ACRONYMS),
        ("vaccine_keywords.csv", VACCINE_KEYWORDS),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_files_have_headers() {
        for (name, content) in all_files() {
            let header = content.lines().next().unwrap_or_default();
            assert!(header.contains(','), "{name} is missing a CSV header");
            assert!(content.lines().count() > 1, "{name} has no records");
        }
    }
}
