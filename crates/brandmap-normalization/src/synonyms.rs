//! Generic-name synonym resolution.

use brandmap_standards::ReferenceTables;

fn key(name: &str) -> String {
    name.trim().to_uppercase()
}

/// Preferred spelling of a generic name (`ASPIRIN` -> `ACETYLSALICYLIC ACID`).
///
/// Unknown names come back upper-cased.
pub fn resolve_spelling_synonym(tables: &ReferenceTables, name: &str) -> String {
    let name = key(name);
    tables
        .spelling_synonym(&name)
        .map_or(name, str::to_string)
}

/// Canonical generic for an abbreviation, IV fluid or reference-component
/// alias, e.g. `NSS` -> `SODIUM CHLORIDE`.
pub fn generic_synonym(tables: &ReferenceTables, name: &str) -> Option<String> {
    tables.generic_synonym(&key(name)).map(str::to_string)
}

/// Regional (WHO) name for a US name (`ACETAMINOPHEN` -> `PARACETAMOL`).
pub fn regional_canonical(tables: &ReferenceTables, name: &str) -> String {
    let name = key(name);
    tables
        .regional_canonical(&name)
        .map_or(name, str::to_string)
}

/// US name for a regional name (`PARACETAMOL` -> `ACETAMINOPHEN`).
pub fn us_canonical(tables: &ReferenceTables, name: &str) -> String {
    let name = key(name);
    tables.us_canonical(&name).map_or(name, str::to_string)
}

/// Whether a multi-word name must stay a single token.
pub fn is_multiword_generic(tables: &ReferenceTables, name: &str) -> bool {
    tables.is_multiword_generic(&key(name))
}
