//! Base/salt splitting.
//!
//! Every token of a normalized ingredient string is classified through a
//! fixed rule chain ([`classify_token`]). The splitter then assembles the base
//! name from `Generic` tokens and the qualifier list from `Salt` tokens, with
//! an `as <salt>` tail taking precedence over per-token classification.

use std::collections::HashSet;
use std::sync::LazyLock;

use brandmap_model::{NormalizedIngredient, TokenClass};
use brandmap_standards::ReferenceTables;
use brandmap_standards::tables::SALT_TAIL_BREAK_TOKENS;
use regex::Regex;

use crate::text::normalize;

/// Letters followed by digits, e.g. `b12` or `d3`.
static CODE_TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+[0-9]+[a-z0-9]*$").expect("Invalid code token regex"));

const CONNECTIVE_SYMBOLS: [&str; 3] = ["+", "/", "&"];
const SALT_NOISE: [&str; 2] = ["salt", "salts"];

/// Token with surrounding punctuation removed.
fn token_core(token: &str) -> &str {
    token.trim_matches(|c| ".,;:'\"()[]{}".contains(c))
}

fn has_letter(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_lowercase())
}

fn has_digit(token: &str) -> bool {
    token.chars().any(char::is_numeric)
}

fn is_measurement(tables: &ReferenceTables, core: &str) -> bool {
    tables.is_unit_word(core)
        || matches!(core, "%" | "ratio" | "per")
        || core.ends_with("ml")
        || core.ends_with("mg")
}

fn is_salt_tail_break(token: &str) -> bool {
    SALT_TAIL_BREAK_TOKENS
        .iter()
        .any(|b| b.eq_ignore_ascii_case(token))
}

/// A salt word counts as a salt unless it is a cation that is not introduced
/// by `as`. Standalone cations are usually the active ingredient.
fn is_salt_in_context(tables: &ReferenceTables, token: &str, prev: Option<&str>) -> bool {
    if !tables.is_salt_word(token) || SALT_NOISE.contains(&token) {
        return false;
    }
    prev == Some("as") || !tables.is_cation_word(token)
}

/// Whether a token may contribute to a base name.
fn is_base_candidate(tables: &ReferenceTables, token: &str) -> bool {
    let core = token_core(token);
    if tables.is_base_ignore_word(core) || is_measurement(tables, core) || token == "%" {
        return false;
    }
    if !has_letter(token) || token.starts_with(|c: char| c.is_numeric()) {
        return false;
    }
    !has_digit(token) || CODE_TOKEN_REGEX.is_match(token)
}

/// Classify one lower-case normalized token.
///
/// `prev` is the token immediately before it, if any. The chain is evaluated
/// in order and the first matching rule wins.
pub fn classify_token(tables: &ReferenceTables, token: &str, prev: Option<&str>) -> TokenClass {
    if is_salt_in_context(tables, token, prev) {
        return TokenClass::Salt;
    }
    if is_base_candidate(tables, token) {
        return TokenClass::Generic;
    }

    let core = token_core(token);
    let upper = core.to_uppercase();
    if is_measurement(tables, core) || has_digit(core) {
        TokenClass::Dose
    } else if tables.form_canon(&upper).is_some() || tables.default_route(&upper).is_some() {
        TokenClass::Form
    } else if tables.route_canon(&upper).is_some() {
        TokenClass::Route
    } else {
        TokenClass::Other
    }
}

/// Normalize `raw` and classify each of its tokens.
pub fn classify_tokens(tables: &ReferenceTables, raw: &str) -> Vec<(String, TokenClass)> {
    let norm = normalize(raw);
    let tokens: Vec<&str> = norm.split_whitespace().collect();
    tokens
        .iter()
        .enumerate()
        .map(|(idx, tok)| {
            let prev = idx.checked_sub(1).map(|i| tokens[i]);
            ((*tok).to_string(), classify_token(tables, tok, prev))
        })
        .collect()
}

fn looks_like_salt_tail(tables: &ReferenceTables, tail: &[&str]) -> bool {
    let mut seen_salt = false;
    for tok in tail {
        if is_salt_tail_break(tok) || has_digit(tok) || matches!(*tok, "%" | "per") {
            break;
        }
        if *tok == "and/or" {
            continue;
        }
        if tables.is_salt_word(tok) {
            seen_salt = true;
            continue;
        }
        return false;
    }
    seen_salt
}

/// Index of the first `as` token that introduces a salt tail.
///
/// `as` qualifies only when the tokens after it, up to the next connective,
/// are salt words. `"used as a rescue inhaler"` has no boundary.
pub fn detect_as_boundary(tables: &ReferenceTables, norm_text: &str) -> Option<usize> {
    let tokens: Vec<&str> = norm_text.split_whitespace().collect();
    tokens
        .iter()
        .enumerate()
        .filter(|(_, tok)| **tok == "as")
        .map(|(idx, _)| idx)
        .find(|idx| looks_like_salt_tail(tables, &tokens[idx + 1..]))
}

/// Drop the `as <salt>` tail of already-normalized text.
pub fn strip_after_as(tables: &ReferenceTables, norm_text: &str) -> String {
    match detect_as_boundary(tables, norm_text) {
        Some(boundary) if boundary > 0 => {
            let tokens: Vec<&str> = norm_text.split_whitespace().collect();
            tokens[..boundary].join(" ")
        }
        _ => norm_text.to_string(),
    }
}

/// Split an ingredient string into its base name and salt qualifiers.
///
/// Two-word pure salt compounds (`SODIUM CHLORIDE`) are returned whole.
/// Output is upper-case and never has an empty base for non-empty input.
pub fn split_base_and_salts(tables: &ReferenceTables, raw: &str) -> NormalizedIngredient {
    let norm = normalize(raw);
    let whole = norm.to_uppercase();
    if tables.is_pure_salt_compound(&whole) {
        return NormalizedIngredient::new(whole, Vec::new(), raw);
    }

    let tokens: Vec<&str> = norm.split_whitespace().collect();
    let (base_candidates, salt_candidates) = match detect_as_boundary(tables, &norm) {
        Some(boundary) => (&tokens[..boundary], &tokens[boundary + 1..]),
        None => (&tokens[..], &[][..]),
    };

    let mut salts: Vec<String> = salt_candidates
        .iter()
        .filter(|tok| tables.is_salt_word(tok) && !SALT_NOISE.contains(*tok))
        .map(|tok| tok.to_uppercase())
        .collect();

    let mut base: Vec<String> = Vec::new();
    let mut pending_leading_salts: Vec<String> = Vec::new();
    for (idx, tok) in base_candidates.iter().enumerate() {
        if CONNECTIVE_SYMBOLS.contains(tok) {
            let later_base = base_candidates[idx + 1..]
                .iter()
                .any(|t| is_base_candidate(tables, t));
            if !base.is_empty() && later_base {
                base.push((*tok).to_string());
            }
            continue;
        }
        let prev = idx.checked_sub(1).map(|i| base_candidates[i]);
        match classify_token(tables, tok, prev) {
            TokenClass::Salt if base.is_empty() => pending_leading_salts.push(tok.to_uppercase()),
            TokenClass::Salt => salts.push(tok.to_uppercase()),
            TokenClass::Generic => base.push(tok.to_uppercase()),
            _ => {}
        }
    }

    if base.is_empty() {
        base = relaxed_base(tables, base_candidates);
    }
    if base.is_empty() {
        base = pending_leading_salts;
    }
    salts.extend(trim_trailing_salts(tables, &mut base));
    while base
        .last()
        .is_some_and(|tok| CONNECTIVE_SYMBOLS.contains(&tok.as_str()))
    {
        base.pop();
    }

    let mut seen = HashSet::new();
    let mut unique_salts: Vec<String> = salts
        .into_iter()
        .filter(|s| !s.is_empty() && seen.insert(s.clone()))
        .collect();

    let mut base_name = base.join(" ").trim().to_string();
    if base_name.is_empty() && !unique_salts.is_empty() {
        base_name = unique_salts.join(" ");
        unique_salts.clear();
    }
    if base_name.is_empty() {
        base_name = raw.trim().to_uppercase();
    }

    tracing::trace!(raw = %raw, base = %base_name, salts = ?unique_salts, "split ingredient");
    NormalizedIngredient::new(base_name, unique_salts, raw)
}

/// Second pass for inputs whose tokens were all rejected as base candidates.
///
/// Stops at `as`, keeps salt-vocabulary words that would otherwise be ignored
/// and keeps connective symbols once a token has been kept.
fn relaxed_base(tables: &ReferenceTables, tokens: &[&str]) -> Vec<String> {
    let mut kept: Vec<String> = Vec::new();
    for (idx, tok) in tokens.iter().enumerate() {
        if CONNECTIVE_SYMBOLS.contains(tok) {
            if !kept.is_empty() {
                kept.push((*tok).to_string());
            }
            continue;
        }
        if *tok == "as" {
            break;
        }
        let prev = idx.checked_sub(1).map(|i| tokens[i]);
        if is_salt_in_context(tables, tok, prev) {
            continue;
        }
        let core = token_core(tok);
        if is_measurement(tables, core)
            || (tables.is_base_ignore_word(core) && !tables.is_salt_word(tok))
            || !has_letter(tok)
        {
            continue;
        }
        if has_digit(tok) && !CODE_TOKEN_REGEX.is_match(tok) {
            continue;
        }
        kept.push(tok.to_uppercase());
    }
    kept
}

/// Pop trailing salt words off the base, unless the base is nothing but salt
/// words. `SALT`/`SALTS` are discarded rather than returned.
fn trim_trailing_salts(tables: &ReferenceTables, base: &mut Vec<String>) -> Vec<String> {
    let is_salt = |tok: &str| tables.is_salt_word(&tok.to_lowercase());
    if base.iter().all(|tok| is_salt(tok)) {
        return Vec::new();
    }
    let mut trimmed = Vec::new();
    while base.last().is_some_and(|tok| is_salt(tok)) {
        if let Some(tok) = base.pop()
            && !SALT_NOISE.contains(&tok.to_lowercase().as_str())
        {
            trimmed.push(tok);
        }
    }
    trimmed.reverse();
    trimmed
}

/// `(cation, anion)` of a two-word compound salt such as `FERROUS SULFATE`.
pub fn parse_compound_salt(tables: &ReferenceTables, name: &str) -> Option<(String, String)> {
    let upper = name.trim().to_uppercase();
    let words: Vec<&str> = upper.split_whitespace().collect();
    match words.as_slice() {
        [cation, anion] if tables.is_salt_cation(cation) && tables.is_salt_anion(anion) => {
            Some(((*cation).to_string(), (*anion).to_string()))
        }
        _ => None,
    }
}

/// Other compound salts sharing the anion of `name`, sorted.
pub fn related_salts(tables: &ReferenceTables, name: &str) -> Vec<String> {
    let Some((cation, anion)) = parse_compound_salt(tables, name) else {
        return Vec::new();
    };
    let mut related: Vec<String> = tables
        .cations_for_anion(&anion)
        .iter()
        .filter(|c| **c != cation)
        .map(|c| format!("{c} {anion}"))
        .collect();
    related.sort();
    related
}

pub fn is_pure_salt_compound(tables: &ReferenceTables, name: &str) -> bool {
    tables.is_pure_salt_compound(&name.trim().to_uppercase())
}

pub fn is_element_drug(tables: &ReferenceTables, token: &str) -> bool {
    tables.is_element_drug(&token.trim().to_uppercase())
}

#[cfg(test)]
mod tests {
    use brandmap_standards::default_tables;
    use brandmap_standards::tables::PURE_SALT_COMPOUNDS;

    use super::*;

    fn split(raw: &str) -> (String, Vec<String>) {
        let ingredient = split_base_and_salts(default_tables(), raw);
        (ingredient.base_name, ingredient.salts)
    }

    #[test]
    fn as_boundary_splits_salt_tail() {
        assert_eq!(
            split("Amlodipine (as besilate)"),
            ("AMLODIPINE".to_string(), vec!["BESILATE".to_string()])
        );
    }

    #[test]
    fn trailing_salt_is_trimmed() {
        assert_eq!(
            split("Metformin Hydrochloride 500mg"),
            ("METFORMIN".to_string(), vec!["HYDROCHLORIDE".to_string()])
        );
    }

    #[test]
    fn pure_salt_compound_is_kept_whole() {
        assert_eq!(split("Sodium Chloride"), ("SODIUM CHLORIDE".to_string(), vec![]));
    }

    #[test]
    fn every_pure_salt_compound_round_trips() {
        for compound in PURE_SALT_COMPOUNDS {
            assert_eq!(split(compound), ((*compound).to_string(), vec![]), "{compound}");
        }
    }

    #[test]
    fn as_in_prose_is_not_a_boundary() {
        let tables = default_tables();
        assert_eq!(detect_as_boundary(tables, "used as a rescue inhaler"), None);
        let (_, salts) = split("used as a rescue inhaler");
        assert!(salts.is_empty());
    }

    #[test]
    fn boundary_stops_at_connectives() {
        let tables = default_tables();
        assert_eq!(
            detect_as_boundary(tables, "amoxicillin as trihydrate + clavulanic acid"),
            Some(1)
        );
        assert_eq!(detect_as_boundary(tables, "iron as 50 mg"), None);
        assert_eq!(
            strip_after_as(tables, "amlodipine as besilate"),
            "amlodipine"
        );
        assert_eq!(strip_after_as(tables, "as sodium"), "as sodium");
    }

    #[test]
    fn standalone_cation_is_base_content() {
        assert_eq!(split("Zinc"), ("ZINC".to_string(), vec![]));
        assert_eq!(
            split("Naproxen Sodium"),
            ("NAPROXEN".to_string(), vec!["SODIUM".to_string()])
        );
    }

    #[test]
    fn connectives_join_combination_bases() {
        assert_eq!(
            split("Paracetamol + Ibuprofen"),
            ("PARACETAMOL + IBUPROFEN".to_string(), vec![])
        );
        assert_eq!(
            split("Amoxicillin + Clavulanate Potassium"),
            (
                "AMOXICILLIN".to_string(),
                vec!["CLAVULANATE".to_string(), "POTASSIUM".to_string()]
            )
        );
        assert_eq!(split("+ Paracetamol +"), ("PARACETAMOL".to_string(), vec![]));
    }

    #[test]
    fn salts_only_input_becomes_base() {
        assert_eq!(split("hydrochloride"), ("HYDROCHLORIDE".to_string(), vec![]));
    }

    #[test]
    fn unclassifiable_input_falls_back_to_raw() {
        assert_eq!(split(" 500 mg "), ("500 MG".to_string(), vec![]));
        assert_eq!(split(""), (String::new(), vec![]));
    }

    #[test]
    fn code_tokens_are_base_content() {
        assert_eq!(split("Vitamin B12 1000mcg"), ("B12".to_string(), vec![]));
    }

    #[test]
    fn token_classification() {
        let classes: Vec<TokenClass> = classify_tokens(default_tables(), "Amlodipine as besilate 5mg tablet")
            .into_iter()
            .map(|(_, class)| class)
            .collect();
        assert_eq!(
            classes,
            vec![
                TokenClass::Generic,
                TokenClass::Other,
                TokenClass::Salt,
                TokenClass::Dose,
                TokenClass::Form,
            ]
        );
        let tables = default_tables();
        assert_eq!(classify_token(tables, "sodium", None), TokenClass::Generic);
        assert_eq!(classify_token(tables, "sodium", Some("as")), TokenClass::Salt);
        assert_eq!(classify_token(tables, "oral", None), TokenClass::Route);
    }

    #[test]
    fn compound_salts() {
        let tables = default_tables();
        assert_eq!(
            parse_compound_salt(tables, "ferrous sulfate"),
            Some(("FERROUS".to_string(), "SULFATE".to_string()))
        );
        assert_eq!(parse_compound_salt(tables, "PARACETAMOL"), None);
        assert!(related_salts(tables, "FERROUS FUMARATE").is_empty());
        let related = related_salts(tables, "SODIUM CHLORIDE");
        assert!(related.contains(&"POTASSIUM CHLORIDE".to_string()));
        assert!(!related.contains(&"SODIUM CHLORIDE".to_string()));
        assert!(is_pure_salt_compound(tables, " zinc oxide "));
        assert!(is_element_drug(tables, "iodine"));
    }
}
