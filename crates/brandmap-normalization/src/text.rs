//! Text canonicalization.
//!
//! [`normalize`] is the single entry point every other component uses before
//! matching. It is pure and idempotent.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

static IV_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\biv\b").expect("Invalid iv regex"));

/// Everything outside word characters, `%`, `/`, `+`, `.`, `-` and space.
static DISALLOWED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w%/+.\- ]+").expect("Invalid character-class regex"));

static PARENTHETICAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]+)\)").expect("Invalid parenthetical regex"));

static SYMBOLS_ONLY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-/+\s]+$").expect("Invalid symbols regex"));

static NON_SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("Invalid slug regex"));

const MAX_PARENTHETICAL_CHARS: usize = 60;

/// Canonical normalized text used for matching and parsing.
///
/// Steps: NFKD folding without combining marks, lowercase, `iv` expansion,
/// symbol removal, unit spellings, known misspellings, whitespace collapse.
pub fn normalize(raw: &str) -> String {
    let folded: String = raw
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .filter(|c| !is_combining_mark(*c))
        .collect();

    let s = IV_REGEX.replace_all(&folded, "intravenous");
    let s = collapse_whitespace(&DISALLOWED_REGEX.replace_all(&s, " "));
    let s = s
        .replace("microgram", "mcg")
        .replace("\u{3bc}g", "mcg")
        .replace("\u{b5}g", "mcg");
    let s = replace_unit_token(&s, &["cc"], "ml")
        .replace("milli litre", "ml")
        .replace("milliliter", "ml");
    let s = replace_unit_token(&s, &["gms", "gm"], "g")
        .replace("milligram", "mg")
        .replace("polymixin", "polymyxin")
        .replace("hydrochlorde", "hydrochloride");

    collapse_whitespace(&s)
}

/// Replace a unit spelling only where it is not glued to an ASCII letter.
///
/// Alternatives are tried in order at each position, so list longer spellings
/// first (`gms` before `gm`). Matching runs on bytes; alternatives are ASCII,
/// so a hit always starts and ends on a char boundary.
fn replace_unit_token(s: &str, alternatives: &[&str], replacement: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    let mut copied = 0;
    while i < bytes.len() {
        let prev_is_letter = i > 0 && bytes[i - 1].is_ascii_lowercase();
        let hit = (!prev_is_letter)
            .then(|| {
                alternatives.iter().find(|alt| {
                    bytes[i..].starts_with(alt.as_bytes())
                        && !bytes
                            .get(i + alt.len())
                            .is_some_and(u8::is_ascii_lowercase)
                })
            })
            .flatten();
        if let Some(alt) = hit {
            out.push_str(&s[copied..i]);
            out.push_str(replacement);
            i += alt.len();
            copied = i;
        } else {
            i += 1;
        }
    }
    out.push_str(&s[copied..]);
    out
}

pub(crate) fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalized text without spaces or hyphens.
pub fn normalize_compact(raw: &str) -> String {
    normalize(raw)
        .chars()
        .filter(|c| *c != ' ' && *c != '-')
        .collect()
}

/// Lower-case identifier slug: runs of non-alphanumerics become `_`.
pub fn slug_id(name: &str) -> String {
    let base = normalize(name);
    NON_SLUG_REGEX
        .replace_all(&base, "_")
        .trim_matches('_')
        .to_string()
}

/// Trim an ATC code, treating non-breaking spaces as spaces.
pub fn clean_atc(code: &str) -> String {
    code.replace('\u{a0}', " ").trim().to_string()
}

/// Parenthesized snippets of the original text, e.g. brand hints.
///
/// Snippets longer than 60 characters or made only of `-/+` are dropped.
/// Duplicates are removed case-insensitively, keeping the first casing.
pub fn extract_parenthetical_phrases(raw: &str) -> Vec<String> {
    if !raw.contains('(') {
        return Vec::new();
    }
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for caps in PARENTHETICAL_REGEX.captures_iter(raw) {
        let item = caps[1].trim();
        if item.is_empty()
            || item.chars().count() > MAX_PARENTHETICAL_CHARS
            || SYMBOLS_ONLY_REGEX.is_match(item)
        {
            continue;
        }
        let cleaned = collapse_whitespace(item);
        if seen.insert(cleaned.to_lowercase()) {
            out.push(cleaned);
        }
    }
    out
}

/// Join unique, upper-cased salt labels with `" + "`.
pub fn serialize_salt_list<I, S>(salts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut ordered = Vec::new();
    for salt in salts {
        let clean = salt.as_ref().trim().to_uppercase();
        if !clean.is_empty() && seen.insert(clean.clone()) {
            ordered.push(clean);
        }
    }
    ordered.join(" + ")
}

/// Whether `needle` occurs in `haystack` delimited by word boundaries.
///
/// Boundaries follow regex `\b` semantics: the characters on either side of
/// each edge of the match must differ in word-ness.
pub fn contains_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    let first = needle.chars().next().is_some_and(is_word_char);
    let last = needle.chars().next_back().is_some_and(is_word_char);
    haystack.match_indices(needle).any(|(start, _)| {
        let end = start + needle.len();
        let before = haystack[..start].chars().next_back().is_some_and(is_word_char);
        let after = haystack[end..].chars().next().is_some_and(is_word_char);
        before != first && after != last
    })
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_handles_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn normalize_folds_accents_and_case() {
        assert_eq!(normalize("Crème  Solution"), "creme solution");
    }

    #[test]
    fn normalize_expands_iv() {
        assert_eq!(normalize("For IV use"), "for intravenous use");
        assert_eq!(normalize("ivermectin"), "ivermectin");
    }

    #[test]
    fn normalize_units() {
        assert_eq!(normalize("500 Micrograms"), "500 mcgs");
        assert_eq!(normalize("250 µg/5 cc"), "250 mcg/5 ml");
        assert_eq!(normalize("1 GM vial"), "1 g vial");
        assert_eq!(normalize("2 gms"), "2 g");
        assert_eq!(normalize("neostigmine"), "neostigmine");
        assert_eq!(normalize("accent"), "accent");
        assert_eq!(normalize("10 Milligram"), "10 mg");
        assert_eq!(normalize("5 milliliter"), "5 ml");
    }

    #[test]
    fn normalize_fixes_misspellings_and_symbols() {
        assert_eq!(normalize("Polymixin B"), "polymyxin b");
        assert_eq!(normalize("Ranitidine Hydrochlorde"), "ranitidine hydrochloride");
        assert_eq!(normalize("Amlodipine (as besilate)"), "amlodipine as besilate");
        assert_eq!(normalize("0.9% NaCl, 1L"), "0.9% nacl 1l");
    }

    #[test]
    fn unit_token_respects_letters() {
        assert_eq!(replace_unit_token("5gm", &["gms", "gm"], "g"), "5g");
        assert_eq!(replace_unit_token("gmx gm", &["gms", "gm"], "g"), "gmx g");
        assert_eq!(replace_unit_token("gmsx", &["gms", "gm"], "g"), "gmsx");
        assert_eq!(replace_unit_token("ø gm", &["gms", "gm"], "g"), "ø g");
    }

    #[test]
    fn normalize_keeps_multibyte_letters() {
        assert_eq!(normalize("Ø"), "ø");
        assert_eq!(normalize("5 μl drops"), "5 μl drops");
        assert_eq!(normalize("Ácido fólico ß"), "acido folico ß");
        assert_eq!(normalize("µ"), normalize(&normalize("µ")));
        assert_eq!(normalize("Парацетамол 500 мг"), "парацетамол 500 мг");
    }

    #[test]
    fn compact_and_slug() {
        assert_eq!(normalize_compact("Co-Amoxiclav 625 mg"), "coamoxiclav625mg");
        assert_eq!(slug_id("Amoxicillin + Clavulanic Acid"), "amoxicillin_clavulanic_acid");
        assert_eq!(clean_atc("\u{a0}J01CR02 "), "J01CR02");
    }

    #[test]
    fn parenthetical_phrases() {
        let phrases = extract_parenthetical_phrases(
            "Paracetamol (Biogesic) 500mg (BIOGESIC) ( + ) (as  hydrochloride)",
        );
        assert_eq!(phrases, vec!["Biogesic", "as hydrochloride"]);
        assert!(extract_parenthetical_phrases("no parens").is_empty());
    }

    #[test]
    fn salt_list_serialization() {
        assert_eq!(
            serialize_salt_list(["sodium", "Sodium", " trihydrate ", ""]),
            "SODIUM + TRIHYDRATE"
        );
    }

    #[test]
    fn word_containment() {
        assert!(contains_word("paracetamol tablet", "tablet"));
        assert!(!contains_word("paracetamol tablets", "tablet"));
        assert!(contains_word("dtp-hib vaccine", "dtp-hib"));
        assert!(!contains_word("dtp-hib vaccine", "hi"));
        assert!(contains_word("for im/sc use", "im/sc"));
        assert!(!contains_word("syrups", "syrup"));
    }
}
