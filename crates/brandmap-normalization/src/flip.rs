//! Brand/generic flip detection.
//!
//! A catalog row is flipped when its brand column holds a known generic name
//! and its generic column does not. Only whole-string matches count, so
//! `Acetylflux` never matches `ACETYL...` entries.

use aho_corasick::{AhoCorasick, Anchored, Input, MatchKind, StartKind};
use brandmap_model::GenericVocabulary;
use brandmap_standards::ReferenceTables;
use regex::Regex;

/// Exact-match index over a generic-name vocabulary.
#[derive(Debug, Clone)]
pub struct GenericMatcher {
    vocabulary: GenericVocabulary,
    automaton: Option<AhoCorasick>,
    salt_suffix: Option<Regex>,
    as_prefix: Option<Regex>,
}

impl GenericMatcher {
    pub fn new(tables: &ReferenceTables, vocabulary: GenericVocabulary) -> Self {
        let automaton = build_automaton(&vocabulary);
        let alternation = salt_alternation(tables.salt_tokens());
        let salt_suffix = build_salt_suffix_regex(&alternation);
        let as_prefix = build_as_prefix_regex(&alternation);
        Self {
            vocabulary,
            automaton,
            salt_suffix,
            as_prefix,
        }
    }

    pub fn vocabulary(&self) -> &GenericVocabulary {
        &self.vocabulary
    }

    /// Whole-string, case-insensitive vocabulary match.
    pub fn is_exact(&self, candidate: &str) -> bool {
        let candidate = candidate.trim().to_uppercase();
        if candidate.is_empty() {
            return false;
        }
        match &self.automaton {
            Some(ac) => ac
                .find(Input::new(&candidate).anchored(Anchored::Yes))
                .is_some_and(|m| m.end() == candidate.len()),
            None => self.vocabulary.contains(&candidate),
        }
    }

    /// Candidate with trailing salt words (and commas) removed.
    pub fn strip_salt_suffix<'a>(&self, candidate: &'a str) -> &'a str {
        let trimmed = candidate.trim();
        self.salt_suffix
            .as_ref()
            .and_then(|re| re.captures(trimmed))
            .and_then(|caps| caps.get(1))
            .map_or(trimmed, |m| m.as_str().trim())
    }

    /// Whether a string names a known generic.
    ///
    /// Tried in order: exact match, exact match without a salt suffix, the
    /// prefix of `<base> AS <salt>`, and finally every `+` part on its own.
    /// A combination needs at least two parts and no empty part.
    pub fn is_match(&self, candidate: &str) -> bool {
        let candidate = candidate.trim();
        if candidate.is_empty() || self.vocabulary.is_empty() {
            return false;
        }
        if self.is_exact(candidate) {
            return true;
        }
        let stripped = self.strip_salt_suffix(candidate);
        if stripped != candidate && self.is_exact(stripped) {
            return true;
        }
        if let Some(base) = self
            .as_prefix
            .as_ref()
            .and_then(|re| re.captures(candidate))
            .and_then(|caps| caps.get(1))
            && self.is_exact(base.as_str())
        {
            return true;
        }
        if candidate.contains('+') {
            let parts: Vec<&str> = candidate.split('+').map(str::trim).collect();
            return parts.len() >= 2
                && parts
                    .iter()
                    .all(|part| !part.is_empty() && self.is_exact(self.strip_salt_suffix(part)));
        }
        false
    }

    /// Brand column is a generic name and the generic column is not.
    ///
    /// Inconclusive when both or neither match, and always false for an
    /// empty vocabulary.
    pub fn is_flip(&self, brand: &str, generic: &str) -> bool {
        !self.vocabulary.is_empty() && self.is_match(brand) && !self.is_match(generic)
    }
}

fn build_automaton(vocabulary: &GenericVocabulary) -> Option<AhoCorasick> {
    if vocabulary.is_empty() {
        return None;
    }
    let patterns: Vec<&str> = vocabulary.names().collect();
    match AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .match_kind(MatchKind::LeftmostLongest)
        .start_kind(StartKind::Anchored)
        .build(&patterns)
    {
        Ok(ac) => Some(ac),
        Err(e) => {
            tracing::warn!(
                error = %e,
                patterns = patterns.len(),
                "generic automaton build failed; using set lookups"
            );
            None
        }
    }
}

fn salt_alternation(salt_tokens: &[&str]) -> String {
    salt_tokens
        .iter()
        .map(|token| regex::escape(token))
        .collect::<Vec<_>>()
        .join("|")
}

fn build_salt_suffix_regex(alternation: &str) -> Option<Regex> {
    let pattern = format!(r"(?i)^(.+?)(?:[\s,]+(?:{alternation}|SALTS?))+$");
    Regex::new(&pattern)
        .inspect_err(|e| tracing::warn!(error = %e, "salt-suffix pattern rejected"))
        .ok()
}

/// `<base> AS <salt>[ <salt>...]`, optionally parenthesized from `AS` on.
fn build_as_prefix_regex(alternation: &str) -> Option<Regex> {
    let pattern = format!(
        r"(?i)^(.+?)\s+\(?\s*AS\s+(?:{alternation})(?:[\s,]+(?:{alternation}))*\s*\)?\s*$"
    );
    Regex::new(&pattern)
        .inspect_err(|e| tracing::warn!(error = %e, "AS-prefix pattern rejected"))
        .ok()
}

#[cfg(test)]
mod tests {
    use brandmap_model::VocabularyRecord;
    use brandmap_standards::default_tables;

    use super::*;

    fn matcher() -> GenericMatcher {
        let records = [
            VocabularyRecord::new("DB06151", "Acetylcysteine", "N-acetylcysteine"),
            VocabularyRecord::new("DB00316", "Paracetamol", ""),
            VocabularyRecord::new("DB00381", "Amlodipine", ""),
            VocabularyRecord::new("DB00945", "Acetyl", ""),
        ];
        GenericMatcher::new(default_tables(), GenericVocabulary::from_records(&records))
    }

    #[test]
    fn exact_matches_only() {
        let m = matcher();
        assert!(m.is_exact("acetylcysteine"));
        assert!(m.is_exact(" N-ACETYLCYSTEINE "));
        assert!(!m.is_exact("Acetylflux"));
        assert!(!m.is_exact(""));
    }

    #[test]
    fn salt_suffix_and_as_forms() {
        let m = matcher();
        assert_eq!(m.strip_salt_suffix("Amlodipine Besilate"), "Amlodipine");
        assert_eq!(m.strip_salt_suffix("Amlodipine, besilate salt"), "Amlodipine");
        assert!(m.is_match("Amlodipine Besilate"));
        assert!(m.is_match("Amlodipine (as besilate)"));
        assert!(m.is_match("Amlodipine as besilate"));
        assert!(m.is_match("Amlodipine (as besilate monohydrate)"));
    }

    #[test]
    fn as_tail_must_name_a_salt() {
        let m = matcher();
        assert!(!m.is_match("Paracetamol as directed"));
        assert!(!m.is_match("Paracetamol (as Biogesic)"));
        assert!(!m.is_flip("Paracetamol as Biogesic", "Biogesic"));
    }

    #[test]
    fn combinations_require_every_part() {
        let m = matcher();
        assert!(m.is_match("Paracetamol + Amlodipine besilate"));
        assert!(!m.is_match("Paracetamol + Ibuprofen"));
        assert!(!m.is_match("+"));
        assert!(!m.is_match("Paracetamol +"));
        assert!(!m.is_match("+ Paracetamol"));
        assert!(!m.is_match("Paracetamol + + Amlodipine"));
    }

    #[test]
    fn flip_is_asymmetric() {
        let m = matcher();
        assert!(m.is_flip("Acetylcysteine", "Nacel"));
        assert!(!m.is_flip("Acetylflux", "Acetylcysteine"));
        assert!(!m.is_flip("Biogesic", "Paracetamol"));
        assert!(!m.is_flip("Paracetamol", "Amlodipine"));
    }

    #[test]
    fn empty_vocabulary_never_flips() {
        let m = GenericMatcher::new(default_tables(), GenericVocabulary::empty());
        assert!(!m.is_match("Paracetamol"));
        assert!(!m.is_flip("Paracetamol", "Biogesic"));
    }
}
