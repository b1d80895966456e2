//! Record types for the embedded CSV tables.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct FormRow {
    pub form: String,
    pub canonical: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct FormRoutesRow {
    pub form: String,
    pub routes: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct FormRouteDefaultRow {
    pub form: String,
    pub route: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RouteAliasRow {
    pub alias: String,
    pub route: String,
}

/// Which synonym table a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SynonymKind {
    /// INN/BAN/USAN name variants, mapped both ways.
    Generic,
    /// IV fluid abbreviations such as `D5W` or `NSS`.
    IvFluid,
    /// Mixture components mapped to the marketed parent drug.
    Component,
    /// Spelling corrections and trade names that are really generics.
    Spelling,
    /// US name -> regional (WHO) name.
    Regional,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SynonymRow {
    pub kind: SynonymKind,
    pub name: String,
    pub target: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct VaccineCanonicalRow {
    pub canonical: String,
    pub acronym: String,
    pub patterns: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct VaccineAcronymRow {
    pub acronym: String,
    pub components: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct VaccineKeywordRow {
    pub keyword: String,
    pub component: String,
}

/// A canonical vaccine product and the text patterns that identify it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VaccineCanonical {
    pub canonical: String,
    pub acronym: Option<String>,
    /// Upper-case literal substrings, tried in order.
    pub patterns: Vec<String>,
}

/// A generic name the reference data knows an ATC code for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalGeneric {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub drugbank_id: Option<String>,
    pub generic_name: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub atc_code: Option<String>,
}

fn empty_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|v| {
        let trimmed = v.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }))
}

/// Split a `sep`-joined list field, dropping blanks.
pub(crate) fn split_list(value: &str, sep: char) -> Vec<String> {
    value
        .split(sep)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_list_uppercases_and_drops_blanks() {
        assert_eq!(
            split_list("oral; ;Intravenous", ';'),
            vec!["ORAL".to_string(), "INTRAVENOUS".to_string()]
        );
        assert!(split_list("", '|').is_empty());
    }
}
