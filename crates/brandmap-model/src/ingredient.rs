//! Ingredient-level types produced by the base/salt splitter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Category assigned to a single normalized token.
///
/// A token is never typed by its spelling alone: the same word can be a
/// salt after an `as` boundary and base content elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenClass {
    /// Part of the active-ingredient name.
    Generic,
    /// Salt, hydrate or release qualifier.
    Salt,
    /// Strength, unit or measurement token.
    Dose,
    /// Dosage-form word.
    Form,
    /// Administration-route word.
    Route,
    /// Connectives, stopwords and noise.
    Other,
}

impl TokenClass {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Salt => "salt",
            Self::Dose => "dose",
            Self::Form => "form",
            Self::Route => "route",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenClass {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "generic" => Ok(Self::Generic),
            "salt" => Ok(Self::Salt),
            "dose" => Ok(Self::Dose),
            "form" => Ok(Self::Form),
            "route" => Ok(Self::Route),
            "other" => Ok(Self::Other),
            _ => Err(ModelError::UnknownTokenClass {
                value: s.to_string(),
            }),
        }
    }
}

/// A base molecule name plus its ordered salt qualifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedIngredient {
    /// Upper-case, space-joined base tokens.
    pub base_name: String,
    /// De-duplicated salt qualifiers in first-seen order.
    pub salts: Vec<String>,
    /// Input text exactly as received.
    pub original_text: String,
}

impl NormalizedIngredient {
    pub fn new(base_name: String, salts: Vec<String>, original_text: impl Into<String>) -> Self {
        Self {
            base_name,
            salts,
            original_text: original_text.into(),
        }
    }

    pub fn has_salts(&self) -> bool {
        !self.salts.is_empty()
    }

    /// Salts joined with `" + "` for flat exports.
    pub fn salt_label(&self) -> String {
        self.salts.join(" + ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_class_parses_case_insensitively() {
        assert_eq!("SALT".parse::<TokenClass>().unwrap(), TokenClass::Salt);
        assert_eq!(" route ".parse::<TokenClass>().unwrap(), TokenClass::Route);
        assert!("molecule".parse::<TokenClass>().is_err());
    }

    #[test]
    fn salt_label_joins_in_order() {
        let ingredient = NormalizedIngredient::new(
            "AMOXICILLIN".to_string(),
            vec!["SODIUM".to_string(), "TRIHYDRATE".to_string()],
            "amoxicillin sodium trihydrate",
        );
        assert!(ingredient.has_salts());
        assert_eq!(ingredient.salt_label(), "SODIUM + TRIHYDRATE");
    }
}
