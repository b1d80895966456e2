//! Dosage form and administration route records.

use serde::{Deserialize, Serialize};

/// Canonical form plus the routes it admits.
///
/// `primary_route`, when present, is always `all_valid_routes[0]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRouteRecord {
    pub raw_form: String,
    pub canonical_form: String,
    pub primary_route: Option<String>,
    /// Routes ordered by how often they occur for this form.
    pub all_valid_routes: Vec<String>,
}

impl FormRouteRecord {
    /// Build a record, deriving the primary route from the ordered route list.
    pub fn new(raw_form: impl Into<String>, canonical_form: String, routes: Vec<String>) -> Self {
        Self {
            raw_form: raw_form.into(),
            canonical_form,
            primary_route: routes.first().cloned(),
            all_valid_routes: routes,
        }
    }

    /// True when the form is unknown and therefore places no constraint on routes.
    pub fn is_unconstrained(&self) -> bool {
        self.all_valid_routes.is_empty()
    }

    pub fn admits_route(&self, route: &str) -> bool {
        self.is_unconstrained()
            || self
                .all_valid_routes
                .iter()
                .any(|candidate| candidate.eq_ignore_ascii_case(route.trim()))
    }
}

/// Form and route found inside free text, with the evidence trail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRouteInference {
    /// Lowercase form keyword as matched in the text.
    pub form: Option<String>,
    /// Upper-case canonical route, either matched directly or imputed from the form.
    pub route: Option<String>,
    /// `;`-joined evidence such as `form:tablet;impute_route:tablet->oral`.
    pub evidence: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_route_is_first_route() {
        let record = FormRouteRecord::new(
            "Solution",
            "SOLUTION".to_string(),
            vec!["ORAL".to_string(), "TOPICAL".to_string()],
        );
        assert_eq!(record.primary_route.as_deref(), Some("ORAL"));
        assert!(record.admits_route("topical"));
        assert!(!record.admits_route("RECTAL"));
    }

    #[test]
    fn unknown_form_admits_any_route() {
        let record = FormRouteRecord::new("Widget", "WIDGET".to_string(), Vec::new());
        assert!(record.primary_route.is_none());
        assert!(record.admits_route("ORAL"));
    }
}
