//! Dosage-form canonicalization and route inference.
//!
//! Form/route tables are many-to-many. A form maps to an ordered route list
//! (most frequent first); an unknown form has an empty list and is treated as
//! unconstrained rather than as having no valid route.

use brandmap_model::{FormRouteInference, FormRouteRecord};
use brandmap_standards::ReferenceTables;
use brandmap_standards::tables::ROUTE_DESCRIPTORS;

use crate::text::{contains_word, normalize};

/// Canonical form for a raw form string; upper-cased input when unknown.
pub fn canonical_form(tables: &ReferenceTables, raw_form: &str) -> String {
    let upper = raw_form.trim().to_uppercase();
    tables
        .form_canon(&upper)
        .map_or(upper, str::to_string)
}

/// Canonical route for a route alias; upper-cased input when unknown.
pub fn canonical_route(tables: &ReferenceTables, route: &str) -> String {
    let upper = route.trim().to_uppercase();
    tables
        .route_canon(&upper)
        .map_or(upper, str::to_string)
}

/// All valid routes for a form, most frequent first.
///
/// Falls back to the single default route of the canonical form, then of
/// the raw spelling. Empty when the form is unknown.
pub fn valid_routes(tables: &ReferenceTables, form: &str) -> Vec<String> {
    let upper = form.trim().to_uppercase();
    let canonical = canonical_form(tables, &upper);
    if let Some(routes) = tables.form_routes(&canonical) {
        return routes.to_vec();
    }
    tables
        .default_route(&canonical)
        .or_else(|| tables.default_route(&upper))
        .map(|route| vec![route.to_string()])
        .unwrap_or_default()
}

/// The single best-guess route for a form.
pub fn primary_route(tables: &ReferenceTables, form: &str) -> Option<String> {
    valid_routes(tables, form).into_iter().next()
}

/// Whether `route` is allowed for `form`. Unknown forms allow every route.
pub fn is_valid_form_route_pair(tables: &ReferenceTables, form: &str, route: &str) -> bool {
    let routes = valid_routes(tables, form);
    let route = route.trim().to_uppercase();
    routes.is_empty() || routes.contains(&route)
}

/// Same canonical form, or both canonical forms in one equivalence group.
pub fn forms_equivalent(tables: &ReferenceTables, a: &str, b: &str) -> bool {
    let a = canonical_form(tables, a);
    let b = canonical_form(tables, b);
    if a == b {
        return true;
    }
    matches!(
        (tables.equivalence_group(&a), tables.equivalence_group(&b)),
        (Some(x), Some(y)) if x == y
    )
}

pub fn classify_form(tables: &ReferenceTables, raw_form: &str) -> FormRouteRecord {
    FormRouteRecord::new(
        raw_form,
        canonical_form(tables, raw_form),
        valid_routes(tables, raw_form),
    )
}

/// First form keyword, longest first, found as a whole word in normalized text.
pub fn parse_form_from_text(tables: &ReferenceTables, norm_text: &str) -> Option<String> {
    tables
        .form_words()
        .iter()
        .find(|word| contains_word(norm_text, word))
        .cloned()
}

/// Form keyword and route found in normalized text.
///
/// An explicit route alias wins; otherwise the route is imputed from the
/// form. `evidence` records each step, e.g. `form:tablet;impute_route:tablet->oral`.
pub fn extract_route_and_form(tables: &ReferenceTables, norm_text: &str) -> FormRouteInference {
    let mut evidence = Vec::new();

    let form = parse_form_from_text(tables, norm_text);
    if let Some(form) = &form {
        evidence.push(format!("form:{form}"));
    }

    let mut route = tables
        .route_aliases()
        .iter()
        .find(|(alias, _)| contains_word(norm_text, alias))
        .map(|(alias, route)| {
            evidence.push(format!("route:{alias}->{}", route.to_lowercase()));
            route.clone()
        });

    if route.is_none()
        && let Some(form) = &form
        && let Some(imputed) = tables.default_route(&form.to_uppercase())
    {
        evidence.push(format!("impute_route:{form}->{}", imputed.to_lowercase()));
        route = Some(imputed.to_string());
    }

    FormRouteInference {
        form,
        route,
        evidence: evidence.join(";"),
    }
}

/// Form and route for a catalog dosage-form field.
///
/// Catalog form fields are not scanned for route aliases: connectives such as
/// `or` double as aliases there. The route comes from the form keyword, else
/// from the primary route of the whole field.
pub fn infer_form_and_route(tables: &ReferenceTables, raw_form: &str) -> FormRouteInference {
    if raw_form.trim().is_empty() {
        return FormRouteInference::default();
    }
    let form = parse_form_from_text(tables, &normalize(raw_form));
    let mut evidence = Vec::new();
    let mut route = None;

    if let Some(form) = &form {
        evidence.push(format!("form:{form}"));
        if let Some(imputed) = tables.default_route(&form.to_uppercase()) {
            evidence.push(format!("impute_route:{form}->{}", imputed.to_lowercase()));
            route = Some(imputed.to_string());
        }
    }
    if route.is_none()
        && let Some(primary) = primary_route(tables, raw_form)
    {
        evidence.push(format!(
            "primary_route:{}->{}",
            raw_form.trim().to_lowercase(),
            primary.to_lowercase()
        ));
        route = Some(primary);
    }

    FormRouteInference {
        form,
        route,
        evidence: evidence.join(";"),
    }
}

/// Routes admitted by a formulary route descriptor such as `"Inj.:"`.
pub fn map_route_token(descriptor: &str) -> Vec<String> {
    let descriptor = descriptor.trim();
    ROUTE_DESCRIPTORS
        .iter()
        .find(|(key, _)| *key == descriptor)
        .map(|(_, routes)| routes.iter().map(|r| (*r).to_string()).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use brandmap_standards::default_tables;

    use super::*;

    #[test]
    fn canonical_form_falls_back_to_upper() {
        let tables = default_tables();
        assert_eq!(canonical_form(tables, "caps"), "CAPSULE");
        assert_eq!(canonical_form(tables, " widget "), "WIDGET");
        assert_eq!(canonical_route(tables, "po"), "ORAL");
    }

    #[test]
    fn routes_for_known_and_unknown_forms() {
        let tables = default_tables();
        let solution = valid_routes(tables, "Solution");
        assert!(solution.len() >= 10);
        assert_eq!(primary_route(tables, "Solution").as_deref(), Some("ORAL"));
        assert_eq!(primary_route(tables, "Capsule").as_deref(), Some("ORAL"));
        assert!(valid_routes(tables, "Widget").is_empty());
        assert_eq!(primary_route(tables, "Widget"), None);
    }

    #[test]
    fn unknown_form_is_unconstrained() {
        let tables = default_tables();
        assert!(is_valid_form_route_pair(tables, "Widget", "RECTAL"));
        assert!(is_valid_form_route_pair(tables, "solution", "topical"));
        assert!(!is_valid_form_route_pair(tables, "capsule", "TOPICAL"));
    }

    #[test]
    fn equivalence_groups() {
        let tables = default_tables();
        assert!(forms_equivalent(tables, "Tablet", "caplet"));
        assert!(forms_equivalent(tables, "caps", "capsule"));
        assert!(!forms_equivalent(tables, "tablet", "cream"));
        assert!(forms_equivalent(tables, "widget", "WIDGET"));
    }

    #[test]
    fn record_for_form() {
        let record = classify_form(default_tables(), "Capsule");
        assert_eq!(record.canonical_form, "CAPSULE");
        assert_eq!(record.primary_route.as_deref(), Some("ORAL"));
        assert_eq!(
            record.all_valid_routes.first(),
            record.primary_route.as_ref()
        );
    }

    #[test]
    fn route_imputed_from_form() {
        let inference = extract_route_and_form(default_tables(), "paracetamol 500 mg tablet");
        assert_eq!(inference.form.as_deref(), Some("tablet"));
        assert_eq!(inference.route.as_deref(), Some("ORAL"));
        assert_eq!(inference.evidence, "form:tablet;impute_route:tablet->oral");
    }

    #[test]
    fn explicit_route_wins() {
        let inference =
            extract_route_and_form(default_tables(), "ceftriaxone 1 g vial for intravenous use");
        assert_eq!(inference.route.as_deref(), Some("INTRAVENOUS"));
        assert!(inference.evidence.contains("route:intravenous->intravenous"));
    }

    #[test]
    fn nothing_found() {
        let inference = extract_route_and_form(default_tables(), "");
        assert_eq!(inference, FormRouteInference::default());
    }

    #[test]
    fn catalog_field_ignores_route_connectives() {
        let tables = default_tables();
        let inference = infer_form_and_route(tables, "Film-Coated Tablet");
        assert_eq!(inference.form.as_deref(), Some("tablet"));
        assert_eq!(inference.route.as_deref(), Some("ORAL"));

        let inference = infer_form_and_route(tables, "Cream or Ointment");
        assert_eq!(inference.route.as_deref(), Some("TOPICAL"));

        assert_eq!(infer_form_and_route(tables, "  "), FormRouteInference::default());
    }

    #[test]
    fn route_descriptors() {
        assert_eq!(
            map_route_token(" Inj.: "),
            vec!["INTRAVENOUS", "INTRAMUSCULAR", "SUBCUTANEOUS"]
        );
        assert!(map_route_token("Chewed:").is_empty());
    }
}
