//! Drug catalog normalization.
//!
//! Turns free-text product descriptions from a regulator catalog into
//! canonical, comparable records.
//!
//! # Overview
//!
//! This crate provides:
//! - **Text** ([`text`]): accent folding, unit spelling and punctuation cleanup
//! - **Salts** ([`salts`]): token classification and base/salt splitting
//! - **Forms** ([`forms`]): canonical dosage forms and form/route inference
//! - **Synonyms** ([`synonyms`]): spelling, regional and abbreviation aliases
//! - **Flips** ([`flip`]): brand/generic column swap detection
//! - **Vaccines** ([`vaccine`]): acronyms, component sets and canonical names
//! - **Brand map** ([`brand_map`]): the catalog-to-brand-map row pipeline
//!
//! Everything is reachable through [`NormalizationEngine`], which owns the
//! reference tables and compiled matchers.
//!
//! # Example
//!
//! ```ignore
//! use brandmap_model::CatalogRow;
//! use brandmap_normalization::default_engine;
//!
//! let engine = default_engine();
//! let split = engine.split("Amlodipine (as besilate) 5 mg");
//! assert_eq!(split.base_name, "AMLODIPINE");
//!
//! let map = engine.build_brand_map([CatalogRow::new("Amoxil", "Amoxicillin", "Capsule", "500mg")]);
//! assert_eq!(map.rows[0].route, "ORAL");
//! ```

#![deny(unsafe_code)]

pub mod brand_map;
pub mod engine;
pub mod flip;
pub mod forms;
pub mod salts;
pub mod synonyms;
pub mod text;
pub mod vaccine;

// Service
pub use engine::{NormalizationEngine, default_engine};

// Matchers
pub use flip::GenericMatcher;
pub use vaccine::VaccineNamer;

// Row pipeline
pub use brand_map::{
    RowOutcome, build_brand_map, catalog_row_from_columns, column_key, normalize_columns,
    normalize_row,
};

// Text
pub use text::{normalize, normalize_compact, slug_id};
