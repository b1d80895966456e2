//! Reference data for drug catalog normalization.
//!
//! This crate provides:
//!
//! - **Word lists** ([`tables`]): stopwords, salt tokens, units, cations and
//!   anions, ATC combination patterns
//! - **Embedded CSV tables** ([`embedded`]): forms, routes, synonyms, vaccine
//!   acronyms and canonical generics
//! - **[`ReferenceTables`]**: the parsed tables plus reverse maps, built once
//!   per process through [`default_tables`]
//! - **Vocabulary loading** ([`vocabulary_loader`]): the external generic-name
//!   dataset used for brand/generic flip detection
//!
//! # Data layout
//!
//! ```text
//! data/
//! ├── forms.csv               # form spelling -> canonical form
//! ├── form_routes.csv         # canonical form -> routes by frequency
//! ├── form_route_default.csv  # form spelling -> default route
//! ├── route_aliases.csv       # route alias -> canonical route
//! ├── synonyms.csv            # (kind, name, target)
//! ├── canonical_generics.csv  # (drugbank_id, generic_name, atc_code)
//! ├── vaccine_canonical.csv   # canonical vaccine name, acronym, patterns
//! ├── vaccine_acronyms.csv    # acronym -> components
//! └── vaccine_keywords.csv    # keyword -> component
//! ```

#![deny(unsafe_code)]

pub mod embedded;
pub mod error;
mod records;
pub mod reference;
pub mod tables;
pub mod vocabulary_loader;

pub use error::{Result, StandardsError};
pub use records::{CanonicalGeneric, SynonymKind, VaccineCanonical};
pub use reference::{ReferenceTables, default_tables};
pub use vocabulary_loader::{
    VOCABULARY_ENV, load_vocabulary, load_vocabulary_from_reader, load_vocabulary_or_empty,
};
