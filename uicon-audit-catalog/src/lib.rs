//! Catalog adapter: the canonical species/form/costume data behind an audit.
//!
//! The catalog is consumed as a prepared JSON document (a pogodata-style
//! dump) from a local file or an HTTP URL. This crate only adapts that
//! document — sorting, indexing, costume-name lookup — and makes no claim
//! about the catalog's own correctness.

pub mod catalog;
pub mod error;
pub mod types;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use types::{CatalogDocument, CatalogEntry};
