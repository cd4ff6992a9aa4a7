//! Core resolution and classification logic for UICON iconset audits.
//!
//! This crate is pure logic: the icon-name codec, the fallback resolver, and
//! the match-quality classifier. The inventory set and the catalog it works
//! against are built by the glue crates at startup and passed in by
//! reference, so everything here is testable without filesystem or network
//! access.

pub mod classify;
pub mod inventory;
pub mod key;
pub mod resolver;

pub use classify::{IconStatus, classify};
pub use inventory::Inventory;
pub use key::{IconKey, ParseError, ParsedIcon, parse_icon_name};
pub use resolver::{Resolution, resolve};
