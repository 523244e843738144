//! Product catalog.
//!
//! This crate holds the immutable product records and the ordered catalog
//! they live in, implemented purely as deterministic data (no rendering, no
//! state).

pub mod catalog;
pub mod product;

pub use catalog::{Catalog, CategoryRun};
pub use product::Product;
