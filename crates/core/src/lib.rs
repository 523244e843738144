//! `shelfview-core`: shared building blocks for the product table.
//!
//! This crate contains **pure domain** primitives (no IO beyond error
//! conversions, no rendering concerns).

pub mod entity;
pub mod error;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;
