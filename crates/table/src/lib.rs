//! Filterable, grouped product table.
//!
//! - [`FilterController`] owns the filter state and publishes a
//!   [`FilterEvent`] for every change.
//! - [`build_rows`] derives the display rows from a catalog and a filter
//!   state. It is pure: same inputs, same rows.
//! - [`ProductTableProjection`] keeps a view's rows current by applying the
//!   controller's events.
//! - [`render`] turns rows into the text table a host would show.

pub mod filter;
pub mod projection;
pub mod render;
pub mod rows;

pub use filter::{FilterController, FilterEvent, FilterState, FilterTextChanged, InStockOnlyChanged};
pub use projection::ProductTableProjection;
pub use rows::{DisplayRow, RowKey, build_rows};
