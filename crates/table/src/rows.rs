//! Display row derivation.
//!
//! Grouping is positional: a header is emitted whenever the category of the
//! next surviving product differs from the previous survivor's. That mirrors
//! catalog order exactly. It is not a group-by, so a category that shows up in
//! two separated stretches gets two headers.

use serde::{Deserialize, Serialize};

use shelfview_catalog::{Catalog, Product};
use shelfview_core::Entity;

use crate::filter::FilterState;

/// One row handed to the rendering host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayRow {
    CategoryHeader { category: String },
    ProductLine { product: Product },
}

/// Stable identity of a row across re-derivations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKey<'a> {
    Category(&'a str),
    Product(&'a str),
}

impl DisplayRow {
    pub fn header(category: impl Into<String>) -> Self {
        Self::CategoryHeader {
            category: category.into(),
        }
    }

    pub fn line(product: Product) -> Self {
        Self::ProductLine { product }
    }

    /// Category name for headers, product name for lines.
    ///
    /// Only unique when product names are unique in the catalog.
    pub fn key(&self) -> RowKey<'_> {
        match self {
            DisplayRow::CategoryHeader { category } => RowKey::Category(category),
            DisplayRow::ProductLine { product } => RowKey::Product(product.id()),
        }
    }

    pub fn product(&self) -> Option<&Product> {
        match self {
            DisplayRow::ProductLine { product } => Some(product),
            DisplayRow::CategoryHeader { .. } => None,
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, DisplayRow::CategoryHeader { .. })
    }
}

/// Derive the ordered, grouped rows for `catalog` under `filter`.
///
/// No matches yields an empty vec.
pub fn build_rows(catalog: &Catalog, filter: &FilterState) -> Vec<DisplayRow> {
    let needle = filter.needle();
    let mut rows = Vec::new();
    let mut last_category: Option<&str> = None;

    for product in catalog {
        if !filter.admits(&needle, product) {
            continue;
        }
        if last_category != Some(product.category()) {
            rows.push(DisplayRow::header(product.category()));
            last_category = Some(product.category());
        }
        rows.push(DisplayRow::line(product.clone()));
    }

    rows
}
