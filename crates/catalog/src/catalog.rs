//! Ordered product catalog.
//!
//! Catalog order is meaningful: it decides which category header comes first
//! and the order of products under each header. Nothing here sorts.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use shelfview_core::DomainResult;

use crate::product::Product;

/// A fixed, ordered sequence of products.
///
/// Product names SHOULD be unique: rendering hosts use the name as the row
/// identity. Duplicates are reported by [`Catalog::duplicate_names`] and
/// logged on load, but never rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

/// A maximal stretch of consecutive catalog entries sharing one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRun<'a> {
    pub category: &'a str,
    pub products: &'a [Product],
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The six-product catalog used in docs, tests and the demo host.
    pub fn sample() -> Self {
        Self::new(vec![
            Product::new("Apple", "Fruits", "$1", true),
            Product::new("Dragonfruit", "Fruits", "$1", true),
            Product::new("Passionfruit", "Fruits", "$2", false),
            Product::new("Spinach", "Vegetables", "$2", true),
            Product::new("Pumpkin", "Vegetables", "$4", false),
            Product::new("Peas", "Vegetables", "$1", true),
        ])
    }

    /// Parse a catalog from a JSON array of product objects.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        for product in &catalog.products {
            product.validate()?;
        }

        for name in catalog.duplicate_names() {
            tracing::warn!(product = %name, "duplicate product name; row identity is ambiguous");
        }

        tracing::debug!(products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Read and parse a JSON catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> DomainResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            shelfview_core::DomainError::io(format!("{}: {e}", path.display()))
        })?;
        Self::from_json(&json)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Names that appear more than once, in order of first repetition.
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        let mut dups = Vec::new();
        for product in &self.products {
            let count = seen.entry(product.name()).or_insert(0);
            *count += 1;
            if *count == 2 {
                dups.push(product.name());
            }
        }
        dups
    }

    /// Contiguous category runs in catalog order.
    ///
    /// A category that appears in two separated stretches yields two runs.
    pub fn runs(&self) -> Vec<CategoryRun<'_>> {
        self.products
            .chunk_by(|a, b| a.category() == b.category())
            .map(|products| CategoryRun {
                category: products[0].category(),
                products,
            })
            .collect()
    }
}

impl FromIterator<Product> for Catalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelfview_core::DomainError;

    #[test]
    fn sample_keeps_insertion_order() {
        let names: Vec<_> = Catalog::sample().iter().map(|p| p.name().to_string()).collect();
        assert_eq!(
            names,
            ["Apple", "Dragonfruit", "Passionfruit", "Spinach", "Pumpkin", "Peas"]
        );
    }

    #[test]
    fn from_json_parses_array_of_products() {
        let catalog = Catalog::from_json(
            r#"[
                {"category":"Fruits","price":"$1","stocked":true,"name":"Apple"},
                {"category":"Vegetables","price":"$4","stocked":false,"name":"Pumpkin"}
            ]"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.products()[1], Product::new("Pumpkin", "Vegetables", "$4", false));
    }

    #[test]
    fn from_json_rejects_malformed_input() {
        let err = Catalog::from_json(r#"[{"name":"Apple"}]"#).unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn from_json_rejects_blank_names() {
        let err = Catalog::from_json(
            r#"[{"category":"Fruits","price":"$1","stocked":true,"name":" "}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn from_path_reports_missing_file_as_io() {
        let err = Catalog::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, DomainError::Io(_)));
    }

    #[test]
    fn duplicates_are_reported_once_each() {
        let catalog: Catalog = [
            Product::new("Apple", "Fruits", "$1", true),
            Product::new("Apple", "Fruits", "$1", false),
            Product::new("Peas", "Vegetables", "$1", true),
            Product::new("Apple", "Fruits", "$3", true),
        ]
        .into_iter()
        .collect();

        assert_eq!(catalog.duplicate_names(), vec!["Apple"]);
        assert!(Catalog::sample().duplicate_names().is_empty());
    }

    #[test]
    fn duplicates_do_not_fail_loading() {
        let catalog = Catalog::from_json(
            r#"[
                {"category":"Fruits","price":"$1","stocked":true,"name":"Apple"},
                {"category":"Fruits","price":"$1","stocked":true,"name":"Apple"}
            ]"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn separated_stretches_form_separate_runs() {
        let catalog: Catalog = [
            Product::new("Apple", "Fruits", "$1", true),
            Product::new("Peas", "Vegetables", "$1", true),
            Product::new("Kiwi", "Fruits", "$1", true),
            Product::new("Lime", "Fruits", "$1", true),
        ]
        .into_iter()
        .collect();

        let runs: Vec<_> = catalog.runs().iter().map(|r| (r.category, r.products.len())).collect();
        assert_eq!(runs, vec![("Fruits", 1), ("Vegetables", 1), ("Fruits", 2)]);
    }

    #[test]
    fn empty_catalog_has_no_runs() {
        assert!(Catalog::default().runs().is_empty());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_catalog() -> impl Strategy<Value = Catalog> {
            prop::collection::vec(("[a-z]{1,6}", prop::sample::select(vec!["A", "B", "C"])), 0..24)
                .prop_map(|rows| {
                    rows.into_iter()
                        .map(|(name, category)| Product::new(name, category, "$1", true))
                        .collect::<Catalog>()
                })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: runs partition the catalog without reordering it.
            #[test]
            fn runs_concatenate_back_to_catalog(catalog in arb_catalog()) {
                let flattened: Vec<Product> = catalog
                    .runs()
                    .iter()
                    .flat_map(|r| r.products.iter().cloned())
                    .collect();
                prop_assert_eq!(flattened.as_slice(), catalog.products());
            }

            /// Property: adjacent runs never share a category.
            #[test]
            fn adjacent_runs_differ(catalog in arb_catalog()) {
                let runs = catalog.runs();
                for pair in runs.windows(2) {
                    prop_assert_ne!(pair[0].category, pair[1].category);
                }
            }
        }
    }
}
