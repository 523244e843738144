//! Plain-text rendering of display rows.
//!
//! This is the smallest possible host: a two-column table with a `Name` /
//! `Price` header, a full-width line per category and a line per product.
//! Styling is left to the caller; unstocked products are flagged so a host can
//! highlight them.

use core::fmt;

use crate::rows::{DisplayRow, RowKey};

const NAME_COLUMN: &str = "Name";
const PRICE_COLUMN: &str = "Price";
const COLUMN_GAP: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    ColumnHeader,
    Category,
    Product { stocked: bool },
}

/// One rendered line. `key` is `None` only for the column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine<'a> {
    pub key: Option<RowKey<'a>>,
    pub kind: LineKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTable<'a> {
    lines: Vec<RenderedLine<'a>>,
}

impl<'a> RenderedTable<'a> {
    pub fn lines(&self) -> &[RenderedLine<'a>] {
        &self.lines
    }
}

impl fmt::Display for RenderedTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(&line.text)?;
        }
        Ok(())
    }
}

/// Lay out `rows` as a text table. The column header is always present, even
/// when there are no rows.
pub fn render_table(rows: &[DisplayRow]) -> RenderedTable<'_> {
    let width = rows
        .iter()
        .filter_map(DisplayRow::product)
        .map(|p| p.name().chars().count())
        .chain(std::iter::once(NAME_COLUMN.chars().count()))
        .max()
        .unwrap_or_default();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(RenderedLine {
        key: None,
        kind: LineKind::ColumnHeader,
        text: format!("{NAME_COLUMN:<width$}{COLUMN_GAP}{PRICE_COLUMN}"),
    });

    for row in rows {
        let line = match row {
            DisplayRow::CategoryHeader { category } => RenderedLine {
                key: Some(row.key()),
                kind: LineKind::Category,
                text: category.clone(),
            },
            DisplayRow::ProductLine { product } => RenderedLine {
                key: Some(row.key()),
                kind: LineKind::Product {
                    stocked: product.stocked(),
                },
                text: format!("{:<width$}{COLUMN_GAP}{}", product.name(), product.price()),
            },
        };
        lines.push(line);
    }

    RenderedTable { lines }
}

#[cfg(test)]
mod tests {
    use shelfview_catalog::{Catalog, Product};

    use super::*;
    use crate::filter::FilterState;
    use crate::rows::build_rows;

    #[test]
    fn renders_sample_catalog() {
        let rows = build_rows(&Catalog::sample(), &FilterState::default());
        let table = render_table(&rows);

        let expected = "\
Name          Price
Fruits
Apple         $1
Dragonfruit   $1
Passionfruit  $2
Vegetables
Spinach       $2
Pumpkin       $4
Peas          $1";
        assert_eq!(table.to_string(), expected);
    }

    #[test]
    fn flags_unstocked_products() {
        let rows = build_rows(&Catalog::sample(), &FilterState::new("pumpkin", false));
        let table = render_table(&rows);

        assert_eq!(table.lines()[2].kind, LineKind::Product { stocked: false });
        assert_eq!(table.lines()[2].key, Some(RowKey::Product("Pumpkin")));
    }

    #[test]
    fn width_counts_characters_not_bytes() {
        let catalog: Catalog = [Product::new("Épinard", "Légumes", "$2", true)]
            .into_iter()
            .collect();
        let rows = build_rows(&catalog, &FilterState::default());

        assert_eq!(
            render_table(&rows).to_string(),
            "Name     Price\nLégumes\nÉpinard  $2"
        );
    }

    #[test]
    fn empty_rows_still_render_column_header() {
        let table = render_table(&[]);
        assert_eq!(table.lines().len(), 1);
        assert_eq!(table.to_string(), "Name  Price");
    }
}
