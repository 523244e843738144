//! Command-line and environment configuration.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use shelfview_catalog::Catalog;
use shelfview_table::FilterState;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "shelfview")]
#[command(about = "Filterable product table grouped by category")]
#[command(version)]
pub struct Cli {
    /// JSON catalog to load (array of {name, category, price, stocked});
    /// the built-in sample catalog is used when absent
    #[arg(long, env = "SHELFVIEW_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Only show products whose name contains this text (case-insensitive)
    #[arg(long, short, default_value = "")]
    pub filter: String,

    /// Hide products that are out of stock
    #[arg(long)]
    pub in_stock_only: bool,

    /// Print rows as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Keep reading filter changes from stdin
    #[arg(long, short)]
    pub interactive: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// How rows are written to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table { color: bool },
    Json,
}

impl Cli {
    pub fn load_catalog(&self) -> anyhow::Result<Catalog> {
        match &self.catalog {
            Some(path) => Catalog::from_path(path)
                .with_context(|| format!("failed to load catalog {}", path.display())),
            None => {
                tracing::info!("no catalog given; using the built-in sample");
                Ok(Catalog::sample())
            }
        }
    }

    pub fn initial_filter(&self) -> FilterState {
        FilterState::new(self.filter.clone(), self.in_stock_only)
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Table {
                color: !self.no_color,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_show_everything_as_a_colored_table() {
        let cli = Cli::try_parse_from(["shelfview"]).unwrap();

        assert_eq!(cli.initial_filter(), FilterState::default());
        assert_eq!(cli.output_format(), OutputFormat::Table { color: true });
    }

    #[test]
    fn flags_build_the_initial_filter() {
        let cli = Cli::try_parse_from(["shelfview", "-f", "Pea", "--in-stock-only", "--json"])
            .unwrap();

        assert_eq!(cli.initial_filter(), FilterState::new("Pea", true));
        assert_eq!(cli.output_format(), OutputFormat::Json);
    }

    #[test]
    fn explicit_catalog_that_does_not_exist_is_an_error() {
        let cli = Cli::try_parse_from(["shelfview", "--catalog", "/no/such/catalog.json"]).unwrap();
        let err = cli.load_catalog().unwrap_err();

        assert!(err.to_string().contains("/no/such/catalog.json"));
    }
}
