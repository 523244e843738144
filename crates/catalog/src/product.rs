use serde::{Deserialize, Serialize};

use shelfview_core::{DomainError, DomainResult, Entity};

/// A product record.
///
/// Immutable once built. `price` is display text (e.g. `"$1"`), not a number:
/// the table shows it verbatim and never does arithmetic on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    category: String,
    price: String,
    stocked: bool,
    name: String,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: impl Into<String>,
        stocked: bool,
    ) -> Self {
        Self {
            category: category.into(),
            price: price.into(),
            stocked,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn stocked(&self) -> bool {
        self.stocked
    }

    /// Case-insensitive substring match of `needle` against the name.
    ///
    /// `needle` must already be lowercase. An empty needle matches everything.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }

    /// Reject records a table cannot display meaningfully.
    pub(crate) fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if self.category.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "category cannot be empty (product {:?})",
                self.name
            )));
        }
        Ok(())
    }
}

/// Products are identified by name when rows are reconciled.
impl Entity for Product {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}
