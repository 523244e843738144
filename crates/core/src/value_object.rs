//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one with the new values.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct FilterState {
///     filter_text: String,
///     in_stock_only: bool,
/// }
///
/// impl ValueObject for FilterState {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
