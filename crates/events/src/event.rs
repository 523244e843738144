use chrono::{DateTime, Utc};

/// A change notification.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - **self-describing** (a stable `event_type` name)
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "table.filter.text_changed").
    fn event_type(&self) -> &'static str;

    /// When the change happened (wall-clock time of the input event).
    fn occurred_at(&self) -> DateTime<Utc>;
}
