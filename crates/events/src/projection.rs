use crate::{Event, EventEnvelope};

/// A projection builds a derived view from a stream of change events.
///
/// Views are **disposable**: the current state they are derived from is the
/// source of truth, and a view can be rebuilt at any time by replaying the
/// events (or by constructing it from the current state directly).
///
/// ## Lifecycle
///
/// 1. **Subscribe**: the view subscribes to the publisher's bus
/// 2. **Apply**: for each event, `apply()` updates the view
/// 3. **Query**: readers query the view directly; no replay needed
///
/// ## Idempotency
///
/// Applying the same event twice must yield the same view. Events here carry
/// absolute values ("filter text is now X"), so this holds naturally.
///
/// `apply` does not return errors: an event that is irrelevant to the view is
/// ignored. Sequencing problems are caught by [`crate::ProjectionRunner`].
pub trait Projection {
    type Ev: Event;

    /// Apply a single event to the projection, updating the view.
    fn apply(&mut self, envelope: &EventEnvelope<Self::Ev>);
}
