//! Filter state and its controller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shelfview_catalog::Product;
use shelfview_core::ValueObject;
use shelfview_events::{Event, EventBus, EventEnvelope, InMemoryEventBus, Subscription};

/// Which products are visible.
///
/// Any text is accepted, including the empty string (which matches every
/// product).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterState {
    pub filter_text: String,
    pub in_stock_only: bool,
}

impl ValueObject for FilterState {}

impl FilterState {
    pub fn new(filter_text: impl Into<String>, in_stock_only: bool) -> Self {
        Self {
            filter_text: filter_text.into(),
            in_stock_only,
        }
    }

    /// The lowercased filter text used for matching.
    pub fn needle(&self) -> String {
        self.filter_text.to_lowercase()
    }

    /// Whether `product` survives this filter, given a precomputed `needle`.
    pub fn admits(&self, needle: &str, product: &Product) -> bool {
        if self.in_stock_only && !product.stocked() {
            return false;
        }
        product.name_contains(needle)
    }
}

/// Event: the filter text was replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterTextChanged {
    pub text: String,
    pub occurred_at: DateTime<Utc>,
}

/// Event: the in-stock-only toggle was replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InStockOnlyChanged {
    pub in_stock_only: bool,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterEvent {
    FilterTextChanged(FilterTextChanged),
    InStockOnlyChanged(InStockOnlyChanged),
}

impl FilterEvent {
    /// Replace the field this event carries. Events hold absolute values, so
    /// applying one twice is the same as applying it once.
    pub fn apply_to(&self, state: &mut FilterState) {
        match self {
            FilterEvent::FilterTextChanged(e) => state.filter_text = e.text.clone(),
            FilterEvent::InStockOnlyChanged(e) => state.in_stock_only = e.in_stock_only,
        }
    }
}

impl Event for FilterEvent {
    fn event_type(&self) -> &'static str {
        match self {
            FilterEvent::FilterTextChanged(_) => "table.filter.text_changed",
            FilterEvent::InStockOnlyChanged(_) => "table.filter.in_stock_only_changed",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            FilterEvent::FilterTextChanged(e) => e.occurred_at,
            FilterEvent::InStockOnlyChanged(e) => e.occurred_at,
        }
    }
}

/// Owns the [`FilterState`] and notifies views of every change.
///
/// The controller is the only writer. Every mutation is published, even one
/// that leaves the value unchanged, so a host gets one notification per input
/// event. Publish failures are logged and never roll back the local state.
#[derive(Debug)]
pub struct FilterController<B = InMemoryEventBus<EventEnvelope<FilterEvent>>> {
    state: FilterState,
    bus: B,
    last_sequence_number: u64,
}

impl FilterController {
    pub fn new() -> Self {
        Self::with_bus(InMemoryEventBus::new())
    }
}

impl Default for FilterController {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> FilterController<B>
where
    B: EventBus<EventEnvelope<FilterEvent>>,
{
    pub fn with_bus(bus: B) -> Self {
        Self {
            state: FilterState::default(),
            bus,
            last_sequence_number: 0,
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Sequence number of the most recently published event (0 if none).
    pub fn last_sequence_number(&self) -> u64 {
        self.last_sequence_number
    }

    /// Receive every event published after this call.
    pub fn subscribe(&self) -> Subscription<EventEnvelope<FilterEvent>> {
        self.bus.subscribe()
    }

    pub fn set_filter_text(&mut self, text: impl Into<String>) -> &FilterState {
        self.emit(FilterEvent::FilterTextChanged(FilterTextChanged {
            text: text.into(),
            occurred_at: Utc::now(),
        }))
    }

    pub fn set_in_stock_only(&mut self, in_stock_only: bool) -> &FilterState {
        self.emit(FilterEvent::InStockOnlyChanged(InStockOnlyChanged {
            in_stock_only,
            occurred_at: Utc::now(),
        }))
    }

    /// Restore the default state, publishing one event per field.
    pub fn reset(&mut self) -> &FilterState {
        let defaults = FilterState::default();
        self.set_filter_text(defaults.filter_text);
        self.set_in_stock_only(defaults.in_stock_only)
    }

    fn emit(&mut self, event: FilterEvent) -> &FilterState {
        event.apply_to(&mut self.state);
        self.last_sequence_number += 1;

        let seq = self.last_sequence_number;
        let event_type = event.event_type();
        if let Err(err) = self.bus.publish(EventEnvelope::new(seq, event)) {
            tracing::error!(error = ?err, event_type, seq, "failed to publish filter change");
        } else {
            tracing::debug!(
                event_type,
                seq,
                filter_text = %self.state.filter_text,
                in_stock_only = self.state.in_stock_only,
                "filter changed"
            );
        }

        &self.state
    }
}
