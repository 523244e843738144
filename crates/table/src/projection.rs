use shelfview_catalog::Catalog;
use shelfview_events::{Event, EventEnvelope, Projection};

use crate::filter::{FilterEvent, FilterState};
use crate::rows::{DisplayRow, build_rows};

/// Product table view kept current from filter events.
///
/// Holds its own read-only copy of the filter state; the controller stays the
/// only writer of the real one. Rows are rebuilt from scratch on every event.
#[derive(Debug, Clone)]
pub struct ProductTableProjection {
    catalog: Catalog,
    filter: FilterState,
    rows: Vec<DisplayRow>,
}

impl ProductTableProjection {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_filter(catalog, FilterState::default())
    }

    /// Start from a known filter state (e.g. when subscribing mid-session).
    pub fn with_filter(catalog: Catalog, filter: FilterState) -> Self {
        let rows = build_rows(&catalog, &filter);
        Self {
            catalog,
            filter,
            rows,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    /// Number of product lines currently visible.
    pub fn visible_products(&self) -> usize {
        self.rows.iter().filter(|r| !r.is_header()).count()
    }

    fn recompute(&mut self) {
        self.rows = build_rows(&self.catalog, &self.filter);
        tracing::debug!(
            rows = self.rows.len(),
            visible = self.visible_products(),
            catalog = self.catalog.len(),
            "product table recomputed"
        );
    }
}

impl Projection for ProductTableProjection {
    type Ev = FilterEvent;

    fn apply(&mut self, envelope: &EventEnvelope<FilterEvent>) {
        let event = envelope.payload();
        event.apply_to(&mut self.filter);
        tracing::trace!(
            event_type = event.event_type(),
            seq = envelope.sequence_number(),
            lag_ms = (chrono::Utc::now() - event.occurred_at()).num_milliseconds(),
            "applying filter change"
        );
        self.recompute();
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::filter::{FilterTextChanged, InStockOnlyChanged};

    fn text(seq: u64, text: &str) -> EventEnvelope<FilterEvent> {
        EventEnvelope::new(
            seq,
            FilterEvent::FilterTextChanged(FilterTextChanged {
                text: text.to_string(),
                occurred_at: Utc::now(),
            }),
        )
    }

    fn stock(seq: u64, in_stock_only: bool) -> EventEnvelope<FilterEvent> {
        EventEnvelope::new(
            seq,
            FilterEvent::InStockOnlyChanged(InStockOnlyChanged {
                in_stock_only,
                occurred_at: Utc::now(),
            }),
        )
    }

    #[test]
    fn starts_with_every_product_visible() {
        let view = ProductTableProjection::new(Catalog::sample());
        assert_eq!(view.visible_products(), 6);
        assert_eq!(view.rows().len(), 8);
    }

    #[test]
    fn applying_events_rebuilds_rows() {
        let mut view = ProductTableProjection::new(Catalog::sample());

        view.apply(&text(1, "pea"));
        assert_eq!(view.rows().len(), 2);

        view.apply(&stock(2, true));
        view.apply(&text(3, ""));
        assert_eq!(view.filter(), &FilterState::new("", true));
        assert_eq!(view.visible_products(), 4);
    }

    #[test]
    fn matches_direct_derivation() {
        let mut view = ProductTableProjection::new(Catalog::sample());
        view.apply(&text(1, "fruit"));

        let expected = build_rows(view.catalog(), &FilterState::new("fruit", false));
        assert_eq!(view.rows(), expected.as_slice());
    }
}
