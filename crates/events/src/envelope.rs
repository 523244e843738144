use serde::{Deserialize, Serialize};

/// Envelope for an event, carrying its position in the publisher's stream.
///
/// - `sequence_number` is monotonically increasing per publisher, starting at 1.
/// - `payload` is the event itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope<E> {
    /// Monotonically increasing position in the publisher's stream.
    sequence_number: u64,

    payload: E,
}

impl<E> EventEnvelope<E> {
    pub fn new(sequence_number: u64, payload: E) -> Self {
        Self {
            sequence_number,
            payload,
        }
    }

    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }
}
