//! Projection runner utilities (view builders).
//!
//! Tracks the last applied sequence number so a view never applies a stale
//! or replayed notification out of order.

use thiserror::Error;

use crate::{EventEnvelope, Projection, Subscription};

/// Tracks projection progress.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ProjectionCursor {
    last_sequence_number: u64,
}

impl ProjectionCursor {
    pub fn last_sequence_number(&self) -> u64 {
        self.last_sequence_number
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    #[error("non-monotonic sequence number (last={last}, found={found})")]
    NonMonotonicSequence { last: u64, found: u64 },
}

/// Runs envelopes through a projection and tracks progress.
#[derive(Debug)]
pub struct ProjectionRunner<P>
where
    P: Projection,
{
    projection: P,
    cursor: Option<ProjectionCursor>,
}

impl<P> ProjectionRunner<P>
where
    P: Projection,
{
    pub fn new(projection: P) -> Self {
        Self {
            projection,
            cursor: None,
        }
    }

    pub fn projection(&self) -> &P {
        &self.projection
    }

    /// Current cursor for this projection (if any envelopes were applied).
    pub fn cursor(&self) -> Option<ProjectionCursor> {
        self.cursor
    }

    /// Apply a single envelope, enforcing monotonic sequencing.
    ///
    /// The first envelope is accepted at any sequence number, since a view may
    /// subscribe after the publisher has already emitted events.
    pub fn apply(&mut self, envelope: &EventEnvelope<P::Ev>) -> Result<(), ProjectionError> {
        let found = envelope.sequence_number();

        if let Some(c) = self.cursor
            && found <= c.last_sequence_number
        {
            return Err(ProjectionError::NonMonotonicSequence {
                last: c.last_sequence_number,
                found,
            });
        }

        self.projection.apply(envelope);
        self.cursor = Some(ProjectionCursor {
            last_sequence_number: found,
        });
        Ok(())
    }

    /// Apply many envelopes in order.
    pub fn run<'a>(
        &mut self,
        envelopes: impl IntoIterator<Item = &'a EventEnvelope<P::Ev>>,
    ) -> Result<(), ProjectionError>
    where
        P::Ev: 'a,
    {
        for env in envelopes {
            self.apply(env)?;
        }
        Ok(())
    }

    /// Apply everything currently queued on `subscription`, without blocking.
    ///
    /// Returns the number of envelopes applied.
    pub fn drain(
        &mut self,
        subscription: &Subscription<EventEnvelope<P::Ev>>,
    ) -> Result<usize, ProjectionError> {
        let pending = subscription.drain();
        let count = pending.len();
        self.run(pending.iter())?;
        if count > 0 {
            tracing::trace!(applied = count, "drained subscription");
        }
        Ok(count)
    }
}
