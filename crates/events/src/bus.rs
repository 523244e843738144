//! Event publishing/subscription abstraction (mechanics only).
//!
//! The bus is the observer seam between the filter controller (single
//! writer) and any number of views (readers). It makes minimal assumptions:
//!
//! - **Transport-agnostic**: the in-memory implementation uses channels
//! - **Broadcast**: every subscriber gets a copy of every published message
//! - **No persistence**: state resets with the process
//!
//! Subscribers only see messages published after they subscribed.

use std::sync::Arc;
use std::sync::mpsc::Receiver;

/// A subscription to an event stream.
///
/// ```ignore
/// let subscription = controller.subscribe();
/// controller.set_filter_text("pea");
///
/// while let Ok(envelope) = subscription.try_recv() {
///     runner.apply(&envelope)?;
/// }
/// ```
///
/// Subscriptions are meant for single-threaded consumption. Messages arrive
/// in publication order.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Take every message that is already queued, without blocking.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}

/// Domain-agnostic event bus (pub/sub abstraction).
///
/// ```text
/// input → FilterController (update state) → EventBus (publish) → Views
///                                                                  ├─ table projection
///                                                                  └─ any other reader
/// ```
///
/// `publish()` can fail (e.g. a poisoned lock); the failure is surfaced to the
/// publisher, which decides whether to log or propagate it.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}
