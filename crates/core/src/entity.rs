//! Entity trait: identity that survives re-derivation.
//!
//! Rows handed to a rendering host are rebuilt on every filter change; the
//! host reconciles old and new rows by identity, not by position.

/// Something with a stable identity.
///
/// Two entities with the same `id()` are treated as the same thing by a
/// rendering host, even if other attributes differ.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
