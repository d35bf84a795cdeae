//! Entity trait: identity + continuity across state changes.
//!
//! Entities in this domain are identified by a single key (a bouquet's name,
//! a shop's name). Equality and hashing must be derived from that key alone,
//! so types that carry mutable state next to their identity implement
//! `PartialEq`/`Hash` through [`Entity::id`] rather than deriving them.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Whether `other` denotes the same entity, regardless of its other state.
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
