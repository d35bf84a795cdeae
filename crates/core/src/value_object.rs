//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity** - they are defined entirely by their
//! attribute values. A `Flower` is a value object (any two roses are the same
//! flower); a `Bouquet` is an entity (it is known by its name).

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// The trait requires:
/// - **Clone**: value objects are cheap to copy
/// - **Eq + Hash**: they are compared by value and used as map keys
/// - **Debug**: they show up in logs and test failures
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// struct Price {
///     cents: u64,
/// }
///
/// impl ValueObject for Price {}
/// ```
pub trait ValueObject: Clone + Eq + core::hash::Hash + core::fmt::Debug {}
