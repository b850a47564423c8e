//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity of their own; two with the same attributes
/// are equal. They are never modified in place. To "modify" one, build a new
/// value.
///
/// Invoice items are value objects; customers and products are entities
/// (see [`crate::Entity`]) even though they are also immutable.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
