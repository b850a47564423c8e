//! Entity trait: identity + continuity across replacements.

/// Entity marker + minimal interface.
///
/// Records in this workspace are immutable; "changing" an entity means storing
/// a new value under the same key. The key returned here is what keyed
/// repositories index on.
pub trait Entity {
    /// Strongly-typed entity key.
    type Key: Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the entity key.
    fn key(&self) -> &Self::Key;
}
