//! Entity trait: records the backend identifies by id.

/// Entity marker + minimal interface.
///
/// Records built locally and not yet persisted have no id.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the backend-assigned identifier, if any.
    fn id(&self) -> Option<Self::Id>;

    fn is_persisted(&self) -> bool {
        self.id().is_some()
    }
}
