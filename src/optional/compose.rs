//! Composition of [`Optional`]s.
//!
//! Wrapping builds a new container whose payload is a shared handle to an existing [`Optional`].
//! Wrapping never copies: the wrapper and the original observe the same innermost value.
//! Resolution walks the chain of wrapped containers down to the first one that is not wrapped,
//! which is `O(depth)`. Since [`wrap`] always allocates a fresh container, chains cannot form
//! cycles.

use super::{Optional, Slot};

/// Wraps `optional` inside a new [`Optional`].
///
/// Absence is never wrapped: an absent `optional` is returned as is (a handle to the same
/// container).
pub fn wrap<T>(optional: &Optional<T>) -> Optional<T> {
    if optional.is_absent() {
        return optional.clone();
    }
    Optional::from_slot(Slot::Wrapped(optional.clone()))
}

/// Resolves `optional` to a copy of its innermost value, looking through every wrapping layer.
/// Returns `None` when no value can be resolved.
pub fn unwrap<T>(optional: &Optional<T>) -> Option<T>
where
    T: Clone,
{
    optional.get()
}

impl<T> Optional<T> {
    /// Method form of [`wrap`].
    pub fn wrap(&self) -> Self {
        wrap(self)
    }

    /// Handle to the innermost container: the first one down the wrapping chain that holds a value
    /// or nothing. A container that is not wrapped is its own innermost.
    pub fn innermost(&self) -> Self {
        let mut node = self.clone();
        while let Some(inner) = node.wrapped() {
            node = inner;
        }
        node
    }

    /// Number of wrapping layers above the innermost container.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut node = self.clone();
        while let Some(inner) = node.wrapped() {
            node = inner;
            depth += 1;
        }
        depth
    }

    fn wrapped(&self) -> Option<Self> {
        match &*self.slot() {
            Slot::Wrapped(inner) => Some(inner.clone()),
            _ => None,
        }
    }
}
