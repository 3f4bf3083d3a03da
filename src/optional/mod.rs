//! Presence core of [`Optional`].
//!
//! An [`Optional`] is a handle to a shared container. The container holds one of three states:
//! nothing, a value, or another [`Optional`] it wraps. Combinators are implemented in
//! [`combinators`], wrapping and resolution in [`compose`], and serde support in `codec`.

// Rust
use alloc::rc::Rc;
use core::{
    cell::{Ref, RefCell, RefMut},
    fmt, mem,
};

/// Read/transform operations.
pub mod combinators;

/// Wrap/unwrap composition and recursive resolution.
pub mod compose;

/// Zero value handling at the flattening boundary.
pub mod flatten;

/// Serde integration.
mod codec;


/// State of a single container.
pub(crate) enum Slot<T> {
    /// No value.
    Absent,
    /// A materialized value.
    Value(T),
    /// Another container, shared with whoever else holds it.
    Wrapped(Optional<T>),
}

/// A container that may or may not hold a value of type `T`.
///
/// `Optional` is a reference-counted handle: [`Clone`] returns a handle to the same container, and
/// [`wrap`](compose::wrap) builds a new container that shares the wrapped one. Mutations performed
/// through any handle or wrapper are visible through all of them.
///
/// Combinator callbacks run while the innermost container is borrowed. Accessing that same
/// container again from inside a callback panics.
pub struct Optional<T> {
    slot: Rc<RefCell<Slot<T>>>,
}

impl<T> Optional<T> {
    /// Creates a present [`Optional`] holding `value`.
    pub fn new(value: T) -> Self {
        Self::from_slot(Slot::Value(value))
    }

    /// Creates an absent [`Optional`].
    pub fn empty() -> Self {
        Self::from_slot(Slot::Absent)
    }

    /// Creates an [`Optional`] from a native `Option`: `None` is absent, `Some(value)` is present.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::new(value),
            None => Self::empty(),
        }
    }

    pub(crate) fn from_slot(slot: Slot<T>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(slot)),
        }
    }

    /// Forces this container to absent, dropping its value or its reference to a wrapped
    /// [`Optional`]. Calling it on an absent [`Optional`] does nothing.
    ///
    /// Only this container is cleared: an [`Optional`] previously wrapped by it keeps its value.
    pub fn clear(&self) -> &Self {
        *self.slot_mut() = Slot::Absent;
        self
    }

    /// Whether a value can be resolved from this [`Optional`], looking through any wrapping.
    pub fn is_present(&self) -> bool {
        self.innermost().slot().is_value()
    }

    /// Negation of [`Optional::is_present`]. Fits serde's `skip_serializing_if`.
    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Whether this container holds another [`Optional`] instead of a raw value.
    pub fn is_wrapped(&self) -> bool {
        matches!(*self.slot(), Slot::Wrapped(_))
    }

    /// Whether both handles point to the same container.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.slot, &other.slot)
    }

    /// A new, unaliased [`Optional`] holding a copy of the resolved value.
    pub fn detach(&self) -> Self
    where
        T: Clone,
    {
        Self::from_option(self.get())
    }

    pub(crate) fn slot(&self) -> Ref<'_, Slot<T>> {
        self.slot.borrow()
    }

    pub(crate) fn slot_mut(&self) -> RefMut<'_, Slot<T>> {
        self.slot.borrow_mut()
    }
}

impl<T> Slot<T> {
    pub(crate) fn is_value(&self) -> bool {
        matches!(self, Slot::Value(_))
    }

    pub(crate) fn value(&self) -> Option<&T> {
        match self {
            Slot::Value(value) => Some(value),
            _ => None,
        }
    }

    pub(crate) fn value_mut(&mut self) -> Option<&mut T> {
        match self {
            Slot::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> Clone for Optional<T> {
    /// Returns a handle to the same container.
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_option(value)
    }
}

impl<T: PartialEq> PartialEq for Optional<T> {
    /// Compares resolved values: two absent [`Optional`]s are equal regardless of wrapping.
    fn eq(&self, other: &Self) -> bool {
        let (this, other) = (self.innermost(), other.innermost());
        let (this, other) = (this.slot(), other.slot());
        this.value() == other.value()
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.slot() {
            Slot::Absent => write!(f, "Empty"),
            Slot::Value(value) => f.debug_tuple("Present").field(value).finish(),
            Slot::Wrapped(_) => f
                .debug_struct("Wrapped")
                .field("depth", &self.depth())
                .field("innermost", &self.innermost())
                .finish(),
        }
    }
}

/// Unlinks wrapping chains one layer at a time, so dropping a deep chain does not recurse.
impl<T> Drop for Optional<T> {
    fn drop(&mut self) {
        let mut next = self.take_wrapped();
        while let Some(node) = next {
            next = node.take_wrapped();
        }
    }
}

impl<T> Optional<T> {
    /// Detaches the wrapped [`Optional`] if this handle is the last owner of its container.
    fn take_wrapped(&self) -> Option<Self> {
        if Rc::strong_count(&self.slot) != 1 {
            return None;
        }
        let mut slot = self.slot.try_borrow_mut().ok()?;
        if !matches!(*slot, Slot::Wrapped(_)) {
            return None;
        }
        let taken = mem::replace(&mut *slot, Slot::Absent);
        match taken {
            Slot::Wrapped(inner) => Some(inner),
            _ => None,
        }
    }
}
