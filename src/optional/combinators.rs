//! Combinators of [`Optional`].
//!
//! Every combinator resolves the [`Optional`] it is called on to its innermost container first, so
//! a plain [`Optional`] and one wrapped any number of times behave the same. Combinators that
//! upgrade absence to presence install the fallback value into that innermost container, which
//! keeps every alias in sync.
//!
//! Like `DDML` commands, mutating combinators return the receiver so calls can be chained.

use super::{
    flatten::{FlattenPolicy, SkipZero},
    Optional, Slot,
};

impl<T> Optional<T> {
    /// Passes the resolved value to `visit`, propagating its failure. Does nothing when absent.
    pub fn exists<E, F>(&self, visit: F) -> Result<(), E>
    where
        F: FnOnce(&T) -> Result<(), E>,
    {
        match self.innermost().slot().value() {
            Some(value) => visit(value),
            None => Ok(()),
        }
    }

    /// Mutates the resolved value in place. Does nothing when absent.
    pub fn map<F>(&self, mutate: F) -> &Self
    where
        F: FnOnce(&mut T),
    {
        if let Some(value) = self.innermost().slot_mut().value_mut() {
            mutate(value);
        }
        self
    }

    /// Like [`Optional::map`], but when absent installs `fallback()` as the new value first. The
    /// [`Optional`] is always present afterwards.
    pub fn map_or_else<F, D>(&self, mutate: F, fallback: D) -> &Self
    where
        F: FnOnce(&mut T),
        D: FnOnce() -> T,
    {
        let node = self.innermost();
        if !node.slot().is_value() {
            let value = fallback();
            *node.slot_mut() = Slot::Value(value);
        }
        if let Some(value) = node.slot_mut().value_mut() {
            mutate(value);
        }
        self
    }

    /// Flattening form of [`Optional::map`] under the [`SkipZero`] policy: a value resolved through
    /// wrapping that equals `T::default()` is treated as absent.
    pub fn flat_map<F>(&self, mutate: F) -> &Self
    where
        T: Default + PartialEq,
        F: FnOnce(&mut T),
    {
        self.flat_map_with(SkipZero, mutate)
    }

    /// Flattening form of [`Optional::map_or_else`] under the [`SkipZero`] policy.
    pub fn flat_map_or_else<F, D>(&self, mutate: F, fallback: D) -> &Self
    where
        T: Default + PartialEq,
        F: FnOnce(&mut T),
        D: FnOnce() -> T,
    {
        self.flat_map_or_else_with(SkipZero, mutate, fallback)
    }

    /// [`Optional::map`] where a wrapped [`Optional`] only hands its resolved value to `mutate` if
    /// `policy` admits it.
    pub fn flat_map_with<P, F>(&self, policy: P, mutate: F) -> &Self
    where
        P: FlattenPolicy<T>,
        F: FnOnce(&mut T),
    {
        let wrapped = self.is_wrapped();
        if let Some(value) = self.innermost().slot_mut().value_mut() {
            if !wrapped || policy.admits(value) {
                mutate(value);
            }
        }
        self
    }

    /// [`Optional::map_or_else`] where a wrapped [`Optional`] whose resolved value is not admitted by
    /// `policy` gets it replaced with `fallback()`.
    pub fn flat_map_or_else_with<P, F, D>(&self, policy: P, mutate: F, fallback: D) -> &Self
    where
        P: FlattenPolicy<T>,
        F: FnOnce(&mut T),
        D: FnOnce() -> T,
    {
        let wrapped = self.is_wrapped();
        let node = self.innermost();
        let admitted = match node.slot().value() {
            Some(value) => !wrapped || policy.admits(value),
            None => false,
        };
        if !admitted {
            let value = fallback();
            *node.slot_mut() = Slot::Value(value);
        }
        if let Some(value) = node.slot_mut().value_mut() {
            mutate(value);
        }
        self
    }

    /// A copy of the resolved value, or `None` when absent.
    pub fn get(&self) -> Option<T>
    where
        T: Clone,
    {
        self.innermost().slot().value().cloned()
    }

    /// The resolved value, or `default` when absent. Never changes the [`Optional`].
    pub fn value_or(&self, default: T) -> T
    where
        T: Clone,
    {
        self.get().unwrap_or(default)
    }

    /// The resolved value. When absent, `fallback()` is installed as the new value and returned.
    pub fn value_or_else<D>(&self, fallback: D) -> T
    where
        T: Clone,
        D: FnOnce() -> T,
    {
        let node = self.innermost();
        if let Some(value) = node.get() {
            return value;
        }
        let value = fallback();
        *node.slot_mut() = Slot::Value(value.clone());
        value
    }
}
