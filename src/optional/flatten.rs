/// Decides whether a value resolved through wrapping is handed to a flattening combinator.
///
/// Only wrapped [`Optional`](super::Optional)s consult the policy; plain ones always pass their
/// value on. A value that is not admitted is treated as absent: `flat_map` skips its callback and
/// `flat_map_or_else` replaces the value with its fallback.
pub trait FlattenPolicy<T> {
    fn admits(&self, value: &T) -> bool;
}

/// Treats a resolved value equal to `T::default()` as absent.
///
/// This is the policy used by `flat_map` and `flat_map_or_else`. A value deliberately set to the
/// zero value (an empty string, `0`, ...) is indistinguishable from absence under it; use
/// [`KeepZero`] where that matters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SkipZero;

impl<T> FlattenPolicy<T> for SkipZero
where
    T: Default + PartialEq,
{
    fn admits(&self, value: &T) -> bool {
        *value != T::default()
    }
}

/// Admits every resolved value, zero values included.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct KeepZero;

impl<T> FlattenPolicy<T> for KeepZero {
    fn admits(&self, _value: &T) -> bool {
        true
    }
}

impl<T, F> FlattenPolicy<T> for F
where
    F: Fn(&T) -> bool,
{
    fn admits(&self, value: &T) -> bool {
        self(value)
    }
}
