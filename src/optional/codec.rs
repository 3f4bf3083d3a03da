// 3rd-party
use serde::{
    de::{Deserialize, Deserializer, IgnoredAny},
    ser::{Serialize, Serializer},
};

// Local
use super::{Optional, Slot};

/// Serializes the resolved value with its own encoding; the wrapping layers are never visible.
///
/// An absent [`Optional`] serializes as `none`. Struct fields that must be omitted when absent
/// declare `#[serde(default, skip_serializing_if = "Optional::is_absent")]`.
impl<T> Serialize for Optional<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.innermost().slot().value() {
            Some(value) => value.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }
}

/// Deserializes a fresh, unwrapped [`Optional`]: `none` is absent, anything else decodes into `T`.
impl<'de, T> Deserialize<'de> for Optional<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Optional::from_option)
    }
}

impl<T> Optional<T> {
    /// Decodes into the existing container instead of building a new [`Optional`].
    ///
    /// - wrapped: decodes into the innermost container, mutating the value shared with every alias,
    ///   and marks it present.
    /// - present: decodes into its slot.
    /// - absent: consumes and discards the input, reports success and stays absent.
    ///
    /// Decoding errors are returned unchanged and leave the [`Optional`] untouched.
    pub fn deserialize_into<'de, D>(&self, deserializer: D) -> Result<(), D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        if !self.is_wrapped() && !self.slot().is_value() {
            IgnoredAny::deserialize(deserializer)?;
            return Ok(());
        }
        let value = T::deserialize(deserializer)?;
        *self.innermost().slot_mut() = Slot::Value(value);
        Ok(())
    }
}
