// Rust
use alloc::{string::String, vec::Vec};

// 3rd-party
use serde::{de::DeserializeOwned, Serialize};

// Local
use crate::{
    error::{Error, Result},
    Optional,
};

impl<T> Optional<T>
where
    T: Serialize,
{
    /// JSON text of the resolved value, or `None` ("no output") when absent.
    pub fn to_json(&self) -> Result<Option<String>> {
        if self.is_absent() {
            return Ok(None);
        }
        serde_json::to_string(self)
            .map(Some)
            .map_err(|e| err!(Error::encode(e)))
    }

    /// JSON bytes of the resolved value, or `None` ("no output") when absent.
    pub fn to_json_vec(&self) -> Result<Option<Vec<u8>>> {
        if self.is_absent() {
            return Ok(None);
        }
        serde_json::to_vec(self)
            .map(Some)
            .map_err(|e| err!(Error::encode(e)))
    }
}

impl<T> Optional<T>
where
    T: DeserializeOwned,
{
    /// Decodes `json` into the existing container following [`Optional::deserialize_into`].
    /// Trailing characters after the JSON value are rejected.
    pub fn update_from_json(&self, json: &[u8]) -> Result<()> {
        let mut deserializer = serde_json::Deserializer::from_slice(json);
        self.deserialize_into(&mut deserializer)
            .map_err(|e| err!(Error::decode(e)))?;
        deserializer.end().map_err(|e| err!(Error::decode(e)))
    }
}
