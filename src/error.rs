//! Optional Errors

// 3rd-party
use thiserror_no_std::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
/// Error type of the JSON conveniences of the crate.
pub enum Error {
    #[error("failed to {0} JSON: {1}")]
    Encoding(&'static str, serde_json::Error),
}

impl Error {
    pub(crate) fn encode(error: serde_json::Error) -> Self {
        Self::Encoding("encode", error)
    }

    pub(crate) fn decode(error: serde_json::Error) -> Self {
        Self::Encoding("decode", error)
    }
}
