//! Binary encoding of models
//!
//! Models travel as JSON bytes. Absent optional fields are left out of the
//! encoded object rather than written as `null`.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors raised while encoding or decoding a model
#[derive(Debug, Error)]
pub enum CodecError {
    /// The value graph could not be encoded
    #[error("failed to encode: {0}")]
    Encode(#[source] serde_json::Error),

    /// The bytes are not well-formed or do not match the model's shape
    #[error("failed to decode: {0}")]
    Decode(#[source] serde_json::Error),
}

/// JSON byte encoding shared by every model
pub trait BinaryCodec: Serialize + DeserializeOwned {
    /// Encode as compact JSON
    ///
    /// Fails with [`CodecError::Encode`] when the value has no JSON form,
    /// e.g. a map keyed by something other than strings.
    fn to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(self).map_err(CodecError::Encode)
    }

    /// Encode as indented JSON
    fn to_bytes_pretty(&self) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec_pretty(self).map_err(CodecError::Encode)
    }

    /// Decode a fresh value
    fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        serde_json::from_slice(bytes).map_err(CodecError::Decode)
    }

    /// Replace `self` with the value decoded from `bytes`
    ///
    /// On failure `self` is left untouched.
    fn replace_from_bytes(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        *self = Self::from_bytes(bytes)?;
        Ok(())
    }
}

impl<T: Serialize + DeserializeOwned> BinaryCodec for T {}
