//! Common Encoding/Decoding Errors
//!
//! Error types shared by the codecs in this crate.

use thiserror::Error;

/// Encoding errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Negative values have no unsigned big-endian form
    #[error("cannot serialize negative integer {0}")]
    NegativeValue(String),
}

/// Decoding errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Serialized integer starts with a zero byte
    #[error("invalid serialization (not minimal length): {0}")]
    NotMinimal(String),
}
