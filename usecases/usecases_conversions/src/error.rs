//! Conversion Errors
//!
//! Two kinds surface to callers: an unsupported input kind, and input that
//! does not parse or coerce. Lower-layer errors fold into the second kind.

use entities_utilities::ParseBigNumberError;
use infrastructure_bignum_encoding::EncodeError;
use infrastructure_utilities::{CoercionError, JsonTextError};
use thiserror::Error;

/// Errors raised by the conversions
#[derive(Debug, Error)]
pub enum ConversionError {
    /// Input kind outside {boolean, mapping, string/bytes, integer}
    #[error(
        "Unsupported type: '{type_name}'.  Must be one of Boolean, Dictionary, String, or Integer."
    )]
    UnsupportedType { type_name: String },

    /// Input that cannot be parsed or coerced
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Malformed input details
#[derive(Debug, Error)]
pub enum FormatError {
    /// Text is neither valid decimal nor valid hexadecimal
    #[error(transparent)]
    Literal(#[from] ParseBigNumberError),

    /// Bytes could not be coerced to text
    #[error(transparent)]
    Coercion(#[from] CoercionError),

    /// Mapping could not be rendered as text
    #[error(transparent)]
    Json(#[from] JsonTextError),

    /// Integer has no unsigned big-endian form
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

impl ConversionError {
    /// Helper to create unsupported type errors
    pub fn unsupported_type(type_name: impl Into<String>) -> Self {
        Self::UnsupportedType {
            type_name: type_name.into(),
        }
    }

    /// Check whether this is a format error
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }
}

macro_rules! impl_from_format {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ConversionError {
                fn from(err: $ty) -> Self {
                    ConversionError::Format(FormatError::from(err))
                }
            }
        )*
    };
}

impl_from_format!(ParseBigNumberError, CoercionError, JsonTextError, EncodeError);
