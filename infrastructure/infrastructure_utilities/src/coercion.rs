//! Text/Byte Coercion
//!
//! Normalises a [`StringOrBytes`] into one canonical form. Text becomes
//! bytes through UTF-8, which cannot fail; bytes become text only when they
//! are valid UTF-8.

use std::borrow::Cow;

use entities_data_handling::StringOrBytes;
use thiserror::Error;

/// Coercion errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoercionError {
    /// Bytes do not decode as UTF-8
    #[error("bytes are not valid UTF-8 text: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// Coerce to bytes
pub fn force_bytes(value: &StringOrBytes) -> &[u8] {
    value.as_bytes()
}

/// Coerce to text
///
/// Borrows in both cases; no allocation happens.
pub fn force_text(value: &StringOrBytes) -> Result<Cow<'_, str>, CoercionError> {
    match value {
        StringOrBytes::Str(s) => Ok(Cow::Borrowed(s.as_str())),
        StringOrBytes::Bytes(b) => {
            let text = std::str::from_utf8(b).map_err(|e| {
                log::debug!("rejecting {} bytes that are not UTF-8", b.len());
                CoercionError::from(e)
            })?;
            Ok(Cow::Borrowed(text))
        }
    }
}
