//! Hex Utilities
//!
//! `0x`-prefixed hexadecimal text for byte sequences. Encoding always
//! produces lowercase digits; decoding accepts either case.

use thiserror::Error;

/// Hex decoding errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HexDecodeError {
    /// Odd length or a non-hex digit
    #[error("invalid hex string {input:?}: {source}")]
    Invalid {
        input: String,
        #[source]
        source: hex::FromHexError,
    },
}

/// Hex utilities for prefixed hex text
pub struct HexUtils;

impl HexUtils {
    /// Encode bytes as lowercase hex with a `0x` prefix
    ///
    /// # Examples
    /// ```
    /// use infrastructure_utilities::HexUtils;
    ///
    /// assert_eq!(HexUtils::encode_hex(b"dog"), "0x646f67");
    /// assert_eq!(HexUtils::encode_hex(b""), "0x");
    /// ```
    pub fn encode_hex(bytes: &[u8]) -> String {
        format!("0x{}", hex::encode(bytes))
    }

    /// Decode hex text, with or without a `0x`/`0X` prefix
    ///
    /// # Examples
    /// ```
    /// use infrastructure_utilities::HexUtils;
    ///
    /// assert_eq!(HexUtils::decode_hex("0x646F67").unwrap(), b"dog".to_vec());
    /// assert!(HexUtils::decode_hex("0x123").is_err());
    /// ```
    pub fn decode_hex(text: &str) -> Result<Vec<u8>, HexDecodeError> {
        hex::decode(Self::remove_0x_prefix(text)).map_err(|source| HexDecodeError::Invalid {
            input: text.to_string(),
            source,
        })
    }

    /// Check for a leading `0x` or `0X`
    pub fn is_0x_prefixed(text: &str) -> bool {
        text.starts_with("0x") || text.starts_with("0X")
    }

    /// Add a `0x` prefix unless one is already present
    pub fn add_0x_prefix(text: &str) -> String {
        if Self::is_0x_prefixed(text) {
            text.to_string()
        } else {
            format!("0x{}", text)
        }
    }

    /// Remove a leading `0x`/`0X` if present
    pub fn remove_0x_prefix(text: &str) -> &str {
        if Self::is_0x_prefixed(text) {
            &text[2..]
        } else {
            text
        }
    }
}
