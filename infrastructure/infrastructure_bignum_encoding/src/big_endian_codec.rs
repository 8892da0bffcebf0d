//! Big-Endian Integer Codec Module
//!
//! Unsigned integers as minimal big-endian byte strings.
//!
//! ## Format
//!
//! - Zero is the empty byte string
//! - Any other value is its big-endian magnitude with no leading zero byte
//!
//! Decoding rejects a leading zero byte, so every value has exactly one
//! serialization. Callers holding padded input strip the padding first
//! (see [`BigEndianIntCodec::decode_padded`]).

use entities_utilities::BigNumber;

use crate::common::{DecodeError, EncodeError};

/// Big-endian unsigned integer codec
pub struct BigEndianIntCodec;

impl BigEndianIntCodec {
    /// Encode a non-negative integer
    pub fn encode(value: &BigNumber) -> Result<Vec<u8>, EncodeError> {
        value.to_be_bytes().ok_or_else(|| {
            log::debug!("refusing to serialize negative integer {}", value);
            EncodeError::NegativeValue(value.to_string())
        })
    }

    /// Decode a minimal serialization
    pub fn decode(data: &[u8]) -> Result<BigNumber, DecodeError> {
        if data.first() == Some(&0) {
            return Err(DecodeError::NotMinimal(hex::encode(data)));
        }
        Ok(BigNumber::from_be_bytes(data))
    }

    /// Strip leading zero bytes, then decode
    ///
    /// Never fails: all-zero and empty input both decode to zero.
    pub fn decode_padded(data: &[u8]) -> BigNumber {
        let start = data.iter().position(|&b| b != 0).unwrap_or(data.len());
        BigNumber::from_be_bytes(&data[start..])
    }
}
