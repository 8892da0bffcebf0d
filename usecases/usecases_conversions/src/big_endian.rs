//! Big-Endian Integer Module
//!
//! Decodes big-endian byte sequences, padded with any number of leading
//! zero bytes, into unsigned integers; and encodes the reverse.

use entities_data_handling::StringOrBytes;
use entities_utilities::BigNumber;
use infrastructure_bignum_encoding::BigEndianIntCodec;
use infrastructure_utilities::force_bytes;

use crate::error::ConversionError;

/// Decode a big-endian unsigned integer, ignoring leading zero bytes
///
/// Text is coerced to its UTF-8 bytes first. Empty and all-zero input
/// decode to zero.
///
/// # Examples
/// ```
/// use entities_data_handling::StringOrBytes;
/// use usecases_conversions::decode_big_endian_int;
///
/// assert_eq!(decode_big_endian_int(&StringOrBytes::from(b"\x00\x00\x01")).unwrap().to_i64(), Some(1));
/// assert!(decode_big_endian_int(&StringOrBytes::from(b"")).unwrap().is_zero());
/// ```
pub fn decode_big_endian_int(value: &StringOrBytes) -> Result<BigNumber, ConversionError> {
    let bytes = force_bytes(value);
    Ok(BigEndianIntCodec::decode_padded(bytes))
}

/// Encode a non-negative integer as minimal big-endian bytes
///
/// Zero encodes to an empty byte string; negative values are a format error.
pub fn encode_big_endian_int(value: &BigNumber) -> Result<Vec<u8>, ConversionError> {
    Ok(BigEndianIntCodec::encode(value)?)
}
