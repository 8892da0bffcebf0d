//! Encoding Facades
//!
//! Flat entry points over the conversions. Each accepts anything that
//! converts into the matching input kind, so callers can pass `bool`,
//! `&str`, `Vec<u8>`, machine integers or `BigNumber` directly.

use entities_data_handling::{HexValue, NumericInput, StringOrBytes};
use entities_utilities::BigNumber;
use serde_json::Value;
use usecases_conversions::ConversionError;

/// Convert a boolean, mapping, string/bytes or integer to `0x`-prefixed hex
pub fn to_hex(value: impl Into<HexValue>) -> Result<String, ConversionError> {
    usecases_conversions::to_hex(&value.into())
}

/// Convert a dynamically typed value to `0x`-prefixed hex
///
/// Floats, arrays and null fail with `ConversionError::UnsupportedType`.
pub fn to_hex_dynamic(value: &Value) -> Result<String, ConversionError> {
    usecases_conversions::to_hex_json(value)
}

/// Convert decimal or `0x`/`-0x` hex text, or an integer, to an integer
pub fn to_decimal(value: impl Into<NumericInput>) -> Result<BigNumber, ConversionError> {
    usecases_conversions::to_decimal(&value.into())
}

/// Convert an integer, or text representing one, to `0x`/`-0x` hex
pub fn from_decimal(value: impl Into<NumericInput>) -> Result<String, ConversionError> {
    usecases_conversions::from_decimal(&value.into())
}

/// Decode big-endian bytes (or text, as UTF-8) ignoring leading zero bytes
pub fn decode_big_endian_int(value: impl Into<StringOrBytes>) -> Result<BigNumber, ConversionError> {
    usecases_conversions::decode_big_endian_int(&value.into())
}

/// Encode a non-negative integer as minimal big-endian bytes
pub fn encode_big_endian_int(value: impl Into<BigNumber>) -> Result<Vec<u8>, ConversionError> {
    usecases_conversions::encode_big_endian_int(&value.into())
}
