//! Hex Encoder Module
//!
//! Converts any supported value kind into `0x`-prefixed lowercase hex.
//!
//! | Kind | Result |
//! |---|---|
//! | Boolean | `0x1` / `0x0` |
//! | Mapping | hex of the UTF-8 bytes of its sorted-key JSON text |
//! | String/bytes | hex of the bytes (UTF-8 for text) |
//! | Integer | same as [`from_decimal`](crate::decimal::from_decimal) |

use entities_data_handling::{HexValue, StringOrBytes};
use entities_utilities::BigNumber;
use infrastructure_utilities::{force_bytes, mapping_to_sorted_json, HexUtils};
use serde_json::Value;

use crate::decimal::integer_to_hex;
use crate::error::ConversionError;

/// Convert a value to `0x`-prefixed hex
///
/// # Examples
/// ```
/// use entities_data_handling::HexValue;
/// use usecases_conversions::to_hex;
///
/// assert_eq!(to_hex(&HexValue::from(true)).unwrap(), "0x1");
/// assert_eq!(to_hex(&HexValue::from("dog")).unwrap(), "0x646f67");
/// assert_eq!(to_hex(&HexValue::from(255i64)).unwrap(), "0xff");
/// ```
pub fn to_hex(value: &HexValue) -> Result<String, ConversionError> {
    log::trace!("to_hex: encoding {} value", value.kind());

    match value {
        HexValue::Bool(true) => Ok("0x1".to_string()),
        HexValue::Bool(false) => Ok("0x0".to_string()),
        HexValue::Mapping(mapping) => {
            let text = mapping_to_sorted_json(mapping)?;
            Ok(HexUtils::encode_hex(text.as_bytes()))
        }
        HexValue::Text(text) => Ok(HexUtils::encode_hex(force_bytes(text))),
        HexValue::Integer(number) => Ok(integer_to_hex(number)),
    }
}

/// Classify a dynamically typed JSON value into a [`HexValue`]
///
/// Numbers must be integral. Floats, arrays and null have no hex form and
/// fail with [`ConversionError::UnsupportedType`], naming the kind found.
pub fn hex_value_from_json(value: &Value) -> Result<HexValue, ConversionError> {
    match value {
        Value::Bool(b) => Ok(HexValue::Bool(*b)),
        Value::Object(mapping) => Ok(HexValue::Mapping(mapping.clone())),
        Value::String(s) => Ok(HexValue::Text(StringOrBytes::Str(s.clone()))),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(HexValue::Integer(BigNumber::from_i64(i)))
            } else if let Some(u) = n.as_u64() {
                Ok(HexValue::Integer(BigNumber::from_u64(u)))
            } else {
                Err(unsupported("float"))
            }
        }
        Value::Array(_) => Err(unsupported("list")),
        Value::Null => Err(unsupported("null")),
    }
}

/// Convert a dynamically typed JSON value to `0x`-prefixed hex
pub fn to_hex_json(value: &Value) -> Result<String, ConversionError> {
    to_hex(&hex_value_from_json(value)?)
}

fn unsupported(type_name: &str) -> ConversionError {
    log::debug!("to_hex: unsupported {} value", type_name);
    ConversionError::unsupported_type(type_name)
}
