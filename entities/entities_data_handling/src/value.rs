//! Value Kinds Module
//!
//! The closed set of value kinds the conversions dispatch on.
//!
//! `HexValue` is everything the hex encoder accepts; `NumericInput` is
//! everything the decimal decoder and the hex-from-decimal converter accept.
//! Both are checked exhaustively at compile time.

use entities_utilities::BigNumber;

use crate::text::StringOrBytes;

/// Key-value mapping with unique string keys
///
/// Values may be any JSON-representable value, including nested mappings.
pub type Mapping = serde_json::Map<String, serde_json::Value>;

/// Input to the hex encoder
#[derive(Clone, Debug, PartialEq)]
pub enum HexValue {
    /// Boolean
    Bool(bool),
    /// Key-value mapping, encoded through its sorted-key text form
    Mapping(Mapping),
    /// Text or raw bytes, encoded byte for byte
    Text(StringOrBytes),
    /// Arbitrary precision signed integer
    Integer(BigNumber),
}

impl HexValue {
    /// Name of the kind, as used in log output
    pub fn kind(&self) -> &'static str {
        match self {
            HexValue::Bool(_) => "bool",
            HexValue::Mapping(_) => "mapping",
            HexValue::Text(StringOrBytes::Str(_)) => "str",
            HexValue::Text(StringOrBytes::Bytes(_)) => "bytes",
            HexValue::Integer(_) => "int",
        }
    }
}

/// Input to the decimal decoder and the hex-from-decimal converter
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NumericInput {
    /// Decimal or `0x`/`-0x` prefixed hexadecimal text
    Text(StringOrBytes),
    /// Integer value
    Integer(BigNumber),
}

macro_rules! impl_from_text {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for HexValue {
                fn from(value: $ty) -> Self {
                    HexValue::Text(StringOrBytes::from(value))
                }
            }

            impl From<$ty> for NumericInput {
                fn from(value: $ty) -> Self {
                    NumericInput::Text(StringOrBytes::from(value))
                }
            }
        )*
    };
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for HexValue {
                fn from(value: $ty) -> Self {
                    HexValue::Integer(BigNumber::from(value))
                }
            }

            impl From<$ty> for NumericInput {
                fn from(value: $ty) -> Self {
                    NumericInput::Integer(BigNumber::from(value))
                }
            }
        )*
    };
}

impl_from_text!(&str, String, &[u8], Vec<u8>, StringOrBytes);
impl_from_integer!(i32, u32, i64, u64, BigNumber);

impl<const N: usize> From<&[u8; N]> for HexValue {
    fn from(value: &[u8; N]) -> Self {
        HexValue::Text(StringOrBytes::from(value))
    }
}

impl<const N: usize> From<&[u8; N]> for NumericInput {
    fn from(value: &[u8; N]) -> Self {
        NumericInput::Text(StringOrBytes::from(value))
    }
}

impl From<bool> for HexValue {
    fn from(value: bool) -> Self {
        HexValue::Bool(value)
    }
}

impl From<Mapping> for HexValue {
    fn from(value: Mapping) -> Self {
        HexValue::Mapping(value)
    }
}
