//! Decimal Conversions Module
//!
//! Integer values to and from their textual forms.
//!
//! - [`to_decimal`]: decimal or `0x`/`-0x` hexadecimal text, or an integer,
//!   into an integer
//! - [`from_decimal`]: the same inputs into `0x`-prefixed hex text
//!
//! Both apply one normalisation: bytes are coerced to text first, then the
//! base is picked by [`parse_numeric_text`](crate::numeric_text::parse_numeric_text).

use entities_data_handling::NumericInput;
use entities_utilities::BigNumber;
use infrastructure_utilities::force_text;

use crate::error::ConversionError;
use crate::numeric_text::parse_numeric_text;

/// Convert text or an integer to an integer
///
/// Integers are returned unchanged.
///
/// # Examples
/// ```
/// use entities_data_handling::NumericInput;
/// use usecases_conversions::to_decimal;
///
/// assert_eq!(to_decimal(&NumericInput::from("0x10")).unwrap().to_i64(), Some(16));
/// assert_eq!(to_decimal(&NumericInput::from("-0x10")).unwrap().to_i64(), Some(-16));
/// assert_eq!(to_decimal(&NumericInput::from("16")).unwrap().to_i64(), Some(16));
/// ```
pub fn to_decimal(value: &NumericInput) -> Result<BigNumber, ConversionError> {
    match value {
        NumericInput::Integer(number) => Ok(number.clone()),
        NumericInput::Text(raw) => {
            let text = force_text(raw)?;
            parse_numeric_text(&text).map_err(|err| {
                log::debug!("to_decimal rejected {:?}: {}", text, err);
                ConversionError::from(err)
            })
        }
    }
}

/// Convert text or an integer to `0x`-prefixed hex text
///
/// Hex input is parsed and re-rendered, which is lossless; the result is
/// always lowercase.
///
/// # Examples
/// ```
/// use entities_data_handling::NumericInput;
/// use usecases_conversions::from_decimal;
///
/// assert_eq!(from_decimal(&NumericInput::from(255i64)).unwrap(), "0xff");
/// assert_eq!(from_decimal(&NumericInput::from("-255")).unwrap(), "-0xff");
/// assert_eq!(from_decimal(&NumericInput::from("0xFF")).unwrap(), "0xff");
/// ```
pub fn from_decimal(value: &NumericInput) -> Result<String, ConversionError> {
    let number = to_decimal(value)?;
    Ok(integer_to_hex(&number))
}

/// Render an integer as `0x`-prefixed lowercase hex
///
/// Negative values render as `-0x` followed by the magnitude. The output
/// never carries a trailing type suffix.
pub fn integer_to_hex(number: &BigNumber) -> String {
    let digits = number.to_hex_string();
    match digits.strip_prefix('-') {
        Some(magnitude) => format!("-0x{}", magnitude),
        None => format!("0x{}", digits),
    }
}
