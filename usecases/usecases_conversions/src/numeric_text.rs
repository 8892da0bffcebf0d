//! Numeric Text Module
//!
//! Decides the base of a textual integer. Text starting with lowercase `0x`
//! or `-0x` is hexadecimal; anything else is decimal. `0X10` is therefore
//! decimal, and malformed.

use entities_utilities::{BigNumber, ParseBigNumberError};

/// Check for a lowercase `0x` or `-0x` prefix
pub fn is_hex_literal(text: &str) -> bool {
    text.starts_with("0x") || text.starts_with("-0x")
}

/// Parse decimal or `0x`/`-0x` prefixed hexadecimal text
pub fn parse_numeric_text(text: &str) -> Result<BigNumber, ParseBigNumberError> {
    let radix = if is_hex_literal(text) { 16 } else { 10 };
    log::trace!("parsing {:?} in base {}", text, radix);
    BigNumber::parse_radix(text, radix)
}
