//! Integer Literal Parsing
//!
//! Parses textual integers into [`BigNumber`] using integer-literal rules:
//! surrounding whitespace is ignored, an optional `+`/`-` sign is accepted,
//! the radix prefix (`0x`, `0o`, `0b`, either case) may be present for
//! bases 16, 8 and 2, and single underscores may separate digits.

use malachite::Integer;
use thiserror::Error;

use crate::big::BigNumber;

/// Integer literal parse errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBigNumberError {
    /// Text is not a valid literal in the requested base
    #[error("invalid literal for base {radix}: {literal:?}")]
    InvalidLiteral { literal: String, radix: u32 },
    /// Radix outside 2..=36
    #[error("unsupported radix {0}")]
    UnsupportedRadix(u32),
}

impl BigNumber {
    /// Parse `text` as an integer in `radix`
    ///
    /// # Examples
    /// ```
    /// use entities_utilities::BigNumber;
    ///
    /// assert_eq!(BigNumber::parse_radix("-0x10", 16).unwrap(), BigNumber::from_i64(-16));
    /// assert_eq!(BigNumber::parse_radix(" 1_000 ", 10).unwrap(), BigNumber::from_i64(1000));
    /// assert!(BigNumber::parse_radix("0x", 16).is_err());
    /// ```
    pub fn parse_radix(text: &str, radix: u32) -> Result<Self, ParseBigNumberError> {
        if !(2..=36).contains(&radix) {
            return Err(ParseBigNumberError::UnsupportedRadix(radix));
        }
        let invalid = || ParseBigNumberError::InvalidLiteral {
            literal: text.to_string(),
            radix,
        };

        let trimmed = text.trim();
        let (negative, unsigned) = if let Some(rest) = trimmed.strip_prefix('-') {
            (true, rest)
        } else if let Some(rest) = trimmed.strip_prefix('+') {
            (false, rest)
        } else {
            (false, trimmed)
        };

        // One underscore may follow the radix prefix
        let digits = match strip_radix_prefix(unsigned, radix) {
            Some(rest) => rest.strip_prefix('_').unwrap_or(rest),
            None => unsigned,
        };

        let base = Integer::from(radix);
        let mut value = Integer::from(0);
        let mut seen_digit = false;
        let mut after_underscore = false;

        for ch in digits.chars() {
            if ch == '_' {
                if !seen_digit || after_underscore {
                    return Err(invalid());
                }
                after_underscore = true;
                continue;
            }
            let digit = ch.to_digit(radix).ok_or_else(invalid)?;
            value = value * &base + Integer::from(digit);
            seen_digit = true;
            after_underscore = false;
        }

        if !seen_digit || after_underscore {
            return Err(invalid());
        }

        if negative {
            value = -value;
        }
        Ok(BigNumber::from_integer(value))
    }
}

fn strip_radix_prefix(text: &str, radix: u32) -> Option<&str> {
    let marker = match radix {
        16 => 'x',
        8 => 'o',
        2 => 'b',
        _ => return None,
    };
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some('0'), Some(c)) if c.to_ascii_lowercase() == marker => Some(chars.as_str()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str, radix: u32) -> Option<i64> {
        BigNumber::parse_radix(text, radix).ok().and_then(|n| n.to_i64())
    }

    #[test]
    fn test_decimal() {
        assert_eq!(parse("16", 10), Some(16));
        assert_eq!(parse("-16", 10), Some(-16));
        assert_eq!(parse("+7", 10), Some(7));
        assert_eq!(parse("007", 10), Some(7));
        assert_eq!(parse("\t42\n", 10), Some(42));
        assert_eq!(parse("1_000_000", 10), Some(1_000_000));
    }

    #[test]
    fn test_hex_with_and_without_prefix() {
        assert_eq!(parse("0x10", 16), Some(16));
        assert_eq!(parse("-0x10", 16), Some(-16));
        assert_eq!(parse("0XfF", 16), Some(255));
        assert_eq!(parse("ff", 16), Some(255));
        assert_eq!(parse("0x_ff", 16), Some(255));
        assert_eq!(parse("0", 16), Some(0));
    }

    #[test]
    fn test_rejects_malformed() {
        for (text, radix) in [
            ("", 10),
            ("   ", 10),
            ("-", 10),
            ("0x", 16),
            ("0x-1", 16),
            ("1__0", 10),
            ("_1", 10),
            ("1_", 10),
            ("0x__1", 16),
            ("12a", 10),
            ("0x10", 10),
            ("- 5", 10),
            ("1.5", 10),
        ] {
            assert!(
                BigNumber::parse_radix(text, radix).is_err(),
                "expected {:?} to be rejected in base {}",
                text,
                radix
            );
        }
    }

    #[test]
    fn test_error_carries_literal() {
        let err = BigNumber::parse_radix("0xzz", 16).unwrap_err();
        assert_eq!(
            err,
            ParseBigNumberError::InvalidLiteral {
                literal: "0xzz".to_string(),
                radix: 16
            }
        );
        assert!(err.to_string().contains("0xzz"));
    }

    #[test]
    fn test_unsupported_radix() {
        assert_eq!(
            BigNumber::parse_radix("1", 37),
            Err(ParseBigNumberError::UnsupportedRadix(37))
        );
    }

    #[test]
    fn test_beyond_machine_width() {
        let big = BigNumber::parse_radix("0x1_0000_0000_0000_0000", 16).unwrap();
        assert_eq!(big.to_u64(), None);
        assert_eq!(big.to_string(), "18446744073709551616");
    }
}
