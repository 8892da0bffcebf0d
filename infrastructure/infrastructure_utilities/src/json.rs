//! Sorted-Key JSON Text
//!
//! Deterministic textual form of a mapping, used before hex encoding it.
//!
//! ## Format
//!
//! - Object keys sorted ascending at every nesting level
//! - `", "` between items, `": "` between key and value
//! - Every character outside printable ASCII (`0x20..=0x7e`) escaped as
//!   lowercase `\uXXXX`, using surrogate pairs above the BMP
//! - Floats in shortest round-trip form, positional when the decimal point
//!   falls within `-4 < exp <= 16` (always with a fractional part, `2.0`),
//!   otherwise scientific with a signed two-digit exponent (`1e-05`, `1e+16`)
//!
//! Key order of the input never affects the output, regardless of whether
//! `serde_json` was built with `preserve_order`.

use std::io;

use entities_data_handling::Mapping;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::ser::Formatter;
use serde_json::Value;
use thiserror::Error;

/// JSON text errors
#[derive(Debug, Error)]
pub enum JsonTextError {
    /// Serializer failure
    #[error("failed to serialize mapping: {0}")]
    Serialize(#[from] serde_json::Error),
    /// Serializer emitted bytes that are not UTF-8
    #[error("serialized mapping is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Render a mapping as sorted-key JSON text
///
/// # Examples
/// ```
/// use infrastructure_utilities::json::mapping_to_sorted_json;
/// use serde_json::json;
///
/// let mapping = json!({"b": 1, "a": [true, null]}).as_object().cloned().unwrap();
/// assert_eq!(mapping_to_sorted_json(&mapping).unwrap(), r#"{"a": [true, null], "b": 1}"#);
/// ```
pub fn mapping_to_sorted_json(mapping: &Mapping) -> Result<String, JsonTextError> {
    render(&SortedObject(mapping))
}

/// Render any JSON value as sorted-key JSON text
pub fn to_sorted_json(value: &Value) -> Result<String, JsonTextError> {
    render(&SortedKeys(value))
}

fn render<T: Serialize>(value: &T) -> Result<String, JsonTextError> {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, CanonicalFormatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}

struct SortedKeys<'a>(&'a Value);

struct SortedObject<'a>(&'a Mapping);

impl Serialize for SortedKeys<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Value::Object(map) => SortedObject(map).serialize(serializer),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(&SortedKeys(item))?;
                }
                seq.end()
            }
            other => other.serialize(serializer),
        }
    }
}

impl Serialize for SortedObject<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut entries: Vec<(&String, &Value)> = self.0.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in entries {
            map.serialize_entry(key, &SortedKeys(value))?;
        }
        map.end()
    }
}

struct CanonicalFormatter;

impl Formatter for CanonicalFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(float_repr(value).as_bytes())
    }

    // Quotes, backslashes and control characters arrive through
    // write_char_escape; everything else comes through here.
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        for ch in fragment.chars() {
            if (' '..='~').contains(&ch) {
                writer.write_all(&[ch as u8])?;
            } else {
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

fn float_repr(value: f64) -> String {
    // `{:e}` yields the shortest round-trip digits, e.g. `-1.25e-7`
    let formatted = format!("{:e}", value);
    let (mantissa, exponent) = formatted.split_once('e').unwrap_or((formatted.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    // Position of the decimal point relative to the first digit
    let point = exponent + 1;

    if point <= -4 || point > 16 {
        let (lead, rest) = digits.split_at(1);
        let fraction = if rest.is_empty() {
            String::new()
        } else {
            format!(".{}", rest)
        };
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        format!("{}{}{}e{}{:02}", sign, lead, fraction, exp_sign, exponent.abs())
    } else if point <= 0 {
        format!("{}0.{}{}", sign, "0".repeat(point.unsigned_abs() as usize), digits)
    } else {
        let point = point as usize;
        if point >= digits.len() {
            format!("{}{}{}.0", sign, digits, "0".repeat(point - digits.len()))
        } else {
            format!("{}{}.{}", sign, &digits[..point], &digits[point..])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mapping(value: Value) -> Mapping {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_sorted_keys_and_separators() {
        let text = mapping_to_sorted_json(&mapping(json!({"b": 1, "a": 2}))).unwrap();
        assert_eq!(text, r#"{"a": 2, "b": 1}"#);
    }

    #[test]
    fn test_nested_objects_are_sorted() {
        let value = json!({"z": {"y": 1, "x": [{"d": 0, "c": 1}]}, "a": "s"});
        assert_eq!(
            to_sorted_json(&value).unwrap(),
            r#"{"a": "s", "z": {"x": [{"c": 1, "d": 0}], "y": 1}}"#
        );
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(mapping_to_sorted_json(&Mapping::new()).unwrap(), "{}");
        assert_eq!(to_sorted_json(&json!({"a": [], "b": {}})).unwrap(), r#"{"a": [], "b": {}}"#);
    }

    #[test]
    fn test_scalars() {
        let value = json!({"f": 1.5, "n": null, "t": true, "i": -7});
        assert_eq!(
            to_sorted_json(&value).unwrap(),
            r#"{"f": 1.5, "i": -7, "n": null, "t": true}"#
        );
    }

    #[test]
    fn test_float_spelling() {
        let cases = [
            (1e16, "1e+16"),
            (1e15, "1000000000000000.0"),
            (0.00001, "1e-05"),
            (0.0001, "0.0001"),
            (2.0, "2.0"),
            (0.0, "0.0"),
            (-0.0, "-0.0"),
            (123.456, "123.456"),
            (-2.5e-7, "-2.5e-07"),
            (1.7976931348623157e308, "1.7976931348623157e+308"),
            (5e-324, "5e-324"),
        ];
        for (value, expected) in cases {
            assert_eq!(float_repr(value), expected, "spelling of {:e}", value);
        }
    }

    #[test]
    fn test_floats_inside_mapping() {
        let value = json!({"b": 0.00001, "a": 1e16, "c": [0.5, 100.0]});
        assert_eq!(
            to_sorted_json(&value).unwrap(),
            r#"{"a": 1e+16, "b": 1e-05, "c": [0.5, 100.0]}"#
        );
    }

    #[test]
    fn test_non_ascii_is_escaped() {
        assert_eq!(to_sorted_json(&json!("\u{e9}")).unwrap(), r#""\u00e9""#);
        assert_eq!(to_sorted_json(&json!("\u{1f600}")).unwrap(), r#""\ud83d\ude00""#);
        assert_eq!(to_sorted_json(&json!("\u{7f}")).unwrap(), r#""\u007f""#);
        assert_eq!(to_sorted_json(&json!({"ключ": 1})).unwrap(), r#"{"\u043a\u043b\u044e\u0447": 1}"#);
    }

    #[test]
    fn test_control_and_quote_escapes() {
        assert_eq!(to_sorted_json(&json!("a\"b\\c\n")).unwrap(), r#""a\"b\\c\n""#);
        assert_eq!(to_sorted_json(&json!("\u{1}")).unwrap(), r#""\u0001""#);
    }
}
