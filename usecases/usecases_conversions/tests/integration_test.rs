//! Integration tests for usecases_conversions crate
//!
//! These tests verify the observable properties of the four conversions
//! across representative value ranges, including values beyond machine width.

use entities_data_handling::{BigNumber, HexValue, Mapping, NumericInput, StringOrBytes};
use serde_json::json;
use usecases_conversions::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sample_integers() -> Vec<BigNumber> {
    vec![
        BigNumber::zero(),
        BigNumber::from_i64(1),
        BigNumber::from_i64(15),
        BigNumber::from_i64(16),
        BigNumber::from_i64(255),
        BigNumber::from_i64(256),
        BigNumber::from_i64(i64::MAX),
        BigNumber::from_u64(u64::MAX),
        BigNumber::parse_radix("115792089237316195423570985008687907853269984665640564039457584007913129639935", 10)
            .unwrap(),
    ]
}

#[test]
fn test_to_decimal_inverts_from_decimal_for_nonnegative() {
    init_logging();
    for n in sample_integers() {
        let hex = from_decimal(&NumericInput::Integer(n.clone())).unwrap();
        let back = to_decimal(&NumericInput::from(hex.as_str())).unwrap();
        assert_eq!(back, n, "roundtrip through {}", hex);
    }
}

#[test]
fn test_decimal_text_and_integer_inputs_agree() {
    init_logging();
    let mut values = sample_integers();
    let negatives: Vec<BigNumber> = values
        .iter()
        .filter(|n| !n.is_zero())
        .map(|n| BigNumber::parse_radix(&format!("-{}", n), 10).unwrap())
        .collect();
    values.extend(negatives);

    for n in values {
        let from_integer = from_decimal(&NumericInput::Integer(n.clone())).unwrap();
        let from_text = from_decimal(&NumericInput::from(n.to_string())).unwrap();
        assert_eq!(from_integer, from_text);
        assert_eq!(n.is_negative(), from_integer.starts_with("-0x"));
    }
}

#[test]
fn test_literal_examples() {
    init_logging();
    assert_eq!(to_hex(&HexValue::from(true)).unwrap(), "0x1");
    assert_eq!(to_hex(&HexValue::from(false)).unwrap(), "0x0");
    assert_eq!(to_hex(&HexValue::from("dog")).unwrap(), "0x646f67");
    assert_eq!(from_decimal(&NumericInput::from(255i64)).unwrap(), "0xff");

    assert_eq!(to_decimal(&NumericInput::from("0x10")).unwrap(), BigNumber::from_i64(16));
    assert_eq!(to_decimal(&NumericInput::from("-0x10")).unwrap(), BigNumber::from_i64(-16));
    assert_eq!(to_decimal(&NumericInput::from("16")).unwrap(), BigNumber::from_i64(16));
}

#[test]
fn test_mapping_hex_is_order_independent() {
    init_logging();
    let first: Mapping = json!({"b": 1, "a": 2}).as_object().cloned().unwrap();
    let mut second = Mapping::new();
    second.insert("a".to_string(), json!(2));
    second.insert("b".to_string(), json!(1));

    assert_eq!(
        to_hex(&HexValue::Mapping(first)).unwrap(),
        to_hex(&HexValue::Mapping(second)).unwrap()
    );
}

#[test]
fn test_decode_big_endian_int_examples() {
    init_logging();
    let cases: Vec<(&[u8], i64)> = vec![
        (&b"\x00\x00\x01"[..], 1),
        (&b"\x00\x00\x00"[..], 0),
        (&b""[..], 0),
    ];
    for (bytes, expected) in cases {
        let decoded = decode_big_endian_int(&StringOrBytes::from(bytes)).unwrap();
        assert_eq!(decoded.to_i64(), Some(expected));
    }
}

#[test]
fn test_big_endian_roundtrip() {
    init_logging();
    for n in sample_integers() {
        let bytes = encode_big_endian_int(&n).unwrap();
        let mut padded = vec![0u8; 4];
        padded.extend_from_slice(&bytes);
        assert_eq!(decode_big_endian_int(&StringOrBytes::from(padded)).unwrap(), n);
    }
}

#[test]
fn test_unsupported_dynamic_kinds() {
    init_logging();
    let err = to_hex_json(&json!(2.5)).unwrap_err();
    assert!(matches!(err, ConversionError::UnsupportedType { .. }));
    assert!(err.to_string().contains("float"));

    let err = to_hex_json(&json!(["a"])).unwrap_err();
    assert!(err.to_string().contains("list"));
}

#[test]
fn test_malformed_text_is_format_error() {
    init_logging();
    for text in ["0X10", "0x", "ten", "1e3", "0x1g"] {
        assert!(to_decimal(&NumericInput::from(text)).unwrap_err().is_format());
        assert!(from_decimal(&NumericInput::from(text)).unwrap_err().is_format());
    }
}
