//! Integration tests for entities_data_handling crate
//!
//! These tests verify construction of the value kinds from host values.

use entities_data_handling::*;
use serde_json::json;

#[test]
fn test_mapping_from_json_object() {
    let value = json!({"b": 1, "a": {"nested": [1, 2]}});
    let mapping = value.as_object().cloned().unwrap();

    let hex_value = HexValue::from(mapping.clone());
    assert_eq!(hex_value, HexValue::Mapping(mapping));
    assert_eq!(hex_value.kind(), "mapping");
}

#[test]
fn test_text_and_bytes_stay_distinct() {
    let text = HexValue::from("dog");
    let bytes = HexValue::from(b"dog".to_vec());

    assert_ne!(text, bytes);
    match (&text, &bytes) {
        (HexValue::Text(a), HexValue::Text(b)) => assert_eq!(a.as_bytes(), b.as_bytes()),
        _ => panic!("expected text kinds"),
    }
}

#[test]
fn test_numeric_input_kinds() {
    let test_values = vec![
        (NumericInput::from("16"), false),
        (NumericInput::from(b"0x10"), false),
        (NumericInput::from(16u64), true),
        (NumericInput::from(BigNumber::from_i64(-16)), true),
    ];

    for (input, is_integer) in test_values {
        assert_eq!(matches!(input, NumericInput::Integer(_)), is_integer);
    }
}
