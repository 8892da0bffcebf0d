//! Infrastructure Layer: Utilities
//!
//! Provides the primitives the conversions are built from:
//! - `0x`-prefixed hex encoding and decoding ([`hex`])
//! - Text/byte coercion ([`coercion`])
//! - Sorted-key JSON text for mappings ([`json`])
//!
//! Depends on Entities layer only (dependencies flow inward).

pub mod coercion;
pub mod hex;
pub mod json;

pub use self::coercion::{force_bytes, force_text, CoercionError};
pub use self::hex::{HexDecodeError, HexUtils};
pub use self::json::{mapping_to_sorted_json, to_sorted_json, JsonTextError};
