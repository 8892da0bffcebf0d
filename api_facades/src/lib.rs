//! API Facades Layer
//!
//! Public surface of the workspace. The facades accept host values directly
//! and call the conversions in the use cases layer.
//!
//! ```rust
//! use api_facades::{decode_big_endian_int, from_decimal, to_decimal, to_hex};
//!
//! assert_eq!(to_hex("dog").unwrap(), "0x646f67");
//! assert_eq!(from_decimal(255u32).unwrap(), "0xff");
//! assert_eq!(to_decimal("-0x10").unwrap().to_i64(), Some(-16));
//! assert!(decode_big_endian_int(b"\x00\x00\x00").unwrap().is_zero());
//! ```

pub mod encoding_facades;

// Re-export main facade functions and types
pub use encoding_facades::*;
pub use entities_data_handling::{BigNumber, HexValue, Mapping, NumericInput, StringOrBytes};
pub use usecases_conversions::{ConversionError, FormatError};
