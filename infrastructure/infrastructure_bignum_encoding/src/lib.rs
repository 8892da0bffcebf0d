//! Infrastructure Layer: Bignum Encoding
//!
//! Provides the big-endian byte codec for arbitrary precision unsigned
//! integers.
//!
//! ## Codecs
//!
//! - **[`big_endian_codec`](big_endian_codec/index.html)**: minimal-length
//!   big-endian serialization of non-negative `BigNumber` values, plus a
//!   lenient decoder for zero-padded input.
//!
//! ## See Also
//!
//! - [`entities_utilities`](../../entities/entities_utilities/index.html): BigNumber type

mod common;

pub mod big_endian_codec;

pub use big_endian_codec::BigEndianIntCodec;

// Re-export error types for convenience
pub use common::{DecodeError, EncodeError};
