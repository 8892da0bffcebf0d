//! Use Cases Layer: Conversions
//!
//! Converts between value kinds and the two canonical encodings used
//! throughout the client library: `0x`-prefixed hex text and big-endian
//! integer bytes.
//!
//! ## Overview
//!
//! All operations are pure functions of their input. They hold no state and
//! may be called from any number of threads.
//!
//! ## Modules
//!
//! - **[`hex_encoder`](hex_encoder/index.html)**: `to_hex` over the closed
//!   [`HexValue`](entities_data_handling::HexValue) kinds, and `to_hex_json`
//!   for dynamically typed input
//! - **[`decimal`](decimal/index.html)**: `to_decimal` and `from_decimal`
//! - **[`numeric_text`](numeric_text/index.html)**: the hex/decimal
//!   disambiguation rule for textual integers
//! - **[`big_endian`](big_endian/index.html)**: `decode_big_endian_int` and
//!   `encode_big_endian_int`
//! - **[`error`](error/index.html)**: `ConversionError`
//!
//! ## Architecture
//!
//! This crate depends on the Entities layer for value kinds and on the
//! Infrastructure layer for hex text, coercion, JSON text and the byte codec.
//! It is exposed through the API Facades layer.

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 */

pub mod big_endian;
pub mod decimal;
pub mod error;
pub mod hex_encoder;
pub mod numeric_text;

pub use big_endian::{decode_big_endian_int, encode_big_endian_int};
pub use decimal::{from_decimal, integer_to_hex, to_decimal};
pub use error::{ConversionError, FormatError};
pub use hex_encoder::{hex_value_from_json, to_hex, to_hex_json};
pub use numeric_text::{is_hex_literal, parse_numeric_text};
