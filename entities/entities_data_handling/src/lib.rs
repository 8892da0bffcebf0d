//! Entities Layer: Data Handling
//!
//! This crate defines the value kinds the conversions operate on.
//!
//! ## Overview
//!
//! The `entities_data_handling` crate is part of the entities layer. It has no
//! behavior of its own beyond construction and inspection; the conversions
//! live in `usecases_conversions`.
//!
//! ## Modules
//!
//! - **[`text`](text/index.html)**: `StringOrBytes`, for inputs that may arrive
//!   as Unicode text or as raw bytes.
//!
//! - **[`value`](value/index.html)**: `HexValue`, the tagged union accepted by
//!   the hex encoder (`Bool`, `Mapping`, `Text`, `Integer`), `NumericInput`,
//!   accepted by the decimal conversions (`Text`, `Integer`), and the
//!   `Mapping` alias.
//!
//! ## Usage
//!
//! ```rust
//! use entities_data_handling::{HexValue, Mapping, NumericInput};
//!
//! let mut mapping = Mapping::new();
//! mapping.insert("a".to_string(), 2.into());
//!
//! let values = vec![HexValue::from(true), HexValue::from(mapping), HexValue::from("dog")];
//! assert_eq!(values.len(), 3);
//!
//! let numeric = NumericInput::from("-0x10");
//! assert!(matches!(numeric, NumericInput::Text(_)));
//! ```
//!
//! ## See Also
//!
//! - [`entities_utilities`](../entities_utilities/index.html): `BigNumber`

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

pub mod text;
pub mod value;

// Re-export main types for convenience
pub use text::StringOrBytes;
pub use value::{HexValue, Mapping, NumericInput};
pub use entities_utilities::BigNumber;
