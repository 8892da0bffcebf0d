//! Entities Layer: Utilities
//!
//! Provides the arbitrary precision integer shared by all conversions:
//! - Big number construction, hex rendering and big-endian byte conversion
//! - Integer literal parsing in any radix

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

pub mod big;
pub mod parse;

pub use big::BigNumber;
pub use parse::ParseBigNumberError;
