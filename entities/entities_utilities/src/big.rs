//! Big Number Operations
//!
//! Provides the arbitrary precision integer used by every numeric conversion
//! in the workspace.
//!
//! This module uses the `malachite` crate for arbitrary-precision arithmetic.
//! Values are signed; byte conversions operate on the magnitude and reject
//! negative values where a sign cannot be represented.

use std::fmt;

use malachite::Integer;

/// Big number representation using malachite's Integer
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BigNumber {
    value: Integer,
}

impl BigNumber {
    /// The value zero
    pub fn zero() -> Self {
        Self {
            value: Integer::from(0),
        }
    }

    /// Create a new big number from i64
    pub fn from_i64(value: i64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from u64
    pub fn from_u64(value: u64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from u32
    pub fn from_u32(value: u32) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from i32
    pub fn from_i32(value: i32) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Build an unsigned value from big-endian bytes
    ///
    /// Leading zero bytes carry no significance, so `[0, 0, 1]` and `[1]`
    /// produce the same value. An empty slice is zero.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let base = Integer::from(256u32);
        let mut value = Integer::from(0);

        for &byte in bytes {
            value = value * &base + Integer::from(byte);
        }

        Self { value }
    }

    /// Minimal big-endian bytes of the magnitude
    ///
    /// Zero yields an empty vector. Returns None for negative values.
    pub fn to_be_bytes(&self) -> Option<Vec<u8>> {
        if self.is_negative() {
            return None;
        }

        let base = Integer::from(256u32);
        let mut byte_vec = Vec::new();
        let mut v = self.value.clone();

        while v > Integer::from(0) {
            let remainder = &v % &base;
            // Remainder is always < 256
            let rem_u64 = u64::try_from(&remainder).unwrap_or(0);
            byte_vec.push(rem_u64 as u8);
            v = &v / &base;
        }

        byte_vec.reverse();
        Some(byte_vec)
    }

    /// Render as lowercase hexadecimal without prefix
    ///
    /// Negative values carry a leading `-` on the magnitude: `-255` renders
    /// as `-ff`. No trailing type suffix is ever produced.
    pub fn to_hex_string(&self) -> String {
        if self.is_negative() {
            format!("-{:x}", self.abs())
        } else {
            format!("{:x}", self.value)
        }
    }

    /// Convert to i64
    ///
    /// Returns None if the value is out of range
    pub fn to_i64(&self) -> Option<i64> {
        i64::try_from(&self.value).ok()
    }

    /// Convert to u64
    ///
    /// Returns None if the value is negative or too large
    pub fn to_u64(&self) -> Option<u64> {
        u64::try_from(&self.value).ok()
    }

    /// Check if the number is below zero
    pub fn is_negative(&self) -> bool {
        self.value < Integer::from(0)
    }

    /// Check if the number is zero
    pub fn is_zero(&self) -> bool {
        self.value == Integer::from(0)
    }

    fn abs(&self) -> Integer {
        if self.is_negative() {
            -self.value.clone()
        } else {
            self.value.clone()
        }
    }

    /// Get the internal Integer value (for advanced use)
    pub fn as_integer(&self) -> &Integer {
        &self.value
    }

    /// Create from Integer (for advanced use)
    pub fn from_integer(value: Integer) -> Self {
        Self { value }
    }
}

impl Default for BigNumber {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<i64> for BigNumber {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<u64> for BigNumber {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<i32> for BigNumber {
    fn from(value: i32) -> Self {
        Self::from_i32(value)
    }
}

impl From<u32> for BigNumber {
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}

impl From<Integer> for BigNumber {
    fn from(value: Integer) -> Self {
        Self::from_integer(value)
    }
}
