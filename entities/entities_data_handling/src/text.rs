//! String Or Bytes Module
//!
//! Inputs that may arrive either as text or as a raw byte sequence. The
//! conversions normalise this into one canonical form at their entry point
//! (see `infrastructure_utilities::coercion`).

/// Text or raw bytes
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum StringOrBytes {
    /// Unicode text
    Str(String),
    /// Raw byte sequence
    Bytes(Vec<u8>),
}

impl StringOrBytes {
    /// Borrow the underlying bytes (UTF-8 for text)
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            StringOrBytes::Str(s) => s.as_bytes(),
            StringOrBytes::Bytes(b) => b,
        }
    }
}

impl From<&str> for StringOrBytes {
    fn from(value: &str) -> Self {
        StringOrBytes::Str(value.to_string())
    }
}

impl From<String> for StringOrBytes {
    fn from(value: String) -> Self {
        StringOrBytes::Str(value)
    }
}

impl From<&[u8]> for StringOrBytes {
    fn from(value: &[u8]) -> Self {
        StringOrBytes::Bytes(value.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for StringOrBytes {
    fn from(value: &[u8; N]) -> Self {
        StringOrBytes::Bytes(value.to_vec())
    }
}

impl From<Vec<u8>> for StringOrBytes {
    fn from(value: Vec<u8>) -> Self {
        StringOrBytes::Bytes(value)
    }
}
