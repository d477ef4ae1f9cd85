//! Error handling for PEM, DER and EC key parsing

use thiserror::Error;

/// Key parsing errors
///
/// Messages describe the structural problem only. Key bytes are never
/// included.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// Base64 payload has an impossible length
    #[error("Malformed base64 input: {0}")]
    MalformedInput(String),

    /// BEGIN/END markers missing or naming different labels
    #[error("Invalid PEM format: {0}")]
    InvalidPemFormat(String),

    /// DER tag byte differs from the one the structure requires
    #[error("ASN.1 tag mismatch at offset {offset}: expected 0x{expected:02x}, found 0x{found:02x}")]
    Asn1TagMismatch {
        /// Tag the structure requires
        expected: u8,
        /// Tag present in the input
        found: u8,
        /// Offset of the tag byte
        offset: usize,
    },

    /// DER element runs past the end of the buffer
    #[error("ASN.1 data truncated at offset {offset}")]
    Asn1Truncated {
        /// Offset of the element that could not be read
        offset: usize,
    },

    /// DER length field is not in canonical form
    #[error("ASN.1 length at offset {offset} is not canonical DER")]
    Asn1InvalidLength {
        /// Offset of the length field
        offset: usize,
    },

    /// Bytes follow the top-level DER element
    #[error("ASN.1 trailing data at offset {offset}")]
    Asn1TrailingData {
        /// Offset of the first unconsumed byte
        offset: usize,
    },

    /// PEM label is neither `EC PRIVATE KEY` nor `PRIVATE KEY`
    #[error("Unsupported key format: {0}")]
    UnsupportedKeyFormat(String),

    /// Private scalar longer than the P-256 field size
    #[error("Private scalar too large: {len} bytes exceeds 32")]
    ScalarTooLarge {
        /// Significant length of the extracted scalar
        len: usize,
    },
}

impl KeyError {
    /// Create a malformed input error
    pub fn malformed_input(msg: impl Into<String>) -> Self {
        Self::MalformedInput(msg.into())
    }

    /// Create an invalid PEM format error
    pub fn invalid_pem(msg: impl Into<String>) -> Self {
        Self::InvalidPemFormat(msg.into())
    }
}

/// Result type for key operations
pub type Result<T> = std::result::Result<T, KeyError>;
