//! JWT error types

use thiserror::Error;

/// JWT operation result type
pub type JwtResult<T> = Result<T, JwtError>;

/// JWT error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    /// Key construction or the ECDSA operation failed
    #[error("Signing failed: {0}")]
    SigningFailure(String),

    /// Claims violate the request-token contract
    #[error("Invalid claims: {0}")]
    InvalidClaims(String),

    /// Header or claims could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Token is not three Base64url segments
    #[error("Invalid JWT format: {0}")]
    InvalidFormat(String),

    /// Header names an algorithm other than ES256
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Signature does not verify
    #[error("Invalid JWT signature")]
    InvalidSignature,

    /// `now` is at or past `exp`
    #[error("JWT token has expired (exp {exp}, now {now})")]
    TokenExpired {
        /// Expiry claim
        exp: i64,
        /// Time of the check
        now: i64,
    },

    /// `now` is before `nbf`
    #[error("JWT token not yet valid (nbf {nbf}, now {now})")]
    TokenNotYetValid {
        /// Not-before claim
        nbf: i64,
        /// Time of the check
        now: i64,
    },
}

impl JwtError {
    /// Create a signing failure error
    #[inline]
    #[must_use]
    pub fn signing_failure(msg: &str) -> Self {
        JwtError::SigningFailure(msg.to_string())
    }

    /// Create an invalid claims error
    #[inline]
    #[must_use]
    pub fn invalid_claims(msg: &str) -> Self {
        JwtError::InvalidClaims(msg.to_string())
    }

    /// Create a serialization error
    #[inline]
    #[must_use]
    pub fn serialization(msg: &str) -> Self {
        JwtError::Serialization(msg.to_string())
    }

    /// Create an invalid format error
    #[inline]
    #[must_use]
    pub fn invalid_format(msg: &str) -> Self {
        JwtError::InvalidFormat(msg.to_string())
    }
}
