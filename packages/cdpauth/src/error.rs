//! Request signing errors

use cdpauth_jwt::JwtError;
use cdpauth_key::KeyError;
use thiserror::Error;

/// Result type for request signing
pub type Result<T> = std::result::Result<T, SignError>;

/// Failure of one signing attempt, tagged with the stage that failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignError {
    /// The PEM envelope or its Base64 body could not be decoded
    #[error("PEM decoding failed: {0}")]
    Pem(#[source] KeyError),

    /// The DER structure did not yield a private scalar
    #[error("Key extraction failed: {0}")]
    KeyExtraction(#[source] KeyError),

    /// Claims were rejected or ECDSA signing failed
    #[error("Token signing failed: {0}")]
    Signing(#[from] JwtError),

    /// Method, path or key name is empty
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Signer configuration is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SignError {
    /// Short name of the failed stage, for diagnostics
    #[must_use]
    pub fn stage(&self) -> &'static str {
        match self {
            SignError::Pem(_) => "pem",
            SignError::KeyExtraction(_) => "key-extraction",
            SignError::Signing(_) => "signing",
            SignError::InvalidRequest(_) => "request",
            SignError::InvalidConfig(_) => "config",
        }
    }

    /// Create an invalid request error
    #[inline]
    #[must_use]
    pub fn invalid_request(msg: &str) -> Self {
        SignError::InvalidRequest(msg.to_string())
    }

    /// Create an invalid config error
    #[inline]
    #[must_use]
    pub fn invalid_config(msg: &str) -> Self {
        SignError::InvalidConfig(msg.to_string())
    }
}

impl From<KeyError> for SignError {
    /// Envelope-level failures map to [`SignError::Pem`], DER-level ones to
    /// [`SignError::KeyExtraction`].
    fn from(err: KeyError) -> Self {
        match err {
            KeyError::MalformedInput(_)
            | KeyError::InvalidPemFormat(_)
            | KeyError::UnsupportedKeyFormat(_) => SignError::Pem(err),
            KeyError::Asn1TagMismatch { .. }
            | KeyError::Asn1Truncated { .. }
            | KeyError::Asn1InvalidLength { .. }
            | KeyError::Asn1TrailingData { .. }
            | KeyError::ScalarTooLarge { .. } => SignError::KeyExtraction(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_errors_map_to_stages() {
        let pem: SignError = KeyError::invalid_pem("missing END marker").into();
        assert_eq!(pem.stage(), "pem");

        let der: SignError = KeyError::Asn1Truncated { offset: 7 }.into();
        assert_eq!(der.stage(), "key-extraction");

        let trailing: SignError = KeyError::Asn1TrailingData { offset: 121 }.into();
        assert_eq!(trailing.stage(), "key-extraction");

        let jwt: SignError = JwtError::signing_failure("boom").into();
        assert_eq!(jwt.stage(), "signing");
    }

    #[test]
    fn source_is_chained() {
        use std::error::Error as _;
        let err: SignError = KeyError::ScalarTooLarge { len: 33 }.into();
        assert!(err.source().is_some());
    }
}
