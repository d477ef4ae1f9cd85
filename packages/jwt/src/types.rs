//! JWT type definitions

use crate::error::{JwtError, JwtResult};
use serde::{Deserialize, Serialize};

/// JOSE algorithm identifier for ECDSA P-256 / SHA-256
pub const ES256: &str = "ES256";

/// JOSE `typ` header value
pub const JWT_TYPE: &str = "JWT";

/// Issuer expected by the brokerage API
pub const DEFAULT_ISSUER: &str = "cdp";

/// Audience expected by the brokerage API
pub const DEFAULT_AUDIENCE: &str = "api.coinbase.com";

/// Longest token lifetime the brokerage API accepts, in seconds
pub const MAX_LIFETIME_SECS: i64 = 120;

/// JWT header structure
///
/// Field order is the serialization order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtHeader {
    /// Always [`ES256`] for tokens issued here
    pub alg: String,
    /// Key ID, or key name when no ID was given
    pub kid: String,
    /// Always [`JWT_TYPE`]
    pub typ: String,
}

impl JwtHeader {
    /// ES256 header for the given key ID
    #[must_use]
    pub fn es256(kid: impl Into<String>) -> Self {
        Self {
            alg: ES256.to_string(),
            kid: kid.into(),
            typ: JWT_TYPE.to_string(),
        }
    }

    /// ES256 header whose `kid` is `key_id` if present, else `key_name`
    #[must_use]
    pub fn for_key(key_name: &str, key_id: Option<&str>) -> Self {
        Self::es256(key_id.unwrap_or(key_name))
    }
}

/// Registered and API-specific claims of a request token
///
/// Field order is the serialization order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Issuer
    pub iss: String,
    /// Subject: the API key name
    pub sub: String,
    /// Not before (unix seconds)
    pub nbf: i64,
    /// Expiry (unix seconds)
    pub exp: i64,
    /// `"<METHOD> <path>"` of the request this token authorizes
    pub uri: String,
    /// Audience
    pub aud: String,
}

impl JwtClaims {
    /// Check the request-token contract: non-empty subject and URI, and a
    /// validity window of 1 to [`MAX_LIFETIME_SECS`] seconds.
    ///
    /// # Errors
    /// [`JwtError::InvalidClaims`] describing the first violation.
    pub fn validate(&self) -> JwtResult<()> {
        if self.sub.is_empty() {
            return Err(JwtError::invalid_claims("subject must not be empty"));
        }
        if self.uri.is_empty() {
            return Err(JwtError::invalid_claims("uri must not be empty"));
        }
        let lifetime = self.exp - self.nbf;
        if !(1..=MAX_LIFETIME_SECS).contains(&lifetime) {
            return Err(JwtError::InvalidClaims(format!(
                "token lifetime {lifetime}s outside 1..={MAX_LIFETIME_SECS}s"
            )));
        }
        Ok(())
    }
}

/// Format the `uri` claim: uppercased method, one space, path as given.
#[must_use]
pub fn request_uri(method: &str, path: &str) -> String {
    format!("{} {}", method.to_ascii_uppercase(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_prefers_key_id() {
        assert_eq!(JwtHeader::for_key("name", Some("id")).kid, "id");
        assert_eq!(JwtHeader::for_key("name", None).kid, "name");
    }

    #[test]
    fn header_serializes_in_order() {
        let json = serde_json::to_string(&JwtHeader::es256("kid-1")).unwrap();
        assert_eq!(json, r#"{"alg":"ES256","kid":"kid-1","typ":"JWT"}"#);
    }

    #[test]
    fn uri_uppercases_method_only() {
        assert_eq!(
            request_uri("get", "/api/v3/brokerage/Accounts"),
            "GET /api/v3/brokerage/Accounts"
        );
    }

    #[test]
    fn lifetime_is_bounded() {
        let mut claims = JwtClaims {
            iss: DEFAULT_ISSUER.to_string(),
            sub: "key".to_string(),
            nbf: 1_000,
            exp: 1_120,
            uri: "GET /".to_string(),
            aud: DEFAULT_AUDIENCE.to_string(),
        };
        assert!(claims.validate().is_ok());

        claims.exp = 1_121;
        assert!(matches!(claims.validate(), Err(JwtError::InvalidClaims(_))));

        claims.exp = 1_000;
        assert!(matches!(claims.validate(), Err(JwtError::InvalidClaims(_))));
    }
}
