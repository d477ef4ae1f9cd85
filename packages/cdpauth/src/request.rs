//! Request signing: PEM credentials in, bearer token out

use crate::{
    clock::{Clock, SystemClock},
    config::{SignerConfig, SigningBackend},
    credentials::Credentials,
    error::{Result, SignError},
};
use cdpauth_common::LoggingTransformer;
use cdpauth_jwt::{ClaimsBuilder, JwtHeader, es256_sign, es256_sign_pkcs8};
use cdpauth_key::EcPrivateKey;

/// A token together with the normalized request it authorizes
///
/// The HTTP client must send exactly `method` and `path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    /// Compact ES256 JWT
    pub token: String,
    /// Uppercased HTTP method
    pub method: String,
    /// Path with a leading `/`
    pub path: String,
    /// `exp` claim of the token
    pub expires_at: i64,
}

impl SignedRequest {
    /// Value for the `Authorization` header
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// Signs brokerage API requests
///
/// Holds no key material. Credentials are passed to every call.
#[derive(Debug, Clone)]
pub struct RequestSigner<C: Clock = SystemClock> {
    config: SignerConfig,
    clock: C,
}

impl RequestSigner<SystemClock> {
    /// Signer with default claims and the system clock
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SignerConfig::default(),
            clock: SystemClock,
        }
    }

    /// Signer with a validated configuration and the system clock
    ///
    /// # Errors
    /// [`SignError::InvalidConfig`] if `config` fails validation.
    pub fn with_config(config: SignerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            clock: SystemClock,
        })
    }
}

impl Default for RequestSigner<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> RequestSigner<C> {
    /// Replace the time source.
    pub fn with_clock<D: Clock>(self, clock: D) -> RequestSigner<D> {
        RequestSigner {
            config: self.config,
            clock,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &SignerConfig {
        &self.config
    }

    /// Sign one request.
    ///
    /// # Errors
    /// - [`SignError::InvalidRequest`] for an empty method, path or key name
    /// - [`SignError::Pem`] / [`SignError::KeyExtraction`] for unusable key text
    /// - [`SignError::Signing`] if the key is not a valid P-256 scalar
    pub fn sign(&self, credentials: &Credentials, method: &str, path: &str) -> Result<SignedRequest> {
        self.sign_inner(credentials, method, path).inspect_err(|err| {
            LoggingTransformer::log_signing_failure(err.stage(), credentials.key_name(), err);
        })
    }

    fn sign_inner(&self, credentials: &Credentials, method: &str, path: &str) -> Result<SignedRequest> {
        let (method, path) = normalize_request(method, path)?;
        if credentials.key_name().trim().is_empty() {
            return Err(SignError::invalid_request("key name must not be empty"));
        }

        tracing::trace!(%method, %path, "normalized request");

        let key = EcPrivateKey::from_pem(credentials.private_key_pem())?;
        let scalar = key.scalar()?;
        tracing::debug!(format = ?key.format(), backend = ?self.config.backend, "signing key resolved");

        let claims = ClaimsBuilder::new()
            .subject(credentials.key_name())
            .request(&method, &path)
            .not_before(self.clock.now())
            .issuer(self.config.issuer.as_str())
            .audience(self.config.audience.as_str())
            .lifetime_secs(self.config.lifetime_secs)
            .build();
        let header = JwtHeader::for_key(credentials.key_name(), credentials.key_id());

        let token = match self.config.backend {
            SigningBackend::RawScalar => es256_sign(&header, &claims, &scalar)?,
            SigningBackend::Pkcs8 => es256_sign_pkcs8(&header, &claims, &key.to_pkcs8_der())?,
        };

        LoggingTransformer::log_token_issued(credentials.key_name(), &claims.uri, claims.nbf, claims.exp);

        Ok(SignedRequest {
            token,
            method,
            path,
            expires_at: claims.exp,
        })
    }
}

/// Trim and uppercase the method, and prefix the path with `/` if missing.
///
/// # Errors
/// [`SignError::InvalidRequest`] if either is empty after trimming.
pub fn normalize_request(method: &str, path: &str) -> Result<(String, String)> {
    let method = method.trim();
    if method.is_empty() {
        return Err(SignError::invalid_request("method must not be empty"));
    }
    if path.is_empty() {
        return Err(SignError::invalid_request("path must not be empty"));
    }
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };
    Ok((method.to_ascii_uppercase(), path))
}

/// Sign `method path` with default settings and return the bare token.
///
/// # Errors
/// See [`RequestSigner::sign`].
pub fn sign_request(credentials: &Credentials, method: &str, path: &str) -> Result<String> {
    RequestSigner::new()
        .sign(credentials, method, path)
        .map(|signed| signed.token)
}
