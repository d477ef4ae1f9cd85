//! Signer configuration

use crate::error::{Result, SignError};
use cdpauth_jwt::{DEFAULT_AUDIENCE, DEFAULT_ISSUER, MAX_LIFETIME_SECS};
use serde::{Deserialize, Serialize};

/// Which key import path produces the ECDSA signing key
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SigningBackend {
    /// Import the extracted 32-byte scalar directly
    #[default]
    RawScalar,
    /// Re-encode SEC1 keys as PKCS#8 and import that
    Pkcs8,
}

/// Claim values and signing behavior for a [`crate::RequestSigner`]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerConfig {
    /// `iss` claim
    #[serde(default = "default_issuer")]
    pub issuer: String,
    /// `aud` claim
    #[serde(default = "default_audience")]
    pub audience: String,
    /// Seconds between `nbf` and `exp`
    #[serde(default = "default_lifetime_secs")]
    pub lifetime_secs: i64,
    /// Key import path
    #[serde(default)]
    pub backend: SigningBackend,
}

fn default_issuer() -> String {
    DEFAULT_ISSUER.to_string()
}

fn default_audience() -> String {
    DEFAULT_AUDIENCE.to_string()
}

fn default_lifetime_secs() -> i64 {
    MAX_LIFETIME_SECS
}

impl Default for SignerConfig {
    fn default() -> Self {
        Self {
            issuer: default_issuer(),
            audience: default_audience(),
            lifetime_secs: default_lifetime_secs(),
            backend: SigningBackend::default(),
        }
    }
}

impl SignerConfig {
    /// Parse and validate a JSON configuration. Missing fields take defaults.
    ///
    /// # Errors
    /// [`SignError::InvalidConfig`] on malformed JSON or out-of-range values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| SignError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration against what the brokerage API accepts.
    ///
    /// # Errors
    /// [`SignError::InvalidConfig`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.issuer.trim().is_empty() {
            return Err(SignError::invalid_config("issuer must not be empty"));
        }
        if self.audience.trim().is_empty() {
            return Err(SignError::invalid_config("audience must not be empty"));
        }
        if !(1..=MAX_LIFETIME_SECS).contains(&self.lifetime_secs) {
            return Err(SignError::InvalidConfig(format!(
                "lifetime_secs must be within 1..={MAX_LIFETIME_SECS}, got {}",
                self.lifetime_secs
            )));
        }
        Ok(())
    }
}
