//! API key credentials

use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// One API key as handed out by the developer platform
///
/// The PEM text is kept in a [`SecretString`] and never shows up in `Debug`.
pub struct Credentials {
    key_name: String,
    key_id: Option<String>,
    private_key_pem: SecretString,
}

impl Credentials {
    /// Credentials whose `kid` header falls back to the key name
    pub fn new(key_name: impl Into<String>, private_key_pem: impl Into<String>) -> Self {
        Self {
            key_name: key_name.into(),
            key_id: None,
            private_key_pem: SecretString::from(private_key_pem.into()),
        }
    }

    /// Set an explicit key ID for the `kid` header.
    pub fn with_key_id(mut self, key_id: impl Into<String>) -> Self {
        self.key_id = Some(key_id.into());
        self
    }

    /// Full key name, e.g. `organizations/{org}/apiKeys/{key}`
    pub fn key_name(&self) -> &str {
        &self.key_name
    }

    /// Explicit key ID, if any
    pub fn key_id(&self) -> Option<&str> {
        self.key_id.as_deref()
    }

    pub(crate) fn private_key_pem(&self) -> &str {
        self.private_key_pem.expose_secret()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key_name", &self.key_name)
            .field("key_id", &self.key_id)
            .field("private_key_pem", &"[REDACTED]")
            .finish()
    }
}
