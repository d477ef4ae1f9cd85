//! Structured logging infrastructure
//!
//! Provides env_logger-based logging with secure handling of credential
//! identifiers. Private keys, scalars and signing inputs are never accepted
//! by any function in this module.

use log::{debug, info, warn};
use sha2::{Digest, Sha256};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging infrastructure using `env_logger`
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging system (should be called once at application startup)
    ///
    /// Configure logging levels via `RUST_LOG` environment variable:
    /// - `RUST_LOG=debug` - Enable all debug logs, including issued token claims
    /// - `RUST_LOG=warn` - Only signing failures
    /// - `RUST_LOG=cdpauth=debug,cdpauth_key=info` - Module-specific levels
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("Structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    ///
    /// Use this in test modules to avoid initialization conflicts
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log an issued request token.
    ///
    /// Only the public claims are logged. The key name is fingerprinted.
    pub fn log_token_issued(key_name: &str, uri: &str, nbf: i64, exp: i64) {
        let key_hash = Self::secure_hash_key(key_name);
        debug!("Request token issued: uri=\"{uri}\" nbf={nbf} exp={exp} (key_hash: {key_hash})");
    }

    /// Log a failed signing attempt with the stage that failed
    pub fn log_signing_failure(stage: &str, key_name: &str, error: &dyn std::error::Error) {
        let key_hash = Self::secure_hash_key(key_name);
        warn!("Request signing failed at {stage} stage: {error} (key_hash: {key_hash})");
    }

    /// Cryptographically secure key hashing for logging
    ///
    /// Returns `#` followed by the first 12 characters of the hex-encoded
    /// SHA-256 digest.
    pub fn secure_hash_key(key: &str) -> String {
        let hash = Sha256::digest(key.as_bytes());
        let hex_hash = format!("{hash:x}");
        format!("#{}", &hex_hash[..12])
    }
}
