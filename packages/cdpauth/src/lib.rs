//! # cdpauth
//!
//! Bearer tokens for Coinbase Advanced Trade brokerage requests, signed with
//! the EC private key of a developer-platform API key.
//!
//! Key text is accepted the way users paste it: SEC1 (`EC PRIVATE KEY`) or
//! PKCS#8 (`PRIVATE KEY`) PEM, with escaped newlines, non-breaking spaces or
//! fullwidth Base64 characters mixed in.
//!
//! ## Example
//!
//! ```rust,no_run
//! use cdpauth::{Credentials, RequestSigner};
//!
//! # fn example(pem: &str) -> Result<(), cdpauth::SignError> {
//! let credentials = Credentials::new("organizations/{org}/apiKeys/{key}", pem);
//! let signed = RequestSigner::new().sign(&credentials, "GET", "/api/v3/brokerage/accounts")?;
//!
//! // Send exactly signed.method and signed.path with this header.
//! let _authorization = signed.authorization_header();
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! Call [`LoggingTransformer::init`] once and set `RUST_LOG=cdpauth=debug` to
//! see issued tokens' claims. Key material is never logged.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod clock;
pub mod config;
pub mod credentials;
pub mod error;
pub mod request;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{SignerConfig, SigningBackend};
pub use credentials::Credentials;
pub use error::{Result, SignError};
pub use request::{RequestSigner, SignedRequest, normalize_request, sign_request};

pub use cdpauth_common::LoggingTransformer;

/// Key parsing: PEM, DER and EC private keys
pub use cdpauth_key as key;

/// ES256 token construction and verification
pub use cdpauth_jwt as jwt;
