//! ES256 JSON Web Tokens bound to a single HTTP request
//!
//! This crate provides:
//! - Typestate claims builder for `iss`/`sub`/`nbf`/`exp`/`uri`/`aud`
//! - ES256 signing from a raw P-256 scalar or a PKCS#8 DER key
//! - Verification and unverified decoding for diagnostics

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod claims;
pub mod crypto;
mod error;
mod types;

pub use claims::ClaimsBuilder;
pub use crypto::{
    es256_signing::{es256_sign, es256_sign_pkcs8, signing_input},
    es256_verification::{decode_unverified, es256_verify, verify_now},
};
pub use error::*;
pub use types::*;

/// Re-exported so callers can build a verifier without a direct p256 dependency.
pub use p256::ecdsa::VerifyingKey;
