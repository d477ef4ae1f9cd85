//! # cdpauth key handling
//!
//! Turns the PEM text of a P-256 private key into the raw 32-byte scalar
//! the signer needs.
//!
//! - [`pem`]: tolerant Base64 decoding and PEM envelope extraction
//! - [`asn1`]: minimal DER reader (SEQUENCE, INTEGER, OCTET STRING) and writer
//! - [`ec`]: SEC1 / PKCS#8 scalar extraction and SEC1 to PKCS#8 conversion
//!
//! ```rust,ignore
//! use cdpauth_key::EcPrivateKey;
//!
//! let key = EcPrivateKey::from_pem(pem_text)?;
//! let scalar = key.scalar()?;
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod asn1;
pub mod ec;
pub mod error;
pub mod pem;

pub use ec::{EcPrivateKey, EcScalar, KeyFormat, extract_scalar, sec1_to_pkcs8};
pub use error::{KeyError, Result};
pub use pem::{PemBlock, decode_base64, encode_pem, extract_pem_block};
