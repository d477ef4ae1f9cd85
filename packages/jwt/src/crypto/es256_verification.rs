//! ES256 verification with ECDSA P-256

use super::{decode_segment, split_token};
use crate::{
    error::{JwtError, JwtResult},
    types::{ES256, JwtClaims, JwtHeader},
};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use p256::ecdsa::{Signature, VerifyingKey, signature::Verifier};

/// Decode header and claims without checking the signature or time window.
///
/// # Errors
/// [`JwtError::InvalidFormat`] or [`JwtError::Serialization`] on malformed input.
pub fn decode_unverified(token: &str) -> JwtResult<(JwtHeader, JwtClaims)> {
    let (header_b64, claims_b64, _) = split_token(token)?;
    Ok((decode_segment(header_b64)?, decode_segment(claims_b64)?))
}

/// Verify an ES256 token against `verifying_key` at time `now`.
///
/// Claims are only decoded after the signature checks out.
///
/// # Errors
/// - [`JwtError::InvalidFormat`] for anything but three Base64url segments
/// - [`JwtError::UnsupportedAlgorithm`] if `alg` is not ES256
/// - [`JwtError::InvalidSignature`] if the signature is not 64 bytes or fails
/// - [`JwtError::TokenNotYetValid`] / [`JwtError::TokenExpired`] outside `nbf <= now < exp`
pub fn es256_verify(verifying_key: &VerifyingKey, token: &str, now: i64) -> JwtResult<JwtClaims> {
    let (header_b64, claims_b64, signature_b64) = split_token(token)?;

    let header: JwtHeader = decode_segment(header_b64)?;
    if header.alg != ES256 {
        return Err(JwtError::UnsupportedAlgorithm(header.alg));
    }

    let signature_bytes = URL_SAFE_NO_PAD
        .decode(signature_b64)
        .map_err(|_| JwtError::InvalidSignature)?;
    if signature_bytes.len() != 64 {
        return Err(JwtError::InvalidSignature);
    }
    let signature = Signature::from_slice(&signature_bytes).map_err(|_| JwtError::InvalidSignature)?;

    let signed_len = header_b64.len() + 1 + claims_b64.len();
    verifying_key
        .verify(&token.as_bytes()[..signed_len], &signature)
        .map_err(|_| JwtError::InvalidSignature)?;

    let claims: JwtClaims = decode_segment(claims_b64)?;
    if now < claims.nbf {
        return Err(JwtError::TokenNotYetValid {
            nbf: claims.nbf,
            now,
        });
    }
    if now >= claims.exp {
        return Err(JwtError::TokenExpired {
            exp: claims.exp,
            now,
        });
    }

    Ok(claims)
}

/// [`es256_verify`] at the current system time.
///
/// # Errors
/// See [`es256_verify`].
pub fn verify_now(verifying_key: &VerifyingKey, token: &str) -> JwtResult<JwtClaims> {
    es256_verify(verifying_key, token, chrono::Utc::now().timestamp())
}
