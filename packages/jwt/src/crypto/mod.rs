//! ES256 token operations

pub mod es256_signing;
pub mod es256_verification;

use crate::error::{JwtError, JwtResult};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::{Serialize, de::DeserializeOwned};

/// Serialize `value` to compact JSON and Base64url-encode it without padding.
pub(crate) fn encode_segment<T: Serialize>(value: &T) -> JwtResult<String> {
    let json = serde_json::to_vec(value).map_err(|e| JwtError::serialization(&e.to_string()))?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Inverse of [`encode_segment`].
pub(crate) fn decode_segment<T: DeserializeOwned>(segment: &str) -> JwtResult<T> {
    let json = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|_| JwtError::invalid_format("segment is not Base64url"))?;
    serde_json::from_slice(&json).map_err(|e| JwtError::serialization(&e.to_string()))
}

/// Split a compact token into its three non-empty segments.
pub(crate) fn split_token(token: &str) -> JwtResult<(&str, &str, &str)> {
    let mut parts = token.split('.');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(header), Some(claims), Some(signature), None)
            if !header.is_empty() && !claims.is_empty() && !signature.is_empty() =>
        {
            Ok((header, claims, signature))
        }
        _ => Err(JwtError::invalid_format(
            "expected three non-empty dot-separated segments",
        )),
    }
}
