//! ES256 signing with ECDSA P-256

use super::encode_segment;
use crate::{
    error::{JwtError, JwtResult},
    types::{JwtClaims, JwtHeader},
};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use cdpauth_key::EcScalar;
use p256::{
    ecdsa::{Signature, SigningKey, signature::Signer},
    pkcs8::DecodePrivateKey,
};

/// `base64url(header) "." base64url(claims)`
///
/// # Errors
/// [`JwtError::Serialization`] if either part fails to serialize.
pub fn signing_input(header: &JwtHeader, claims: &JwtClaims) -> JwtResult<String> {
    let header_b64 = encode_segment(header)?;
    let claims_b64 = encode_segment(claims)?;

    let mut input = String::with_capacity(header_b64.len() + 1 + claims_b64.len());
    input.push_str(&header_b64);
    input.push('.');
    input.push_str(&claims_b64);
    Ok(input)
}

/// Sign a token with a raw P-256 private scalar.
///
/// The signature segment is the 64-byte `r || s` encoding, not DER.
///
/// # Errors
/// - [`JwtError::InvalidClaims`] if the claims are out of contract
/// - [`JwtError::SigningFailure`] if the scalar is zero or not below the
///   curve order, or ECDSA fails
pub fn es256_sign(header: &JwtHeader, claims: &JwtClaims, scalar: &EcScalar) -> JwtResult<String> {
    let signing_key = SigningKey::from_slice(scalar.as_bytes())
        .map_err(|_| JwtError::signing_failure("scalar is not a valid P-256 private key"))?;
    sign_with_key(&signing_key, header, claims)
}

/// Sign a token with a PKCS#8 DER private key.
///
/// # Errors
/// Same as [`es256_sign`]; key import failures are [`JwtError::SigningFailure`].
pub fn es256_sign_pkcs8(
    header: &JwtHeader,
    claims: &JwtClaims,
    pkcs8_der: &[u8],
) -> JwtResult<String> {
    let signing_key = SigningKey::from_pkcs8_der(pkcs8_der)
        .map_err(|_| JwtError::signing_failure("PKCS#8 key import failed"))?;
    sign_with_key(&signing_key, header, claims)
}

fn sign_with_key(
    signing_key: &SigningKey,
    header: &JwtHeader,
    claims: &JwtClaims,
) -> JwtResult<String> {
    claims.validate()?;
    let input = signing_input(header, claims)?;

    let signature: Signature = signing_key
        .try_sign(input.as_bytes())
        .map_err(|_| JwtError::signing_failure("ECDSA signing failed"))?;
    let signature_b64 = URL_SAFE_NO_PAD.encode(signature.to_bytes());

    let mut jwt = String::with_capacity(input.len() + 1 + signature_b64.len());
    jwt.push_str(&input);
    jwt.push('.');
    jwt.push_str(&signature_b64);

    tracing::trace!(uri = %claims.uri, exp = claims.exp, "signed ES256 token");
    Ok(jwt)
}
