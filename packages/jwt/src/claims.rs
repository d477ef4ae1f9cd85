//! Request-token claims builder with compile-time validation.

use crate::types::{DEFAULT_AUDIENCE, DEFAULT_ISSUER, JwtClaims, MAX_LIFETIME_SECS, request_uri};

/// Typestate markers for builder pattern.
pub mod ts {
    /// Marker for a field that has been set, carrying its value.
    pub struct Set<T>(pub(crate) T);
    /// Marker for a field that has not been set.
    pub struct Unset;
}

/// Compile-time checked builder for [`JwtClaims`].
///
/// `build()` is only available once subject, request and not-before are set.
pub struct ClaimsBuilder<Sub = ts::Unset, Uri = ts::Unset, Nbf = ts::Unset> {
    sub: Sub,
    uri: Uri,
    nbf: Nbf,
    iss: String,
    aud: String,
    lifetime_secs: i64,
}

impl ClaimsBuilder {
    /// Create a new claims builder with the default issuer, audience and
    /// the maximum lifetime.
    pub fn new() -> Self {
        Self {
            sub: ts::Unset,
            uri: ts::Unset,
            nbf: ts::Unset,
            iss: DEFAULT_ISSUER.to_string(),
            aud: DEFAULT_AUDIENCE.to_string(),
            lifetime_secs: MAX_LIFETIME_SECS,
        }
    }
}

impl<Uri, Nbf> ClaimsBuilder<ts::Unset, Uri, Nbf> {
    /// Set the subject (sub) claim to the API key name.
    pub fn subject(self, sub: impl Into<String>) -> ClaimsBuilder<ts::Set<String>, Uri, Nbf> {
        ClaimsBuilder {
            sub: ts::Set(sub.into()),
            uri: self.uri,
            nbf: self.nbf,
            iss: self.iss,
            aud: self.aud,
            lifetime_secs: self.lifetime_secs,
        }
    }
}

impl<Sub, Nbf> ClaimsBuilder<Sub, ts::Unset, Nbf> {
    /// Bind the token to an HTTP method and path.
    pub fn request(self, method: &str, path: &str) -> ClaimsBuilder<Sub, ts::Set<String>, Nbf> {
        ClaimsBuilder {
            sub: self.sub,
            uri: ts::Set(request_uri(method, path)),
            nbf: self.nbf,
            iss: self.iss,
            aud: self.aud,
            lifetime_secs: self.lifetime_secs,
        }
    }
}

impl<Sub, Uri> ClaimsBuilder<Sub, Uri, ts::Unset> {
    /// Set the not-before (nbf) claim in unix seconds.
    pub fn not_before(self, nbf: i64) -> ClaimsBuilder<Sub, Uri, ts::Set<i64>> {
        ClaimsBuilder {
            sub: self.sub,
            uri: self.uri,
            nbf: ts::Set(nbf),
            iss: self.iss,
            aud: self.aud,
            lifetime_secs: self.lifetime_secs,
        }
    }
}

impl<Sub, Uri, Nbf> ClaimsBuilder<Sub, Uri, Nbf> {
    /// Set the issuer (iss) claim.
    pub fn issuer(mut self, iss: impl Into<String>) -> Self {
        self.iss = iss.into();
        self
    }

    /// Set the audience (aud) claim.
    pub fn audience(mut self, aud: impl Into<String>) -> Self {
        self.aud = aud.into();
        self
    }

    /// Set the distance between nbf and exp.
    pub fn lifetime_secs(mut self, secs: i64) -> Self {
        self.lifetime_secs = secs;
        self
    }
}

impl ClaimsBuilder<ts::Set<String>, ts::Set<String>, ts::Set<i64>> {
    /// Build the claims. All required fields are set.
    pub fn build(self) -> JwtClaims {
        let ts::Set(nbf) = self.nbf;
        JwtClaims {
            iss: self.iss,
            sub: self.sub.0,
            nbf,
            exp: nbf.saturating_add(self.lifetime_secs),
            uri: self.uri.0,
            aud: self.aud,
        }
    }
}

impl Default for ClaimsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
