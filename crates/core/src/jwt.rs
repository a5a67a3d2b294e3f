//! Reading claims from the stored access token.
//!
//! The console never holds the signing secret, so the payload is decoded
//! without signature or expiry checks. The result is only used to tell
//! which device session is the current one; never for authorization.

use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Claims the console reads from an access token. Everything is optional
/// since the token's issuer may omit any of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub sub: Option<serde_json::Value>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub exp: Option<i64>,
    #[serde(default)]
    pub iat: Option<i64>,
    /// Unique token identifier; matches [`Device::jti`](crate::models::device::Device).
    #[serde(default)]
    pub jti: Option<String>,
}

fn unverified_validation() -> Validation {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();
    validation
}

/// Decode the payload of `token` without verifying it.
pub fn decode_unverified(token: &str) -> Result<TokenClaims, CoreError> {
    let data = decode::<TokenClaims>(
        token.trim(),
        &DecodingKey::from_secret(&[]),
        &unverified_validation(),
    )
    .map_err(|e| CoreError::Unauthorized(format!("Malformed access token: {e}")))?;
    Ok(data.claims)
}

/// The `jti` of `token`, or `None` when the token is malformed or has none.
pub fn token_jti(token: &str) -> Option<String> {
    decode_unverified(token).ok().and_then(|claims| claims.jti)
}
