//! Session token inspection.
//!
//! Tokens are `header.payload.signature` with a base64url JSON payload.
//! Only the payload is read; signature verification belongs to the backend.

use base64::Engine;
use base64::alphabet;
use base64::engine::{GeneralPurpose, GeneralPurposeConfig};
use chat_types::{ChatError, Result, session::TokenClaims};

/// Standard alphabet, lenient about unused bits in the final symbol the way
/// browser `atob` is.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Current Unix time in (fractional) seconds.
pub fn now_secs() -> f64 {
    chrono::Utc::now().timestamp_millis() as f64 / 1000.0
}

/// Decode the payload segment of a token without checking its signature.
pub fn decode_claims(token: &str) -> Result<TokenClaims> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| ChatError::Validation("token has no payload segment".to_string()))?;

    let bytes = decode_segment(payload)?;
    serde_json::from_slice(&bytes)
        .map_err(|e| ChatError::Validation(format!("token payload: {}", e)))
}

/// base64url → standard alphabet, re-padded, then decoded.
fn decode_segment(segment: &str) -> Result<Vec<u8>> {
    let mut b64: String = segment
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    while b64.len() % 4 != 0 {
        b64.push('=');
    }
    PAYLOAD_ENGINE
        .decode(b64.as_bytes())
        .map_err(|e| ChatError::Validation(format!("token encoding: {}", e)))
}

/// True when the token decodes and its `exp` lies strictly after `now_secs`.
/// Never fails: anything undecodable is simply invalid.
pub fn is_token_valid_at(token: Option<&str>, now_secs: f64) -> bool {
    let token = match token {
        Some(t) if !t.is_empty() => t,
        _ => return false,
    };
    match decode_claims(token) {
        Ok(claims) => claims.exp > now_secs,
        Err(e) => {
            log::debug!("Token validation error: {}", e);
            false
        }
    }
}

/// [`is_token_valid_at`] against the wall clock.
pub fn is_token_valid(token: Option<&str>) -> bool {
    is_token_valid_at(token, now_secs())
}
