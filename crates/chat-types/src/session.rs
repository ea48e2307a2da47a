use serde::{Deserialize, Serialize};

/// Storage key of the access token
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Storage key of the refresh token
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// The two bearer strings issued at login/register
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Decoded token payload. Only `exp` is required; the signature is never checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Expiry, Unix seconds
    pub exp: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}
