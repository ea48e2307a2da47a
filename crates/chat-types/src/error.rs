use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChatError {
    /// No access token, or the stored one is expired or undecodable
    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),
}

impl ChatError {
    /// Errors that should send the user back to the login view.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ChatError::Unauthenticated)
    }
}

impl From<serde_json::Error> for ChatError {
    fn from(e: serde_json::Error) -> Self {
        ChatError::Serialization(e.to_string())
    }
}
