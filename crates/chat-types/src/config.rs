/// Model used until the backend's model list says otherwise.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Client configuration, fixed at build time by the deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin, e.g. `https://chat.example.com`. Empty means same origin.
    pub api_base_url: String,
    pub default_model: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            default_model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let base: String = api_base_url.into();
        Self {
            api_base_url: base.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Read the backend origin from `CHAT_API_BASE_URL` at compile time.
    pub fn from_env() -> Self {
        match option_env!("CHAT_API_BASE_URL") {
            Some(base) => Self::new(base),
            None => Self::default(),
        }
    }

    /// Absolute URL for an API path such as `/api/auth/login/`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}
