//! REST adapter for the chat backend.
//!
//! Uses browser `fetch()` via gloo-net for WASM compatibility.
//! Authenticated calls carry `Authorization: Bearer <access_token>`.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use chat_core::ports::BackendPort;
use chat_types::{
    ChatError, Result,
    api::*,
    config::ClientConfig,
    conversation::{Conversation, EntityId},
    message::Message,
    session::TokenPair,
};

/// Backend reached over HTTP at `config.api_base_url`.
pub struct HttpBackend {
    config: ClientConfig,
}

impl HttpBackend {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    fn authorized(builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder
            .header("Content-Type", "application/json")
            .header("Authorization", &format!("Bearer {}", token))
    }

    /// GET a JSON array. A non-array body reads as an empty list.
    async fn get_list<T: DeserializeOwned>(&self, path: &str, token: &str) -> Result<Vec<T>> {
        let response = Self::authorized(Request::get(&self.url(path)), token)
            .send()
            .await
            .map_err(network_error)?;
        let body: Value = read_json(check_status(response).await?).await?;

        match body {
            Value::Array(_) => Ok(serde_json::from_value(body)?),
            other => {
                log::warn!("Expected a list from {}, got {}", path, json_kind(&other));
                Ok(Vec::new())
            }
        }
    }
}

#[async_trait(?Send)]
impl BackendPort for HttpBackend {
    async fn login(&self, req: &LoginRequest) -> Result<TokenPair> {
        let response = Request::post(&self.url(LOGIN_PATH))
            .header("Content-Type", "application/json")
            .json(req)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;

        read_json(check_status(response).await?).await
    }

    async fn register(&self, req: &RegisterRequest) -> Result<TokenPair> {
        let response = Request::post(&self.url(REGISTER_PATH))
            .header("Content-Type", "application/json")
            .json(req)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;

        let data: RegisterResponse = read_json(check_status(response).await?).await?;
        Ok(data.tokens)
    }

    async fn list_conversations(&self, token: &str) -> Result<Vec<Conversation>> {
        self.get_list(LIST_CONVERSATIONS_PATH, token).await
    }

    async fn fetch_messages(&self, token: &str, id: &EntityId) -> Result<Vec<Message>> {
        self.get_list(&conversation_path(id), token).await
    }

    async fn create_conversation(&self, token: &str, title: &str) -> Result<Conversation> {
        let body = NewConversationRequest {
            title: title.to_string(),
        };
        let response = Self::authorized(Request::post(&self.url(NEW_CONVERSATION_PATH)), token)
            .json(&body)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;

        read_json(check_status(response).await?).await
    }

    async fn delete_conversation(&self, token: &str, id: &EntityId) -> Result<()> {
        let response = Self::authorized(Request::delete(&self.url(&delete_conversation_path(id))), token)
            .send()
            .await
            .map_err(network_error)?;

        check_status(response).await?;
        Ok(())
    }

    async fn send_chat(&self, token: &str, prompt: &ChatPrompt) -> Result<()> {
        let response = Self::authorized(Request::post(&self.url(AI_CHAT_PATH)), token)
            .json(prompt)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;

        // The reply body is not used; messages come back through the next fetch
        check_status(response).await?;
        Ok(())
    }

    async fn list_models(&self, token: &str) -> Result<Vec<String>> {
        let response = Self::authorized(Request::get(&self.url(LIST_MODELS_PATH)), token)
            .send()
            .await
            .map_err(network_error)?;
        let data: Value = read_json(check_status(response).await?).await?;

        Ok(model_names(&data))
    }
}

// ─── Response helpers ────────────────────────────────────────

fn network_error(e: gloo_net::Error) -> ChatError {
    ChatError::Network(e.to_string())
}

/// Map non-2xx responses to errors; 401 means the session is gone.
async fn check_status(response: Response) -> Result<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    if status == 401 {
        return Err(ChatError::Unauthenticated);
    }
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());
    Err(ChatError::Http { status, message })
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    response
        .json()
        .await
        .map_err(|e| ChatError::Serialization(e.to_string()))
}

/// Keys of the `listmodels` object, in backend order.
pub fn model_names(data: &Value) -> Vec<String> {
    data.as_object()
        .map(|obj| obj.keys().cloned().collect())
        .unwrap_or_default()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
