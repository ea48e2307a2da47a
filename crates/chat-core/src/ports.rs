//! Port traits: the hexagonal architecture boundary.
//!
//! These traits are defined here in `chat-core` (pure Rust).
//! Implementations live in `chat-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use chat_types::{
    Result,
    api::{ChatPrompt, LoginRequest, RegisterRequest},
    conversation::{Conversation, EntityId},
    message::Message,
    session::TokenPair,
};

// ─── Backend Port ────────────────────────────────────────────

/// The chat backend's REST API.
///
/// Every method except `login`/`register` takes the bearer access token.
/// A rejected token must surface as `ChatError::Unauthenticated`.
#[async_trait(?Send)]
pub trait BackendPort {
    async fn login(&self, req: &LoginRequest) -> Result<TokenPair>;

    async fn register(&self, req: &RegisterRequest) -> Result<TokenPair>;

    /// Conversations in backend display order
    async fn list_conversations(&self, token: &str) -> Result<Vec<Conversation>>;

    /// Full authoritative message sequence of one conversation
    async fn fetch_messages(&self, token: &str, id: &EntityId) -> Result<Vec<Message>>;

    async fn create_conversation(&self, token: &str, title: &str) -> Result<Conversation>;

    async fn delete_conversation(&self, token: &str, id: &EntityId) -> Result<()>;

    /// Fire-and-forget: the reply is picked up by the next message fetch
    async fn send_chat(&self, token: &str, prompt: &ChatPrompt) -> Result<()>;

    /// Model names in backend order
    async fn list_models(&self, token: &str) -> Result<Vec<String>>;
}

// ─── Storage Port ────────────────────────────────────────────

/// Persistent string key/value storage (browser `localStorage`).
/// Synchronous so the session gate can be checked while rendering.
pub trait StoragePort {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn delete(&self, key: &str) -> Result<()>;

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}
