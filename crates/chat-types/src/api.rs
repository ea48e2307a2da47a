//! Request and response bodies of the backend REST API.

use serde::{Deserialize, Serialize};
use crate::conversation::EntityId;
use crate::session::TokenPair;

pub const LOGIN_PATH: &str = "/api/auth/login/";
pub const REGISTER_PATH: &str = "/api/auth/register/";
pub const LIST_CONVERSATIONS_PATH: &str = "/api/conversation/listconversation/";
pub const NEW_CONVERSATION_PATH: &str = "/api/conversation/newconversation/";
pub const AI_CHAT_PATH: &str = "/api/conversation/aichat/";
pub const LIST_MODELS_PATH: &str = "/api/conversation/listmodels/";

pub fn conversation_path(id: &EntityId) -> String {
    format!("/api/conversation/conversation/{}/", id)
}

pub fn delete_conversation_path(id: &EntityId) -> String {
    format!("/api/conversation/deleteconversation/{}/", id)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone: String,
}

/// Register wraps the token pair, login returns it bare.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub tokens: TokenPair,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewConversationRequest {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatPrompt {
    pub prompt: String,
    pub model_name: String,
    pub conversation_id: EntityId,
}
