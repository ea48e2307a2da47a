use serde::{Deserialize, Serialize};
use crate::conversation::EntityId;

/// Username the backend uses for assistant replies
pub const AI_USERNAME: &str = "AI";
/// Author shown on messages the user has just sent
pub const LOCAL_USERNAME: &str = "You";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub username: String,
}

/// A single chat message.
///
/// Wire shape is `{id, user: {username}, message}`. `sending` and `error`
/// only exist on provisional messages created by the send flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: EntityId,
    #[serde(rename = "user")]
    pub author: Author,
    #[serde(rename = "message", default)]
    pub body: String,
    #[serde(skip)]
    pub sending: bool,
    #[serde(skip)]
    pub error: bool,
}

impl Message {
    pub fn new(id: impl Into<EntityId>, username: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            author: Author { username: username.into() },
            body: body.into(),
            sending: false,
            error: false,
        }
    }

    /// A locally created message awaiting backend confirmation.
    /// The placeholder id is the creation time in milliseconds.
    pub fn provisional(placeholder_id: i64, body: impl Into<String>) -> Self {
        Self {
            sending: true,
            ..Self::new(placeholder_id, LOCAL_USERNAME, body)
        }
    }

    pub fn is_from_ai(&self) -> bool {
        self.author.username == AI_USERNAME
    }

    /// Mark a provisional message as rejected by the backend.
    pub fn mark_failed(&mut self) {
        self.error = true;
        self.sending = false;
    }
}
