use std::fmt;
use serde::{Deserialize, Serialize};

/// Backend identifier. The API hands out integers, but string ids are
/// accepted so the client never has to guess.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Int(i64),
    Text(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Int(n) => write!(f, "{}", n),
            EntityId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EntityId {
    fn from(n: i64) -> Self {
        EntityId::Int(n)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        EntityId::Text(s.to_string())
    }
}

/// A conversation as listed by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    /// Missing only in malformed payloads; such conversations cannot be selected.
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
}

impl Conversation {
    pub fn new(id: impl Into<EntityId>, title: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            title: title.into(),
        }
    }

    /// True when both refer to the same backend conversation.
    pub fn same_id(&self, id: &EntityId) -> bool {
        self.id.as_ref() == Some(id)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
