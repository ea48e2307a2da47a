//! Session tokens in persistent storage, and the gate built on them.

use std::rc::Rc;
use chat_types::{
    ChatError, Result,
    route::Route,
    session::{TokenPair, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY},
};
use crate::ports::StoragePort;
use crate::router;
use crate::token::{is_token_valid, is_token_valid_at};

/// Owner of the two session tokens. Written only by login, register and logout.
#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn StoragePort>,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn StoragePort>) -> Self {
        log::info!("Session storage: {}", storage.backend_name());
        Self { storage }
    }

    pub fn access_token(&self) -> Option<String> {
        self.read(ACCESS_TOKEN_KEY)
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Failed to read {}: {}", key, e);
                None
            }
        }
    }

    pub fn save(&self, tokens: &TokenPair) -> Result<()> {
        self.storage.set(ACCESS_TOKEN_KEY, &tokens.access)?;
        self.storage.set(REFRESH_TOKEN_KEY, &tokens.refresh)?;
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        self.storage.delete(ACCESS_TOKEN_KEY)?;
        self.storage.delete(REFRESH_TOKEN_KEY)?;
        Ok(())
    }

    /// The access token for an authenticated request, if it is still valid.
    pub fn bearer(&self) -> Result<String> {
        let token = self.access_token().ok_or(ChatError::Unauthenticated)?;
        if is_token_valid(Some(&token)) {
            Ok(token)
        } else {
            Err(ChatError::Unauthenticated)
        }
    }
}

/// Decides which views are reachable from the stored access token.
#[derive(Clone)]
pub struct SessionGate {
    session: SessionStore,
}

impl SessionGate {
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }

    pub fn is_authenticated(&self) -> bool {
        is_token_valid(self.session.access_token().as_deref())
    }

    pub fn is_authenticated_at(&self, now_secs: f64) -> bool {
        is_token_valid_at(self.session.access_token().as_deref(), now_secs)
    }

    /// Where a navigation to `requested` actually lands.
    pub fn resolve(&self, requested: Route) -> Route {
        router::resolve(requested, self.is_authenticated())
    }
}
