//! `window.localStorage` backend.
//! Persistent across page reloads, shared by every tab of the origin.

use chat_core::ports::StoragePort;
use chat_types::{ChatError, Result};

pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| ChatError::Storage("No window object".to_string()))?;

        let storage = window
            .local_storage()
            .map_err(|e| ChatError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| ChatError::Storage("localStorage not available".to_string()))?;

        Ok(Self { storage })
    }
}

impl StoragePort for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| ChatError::Storage(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| ChatError::Storage(format!("{:?}", e)))
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| ChatError::Storage(format!("{:?}", e)))
    }

    fn backend_name(&self) -> &str {
        "localstorage"
    }
}
