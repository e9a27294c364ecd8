//! Token storage behind a capability that is injected into the API client.

use crate::config::Config;
use gloo_storage::{LocalStorage, Storage};
use log::{debug, error};
use std::cell::RefCell;

/// Where the bearer token lives. Exactly one implementation is handed to the
/// HTTP client when it is built; nothing else reads the token.
pub trait CredentialStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Browser-backed store using LocalStorage
#[derive(Debug, Clone)]
pub struct LocalStorageCredentialStore {
    key: String,
}

impl LocalStorageCredentialStore {
    pub fn new() -> Self {
        Self::with_key(Config::token_storage_key())
    }

    pub fn with_key(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Default for LocalStorageCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialStore for LocalStorageCredentialStore {
    fn get(&self) -> Option<String> {
        LocalStorage::get::<String>(&self.key)
            .ok()
            .filter(|token| !token.is_empty())
    }

    fn set(&self, token: &str) {
        if let Err(e) = LocalStorage::set(&self.key, token) {
            error!("Failed to store auth token in local storage: {}", e);
        }
    }

    fn clear(&self) {
        debug!("Clearing stored auth token");
        LocalStorage::delete(&self.key);
    }
}

/// In-memory store for tests and non-browser hosts
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: RefCell<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RefCell::new(Some(token.into())),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_memory_store_round() {
        let store = MemoryCredentialStore::new();
        assert_eq!(store.get(), None);
        store.set("abc");
        assert_eq!(store.get(), Some("abc".to_string()));
        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_local_store_uses_configured_key() {
        let store = LocalStorageCredentialStore::new();
        assert_eq!(store.key, "scout_auth_token");
    }
}
