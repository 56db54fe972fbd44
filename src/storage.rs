//! Browser session storage
//!
//! `window.localStorage` behind the core `KeyValueStorage` trait.

use indoor_core::auth::{AuthService, KeyValueStorage};
use indoor_core::AuthError;

#[derive(Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        let storage = Self::storage().ok_or_else(|| AuthError::Storage("localStorage unavailable".into()))?;
        storage
            .set_item(key, value)
            .map_err(|e| AuthError::Storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

pub fn auth_service() -> AuthService<LocalStorage> {
    AuthService::new(LocalStorage)
}
