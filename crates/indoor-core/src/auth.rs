//! Session gate
//!
//! There is no server-side authentication: one fixed admin account is
//! checked locally and the logged-in user is persisted under a single
//! storage key so a reload keeps the session.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::{Role, User};
use crate::error::AuthError;

/// Storage key holding the JSON-encoded session user
pub const AUTH_STORAGE_KEY: &str = "bike_sim_pro_auth";

pub const ADMIN_EMAIL: &str = "admin@example.com";
const ADMIN_PASSWORD: &str = "password";

/// String key/value persistence (browser `localStorage` in the app)
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), AuthError>;
    fn remove(&self, key: &str);
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

pub struct AuthService<S> {
    storage: S,
}

impl<S: KeyValueStorage> AuthService<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// The persisted session user; unreadable data is cleared
    pub fn restore(&self) -> Option<User> {
        let raw = self.storage.get(AUTH_STORAGE_KEY)?;
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("Discarding corrupt session data: {}", e);
                self.storage.remove(AUTH_STORAGE_KEY);
                None
            }
        }
    }

    /// Check credentials and persist the session
    pub fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() || email != ADMIN_EMAIL || password != ADMIN_PASSWORD {
            log::warn!("Rejected login for '{}'", email);
            return Err(AuthError::InvalidCredentials);
        }

        let user = User {
            id: "1".to_string(),
            email: email.to_string(),
            name: "Admin User".to_string(),
            role: Role::Admin,
        };
        let encoded = serde_json::to_string(&user).map_err(|e| AuthError::Storage(e.to_string()))?;
        self.storage.set(AUTH_STORAGE_KEY, &encoded)?;
        log::info!("User {} logged in", user.email);
        Ok(user)
    }

    pub fn logout(&self) {
        self.storage.remove(AUTH_STORAGE_KEY);
        log::info!("Session cleared");
    }

    pub fn is_authenticated(&self) -> bool {
        self.restore().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_persists_session() {
        let auth = AuthService::new(MemoryStorage::new());
        let user = auth.login("  admin@example.com ", "password").unwrap();
        assert_eq!(user.id, "1");
        assert_eq!(user.name, "Admin User");
        assert_eq!(user.role, Role::Admin);

        assert!(auth.is_authenticated());
        assert_eq!(auth.restore(), Some(user));

        auth.logout();
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn test_wrong_credentials_rejected() {
        let auth = AuthService::new(MemoryStorage::new());
        assert_eq!(auth.login("admin@example.com", "wrong"), Err(AuthError::InvalidCredentials));
        assert_eq!(auth.login("user@example.com", "password"), Err(AuthError::InvalidCredentials));
        assert_eq!(auth.login("", ""), Err(AuthError::InvalidCredentials));
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn test_corrupt_session_is_cleared() {
        let storage = MemoryStorage::new();
        storage.set(AUTH_STORAGE_KEY, "{not json").unwrap();
        let auth = AuthService::new(storage);

        assert!(auth.restore().is_none());
        assert!(auth.storage.get(AUTH_STORAGE_KEY).is_none());
    }
}
