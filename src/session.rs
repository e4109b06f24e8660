//! Session
//!
//! Credentials of the current visitor, passed explicitly to every call that
//! needs them. The login flow stores them in the browser; this crate only reads
//! them and rewrites the cached `username` after a rename.

use wasm_bindgen::JsValue;

pub const USERNAME_KEY: &str = "username";
pub const PASSWORD_KEY: &str = "password";
pub const TOKEN_KEY: &str = "token";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub username: String,
    pub password: String,
    pub token: String,
}

impl Session {
    pub fn new(username: &str, password: &str, token: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            token: token.to_string(),
        }
    }

    pub fn load(storage: &impl KeyValueStore) -> Self {
        Self {
            username: storage.get(USERNAME_KEY).unwrap_or_default(),
            password: storage.get(PASSWORD_KEY).unwrap_or_default(),
            token: storage.get(TOKEN_KEY).unwrap_or_default(),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        !self.username.is_empty()
    }

    /// Adopt a new display name and cache it
    pub fn rename(&mut self, storage: &impl KeyValueStore, username: &str) -> Result<(), String> {
        self.username = username.to_string();
        storage.set(USERNAME_KEY, username)
    }
}

/// String key-value persistence
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage(&self) -> Result<web_sys::Storage, String> {
        web_sys::window()
            .ok_or_else(|| "no window".to_string())?
            .local_storage()
            .map_err(js_message)?
            .ok_or_else(|| "localStorage unavailable".to_string())
    }
}

fn js_message(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.storage()?.set_item(key, value).map_err(js_message)
    }
}


#[cfg(test)]
mod tests {
    use super::memory::MemoryStorage;
    use super::*;

    #[test]
    fn test_load_from_storage() {
        let storage = MemoryStorage::default();
        assert!(!Session::load(&storage).is_logged_in());

        storage.set(USERNAME_KEY, "ann").unwrap();
        storage.set(TOKEN_KEY, "tok").unwrap();
        let session = Session::load(&storage);
        assert_eq!(session, Session::new("ann", "", "tok"));
        assert!(session.is_logged_in());
    }

    #[test]
    fn test_rename_writes_cache() {
        let storage = MemoryStorage::default();
        let mut session = Session::new("ann", "pw", "tok");
        session.rename(&storage, "bob").unwrap();
        assert_eq!(session.username, "bob");
        assert_eq!(storage.get(USERNAME_KEY).as_deref(), Some("bob"));
        assert_eq!(storage.get(PASSWORD_KEY), None);
    }
}
