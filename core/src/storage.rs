use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::StorageError;

/// Key holding the raw bearer token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// Key holding the serialized operator identity.
pub const USER_KEY: &str = "user";

/// Client-local persistent key/value storage (`localStorage` in the browser).
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

/// Removes both session keys. They are always cleared together.
pub fn clear_session(storage: &dyn SessionStorage) {
    storage.remove(ACCESS_TOKEN_KEY);
    storage.remove(USER_KEY);
}

/// In-memory storage. Clones share the same entries, which lets tests keep
/// a handle on what the client persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_session_removes_both_keys_only() {
        let storage = MemoryStorage::new();
        storage.set(ACCESS_TOKEN_KEY, "tok").unwrap();
        storage.set(USER_KEY, "{}").unwrap();
        storage.set("theme", "dark").unwrap();

        clear_session(&storage);

        assert!(!storage.contains(ACCESS_TOKEN_KEY));
        assert!(!storage.contains(USER_KEY));
        assert_eq!(storage.get("theme").as_deref(), Some("dark"));
    }
}
