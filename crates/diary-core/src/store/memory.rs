//! In-memory key store.

use std::sync::Mutex;

use super::KeyStore;
use crate::error::{DiaryError, Result};
use crate::keys::KeyBundle;

/// Holds the key pair for the lifetime of the process only.
#[derive(Debug, Default)]
pub struct MemoryKeyStore {
    slot: Mutex<Option<KeyBundle>>,
}

impl MemoryKeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `keys`.
    pub fn with_keys(keys: KeyBundle) -> Self {
        Self {
            slot: Mutex::new(Some(keys)),
        }
    }
}

impl KeyStore for MemoryKeyStore {
    fn load(&self) -> Result<Option<KeyBundle>> {
        let slot = self
            .slot
            .lock()
            .map_err(|_| DiaryError::KeyStore("memory store lock poisoned".to_string()))?;
        Ok(slot.clone())
    }

    fn save(&self, keys: &KeyBundle) -> Result<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| DiaryError::KeyStore("memory store lock poisoned".to_string()))?;
        *slot = Some(keys.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| DiaryError::KeyStore("memory store lock poisoned".to_string()))?;
        *slot = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_loads_none() {
        let store = MemoryKeyStore::new();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryKeyStore::new();
        let keys = KeyBundle::new("pub", "priv");
        store.save(&keys).unwrap();
        assert_eq!(store.load().unwrap(), Some(keys));
    }

    #[test]
    fn test_save_replaces() {
        let store = MemoryKeyStore::with_keys(KeyBundle::new("old-pub", "old-priv"));
        store.save(&KeyBundle::new("new-pub", "new-priv")).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.public_key(), "new-pub");
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = MemoryKeyStore::with_keys(KeyBundle::new("pub", "priv"));
        store.clear().unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
