//! OS keychain key store.

use diary_core::{DiaryError, KeyBundle, KeyStore};

use crate::constants::{KEYCHAIN_ACCOUNT, KEYCHAIN_SERVICE};

/// Keeps the key bundle JSON in a single keychain entry.
pub struct KeychainKeyStore {
    account: String,
}

impl KeychainKeyStore {
    pub fn new() -> Self {
        Self {
            account: KEYCHAIN_ACCOUNT.to_string(),
        }
    }

    fn entry(&self) -> diary_core::Result<keyring::Entry> {
        keyring::Entry::new(KEYCHAIN_SERVICE, &self.account)
            .map_err(|e| DiaryError::KeyStore(format!("Keychain entry failed: {}", e)))
    }
}

impl Default for KeychainKeyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyStore for KeychainKeyStore {
    fn load(&self) -> diary_core::Result<Option<KeyBundle>> {
        match self.entry()?.get_password() {
            Ok(value) => {
                let value = zeroize::Zeroizing::new(value);
                Ok(Some(KeyBundle::from_json(&value)?))
            }
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(err) => Err(DiaryError::KeyStore(format!(
                "Keychain read failed: {}",
                err
            ))),
        }
    }

    fn save(&self, keys: &KeyBundle) -> diary_core::Result<()> {
        let json = keys.to_json()?;
        self.entry()?
            .set_password(&json)
            .map_err(|e| DiaryError::KeyStore(format!("Keychain write failed: {}", e)))?;
        tracing::debug!(account = %self.account, "saved keys to keychain");
        Ok(())
    }

    fn clear(&self) -> diary_core::Result<()> {
        match self.entry()?.delete_password() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Ok(()),
            Err(err) => Err(DiaryError::KeyStore(format!(
                "Keychain delete failed: {}",
                err
            ))),
        }
    }
}
