//! Caller-owned key session.
//!
//! `KeySession` holds the single active key pair for a caller together with
//! the store it is persisted in. There is no process-wide key state: two
//! sessions over two stores are fully independent.

use zeroize::Zeroizing;

use crate::envelope;
use crate::error::{DiaryError, Result};
use crate::keys::{KeyBundle, KeyPair};
use crate::store::KeyStore;

/// The active key pair plus the store that persists it.
pub struct KeySession<S: KeyStore> {
    store: S,
    active: Option<KeyPair>,
}

impl<S: KeyStore> KeySession<S> {
    /// A session with no active keys. Call [`KeySession::restore`] to pick up
    /// a previously stored pair.
    pub fn new(store: S) -> Self {
        Self {
            store,
            active: None,
        }
    }

    /// Open a session and load whatever the store holds.
    pub fn open(store: S) -> Result<Self> {
        let mut session = Self::new(store);
        session.restore()?;
        Ok(session)
    }

    /// Reload the active pair from the store.
    ///
    /// Returns whether a pair is now active. A stored pair that does not
    /// parse is reported as `InvalidKeyFormat` and the current pair is kept.
    pub fn restore(&mut self) -> Result<bool> {
        match self.store.load()? {
            Some(bundle) => {
                let pair = bundle.to_key_pair()?;
                self.active = Some(pair);
                Ok(true)
            }
            None => {
                self.active = None;
                Ok(false)
            }
        }
    }

    pub fn has_keys(&self) -> bool {
        self.active.is_some()
    }

    /// The active key pair.
    pub fn keys(&self) -> Result<&KeyPair> {
        self.active.as_ref().ok_or(DiaryError::NoKeyPair)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Generate a new pair, persist it and make it active.
    pub fn generate(&mut self) -> Result<&KeyPair> {
        let pair = KeyPair::generate()?;
        self.replace(pair)
    }

    /// Import a pair from base64 text.
    ///
    /// Both halves are parsed before the store is touched; on any failure the
    /// stored and active pairs are left exactly as they were.
    pub fn import_text(&mut self, public_text: &str, private_text: &str) -> Result<&KeyPair> {
        let pair = KeyPair::import_text(public_text, private_text)?;
        self.replace(pair)
    }

    /// Import a pair from an exported key bundle.
    pub fn import_bundle(&mut self, bundle: &KeyBundle) -> Result<&KeyPair> {
        let pair = bundle.to_key_pair()?;
        self.replace(pair)
    }

    /// Text form of the active pair for export.
    pub fn export(&self) -> Result<(String, Zeroizing<String>)> {
        Ok(self.keys()?.export_text())
    }

    /// Active pair as an exportable bundle.
    pub fn export_bundle(&self) -> Result<KeyBundle> {
        Ok(KeyBundle::from_key_pair(self.keys()?))
    }

    /// Clear the store and drop the active pair.
    pub fn logout(&mut self) -> Result<()> {
        self.store.clear()?;
        self.active = None;
        tracing::debug!("cleared active key pair");
        Ok(())
    }

    /// Seal `plaintext` under the active public key.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        envelope::encrypt(plaintext, self.keys()?.public())
    }

    /// Open an envelope with the active private key.
    pub fn decrypt(&self, sealed: &[u8]) -> Result<Vec<u8>> {
        envelope::decrypt(sealed, self.keys()?.private())
    }

    fn replace(&mut self, pair: KeyPair) -> Result<&KeyPair> {
        self.store.save(&KeyBundle::from_key_pair(&pair))?;
        tracing::debug!(fingerprint = %pair.public().fingerprint(), "activated key pair");
        Ok(&*self.active.insert(pair))
    }
}
