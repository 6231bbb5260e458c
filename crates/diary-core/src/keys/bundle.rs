//! Key bundle: the JSON document used to move a key pair between machines.
//!
//! ```json
//! {
//!   "publicKey": "<base64 SPKI>",
//!   "privateKey": "<base64 PKCS#8>"
//! }
//! ```

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::keypair::KeyPair;
use crate::error::{DiaryError, Result};

/// Text form of a key pair, as persisted by key stores and export files.
///
/// The bundle is only a container: it is not validated as key material until
/// [`KeyBundle::to_key_pair`] is called.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct KeyBundle {
    public_key: String,
    private_key: String,
}

impl KeyBundle {
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: private_key.into(),
        }
    }

    /// Text form of an existing key pair.
    pub fn from_key_pair(pair: &KeyPair) -> Self {
        let (public_key, private_key) = pair.export_text();
        Self::new(public_key, private_key.as_str())
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    pub fn private_key(&self) -> &str {
        &self.private_key
    }

    /// Parse the bundle's text into a usable key pair.
    pub fn to_key_pair(&self) -> Result<KeyPair> {
        KeyPair::import_text(&self.public_key, &self.private_key)
    }

    /// Serialize as pretty-printed JSON (two-space indent).
    pub fn to_json(&self) -> Result<Zeroizing<String>> {
        Ok(Zeroizing::new(serde_json::to_string_pretty(self)?))
    }

    /// Parse a bundle document.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::InvalidKeyFormat` if the document is not a JSON
    /// object with non-empty `publicKey` and `privateKey` strings.
    pub fn from_json(text: &str) -> Result<Self> {
        let bundle: KeyBundle = serde_json::from_str(text)
            .map_err(|e| DiaryError::InvalidKeyFormat(format!("invalid key file: {}", e)))?;
        if bundle.public_key.trim().is_empty() || bundle.private_key.trim().is_empty() {
            return Err(DiaryError::InvalidKeyFormat(
                "key file must contain both publicKey and privateKey".to_string(),
            ));
        }
        Ok(bundle)
    }
}

impl std::fmt::Debug for KeyBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyBundle")
            .field("public_key", &self.public_key)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}
