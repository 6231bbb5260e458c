//! Key store backed by a JSON key file.
//!
//! The file uses the same `{ publicKey, privateKey }` document as key
//! exports, so a stored key file can be handed straight to `keys import`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::KeyStore;
use crate::error::{DiaryError, Result};
use crate::fs::write_atomic;
use crate::keys::KeyBundle;

/// Stores the key pair in a single owner-only file.
#[derive(Debug, Clone)]
pub struct FileKeyStore {
    path: PathBuf,
}

impl FileKeyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyStore for FileKeyStore {
    fn load(&self) -> Result<Option<KeyBundle>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => zeroize::Zeroizing::new(contents),
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(DiaryError::KeyStore(format!(
                    "Failed to read key file {}: {}",
                    self.path.display(),
                    err
                )))
            }
        };
        let keys = KeyBundle::from_json(&contents)?;
        tracing::debug!(path = %self.path.display(), "loaded key file");
        Ok(Some(keys))
    }

    fn save(&self, keys: &KeyBundle) -> Result<()> {
        let json = keys.to_json()?;
        write_atomic(&self.path, json.as_bytes(), true).map_err(|e| {
            DiaryError::KeyStore(format!(
                "Failed to write key file {}: {}",
                self.path.display(),
                e
            ))
        })?;
        tracing::debug!(path = %self.path.display(), "saved key file");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "removed key file");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(DiaryError::KeyStore(format!(
                "Failed to remove key file {}: {}",
                self.path.display(),
                err
            ))),
        }
    }
}
