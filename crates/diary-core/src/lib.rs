//! # Diary Core
//!
//! Core library for Diary - public-key encryption for journal entries and files.
//!
//! Content is protected with a hybrid envelope: a fresh AES-256-GCM key per
//! payload, wrapped with RSA-OAEP-SHA256 under the owner's public key. Only
//! the holder of the matching private key can open it.
//!
//! ## Architecture
//!
//! - **keys**: key pair generation, SPKI/PKCS#8 import and export, key bundles
//! - **envelope**: hybrid encrypt/decrypt and the binary envelope layout
//! - **store**: the `KeyStore` trait and file/memory implementations
//! - **session**: caller-owned active key pair backed by a store
//! - **naming**: artifact file names (`.enc`, diary entries)
//! - **fs**: atomic, owner-only file writes

pub mod envelope;
pub mod error;
pub mod fs;
pub mod keys;
pub mod naming;
pub mod session;
pub mod store;

pub use error::{DiaryError, Result};
pub use keys::{KeyBundle, KeyPair, PrivateKey, PublicKey};
pub use session::KeySession;
pub use store::{FileKeyStore, KeyStore, MemoryKeyStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
