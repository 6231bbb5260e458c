//! Key store abstraction.
//!
//! The core never touches a storage medium directly. Whatever holds the key
//! pair between sessions (a file, the OS keychain, memory in tests)
//! implements `KeyStore`, and the session layer talks only to the trait.
//!
//! Stores persist the [`KeyBundle`] text form. They do not parse key
//! material; that happens when the session turns a bundle into a key pair.

pub mod file;
pub mod memory;

pub use file::FileKeyStore;
pub use memory::MemoryKeyStore;

use crate::error::Result;
use crate::keys::KeyBundle;

/// Persistence for the active key pair.
///
/// All implementations must ensure:
/// - `save` fully replaces any previously stored pair
/// - `clear` succeeds when nothing is stored
/// - `load` after `clear` returns `Ok(None)`
pub trait KeyStore: Send + Sync {
    /// Load the stored key pair, if any.
    fn load(&self) -> Result<Option<KeyBundle>>;

    /// Persist a key pair, replacing whatever was stored.
    fn save(&self, keys: &KeyBundle) -> Result<()>;

    /// Forget the stored key pair.
    fn clear(&self) -> Result<()>;
}

impl<S: KeyStore + ?Sized> KeyStore for Box<S> {
    fn load(&self) -> Result<Option<KeyBundle>> {
        (**self).load()
    }

    fn save(&self, keys: &KeyBundle) -> Result<()> {
        (**self).save(keys)
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_object_compiles() {
        fn _accepts_store<T: KeyStore>(_store: T) {}
        let boxed: Box<dyn KeyStore> = Box::new(MemoryKeyStore::new());
        _accepts_store(boxed);
    }
}
