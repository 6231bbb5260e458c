//! Hybrid encryption envelopes.
//!
//! An envelope is the single artifact produced for one payload: the content
//! key wrapped under the recipient's RSA public key, the GCM nonce, and the
//! AES-256-GCM ciphertext with its tag. See [`format`] for the byte layout.

pub mod cipher;
pub mod format;

pub use cipher::{decrypt, encrypt, CONTENT_KEY_LEN, NONCE_LEN, TAG_LEN};
pub use format::{Envelope, LENGTH_PREFIX_LEN, MAX_FIELD_LEN};
