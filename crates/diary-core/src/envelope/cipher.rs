//! Hybrid RSA-OAEP + AES-256-GCM encryption.
//!
//! Every call to [`encrypt`] draws a fresh 256-bit content key and a fresh
//! 96-bit nonce from the OS random source, encrypts the payload under them,
//! and wraps the content key with RSA-OAEP (SHA-256 for both the digest and
//! MGF1) under the recipient's public key. Only the 32-byte content key ever
//! goes through RSA, so payload size is unbounded by the modulus.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use rand::rngs::OsRng;
use rsa::Oaep;
use sha2::Sha256;
use zeroize::Zeroizing;

use super::format::Envelope;
use crate::error::{DiaryError, Result};
use crate::keys::{PrivateKey, PublicKey};

/// AES-256 content key length.
pub const CONTENT_KEY_LEN: usize = 32;

/// AES-GCM nonce length.
pub const NONCE_LEN: usize = 12;

/// AES-GCM authentication tag length.
pub const TAG_LEN: usize = 16;

fn generate_content_key() -> Result<Zeroizing<[u8; CONTENT_KEY_LEN]>> {
    let mut key = Zeroizing::new([0u8; CONTENT_KEY_LEN]);
    getrandom::getrandom(&mut key[..])
        .map_err(|e| DiaryError::Encryption(format!("Failed to generate content key: {}", e)))?;
    Ok(key)
}

fn generate_nonce() -> Result<[u8; NONCE_LEN]> {
    let mut nonce = [0u8; NONCE_LEN];
    getrandom::getrandom(&mut nonce)
        .map_err(|e| DiaryError::Encryption(format!("Failed to generate nonce: {}", e)))?;
    Ok(nonce)
}

/// Seal a payload for the holder of `recipient`'s private key.
///
/// Returns the serialized envelope:
/// `[wkl:2][wrapped key][ivl:2][iv][ciphertext + tag]`.
///
/// # Errors
///
/// Returns `DiaryError::Encryption` if the random source, AES-GCM or
/// RSA-OAEP fails.
///
/// # Examples
///
/// ```no_run
/// use diary_core::{envelope, KeyPair};
///
/// let pair = KeyPair::generate().unwrap();
/// let sealed = envelope::encrypt(b"hello diary", pair.public()).unwrap();
/// let opened = envelope::decrypt(&sealed, pair.private()).unwrap();
/// assert_eq!(opened, b"hello diary");
/// ```
pub fn encrypt(plaintext: &[u8], recipient: &PublicKey) -> Result<Vec<u8>> {
    let content_key = generate_content_key()?;
    let nonce = generate_nonce()?;

    let cipher = Aes256Gcm::new_from_slice(&content_key[..])
        .map_err(|e| DiaryError::Encryption(e.to_string()))?;
    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce), plaintext)
        .map_err(|e| DiaryError::Encryption(format!("AES-GCM encryption failed: {}", e)))?;

    let wrapped_key = recipient
        .rsa()
        .encrypt(&mut OsRng, Oaep::new::<Sha256>(), &content_key[..])
        .map_err(|e| DiaryError::Encryption(format!("RSA-OAEP key wrap failed: {}", e)))?;

    let sealed = Envelope::new(&wrapped_key, &nonce, &ciphertext).to_bytes()?;
    tracing::debug!(
        plaintext_len = plaintext.len(),
        envelope_len = sealed.len(),
        "sealed envelope"
    );
    Ok(sealed)
}

/// Open an envelope with the matching private key.
///
/// # Errors
///
/// - `DiaryError::MalformedEnvelope` if the framing is truncated, or if the
///   iv is not exactly 12 bytes. The iv length prefix can describe any
///   length, but only 96-bit GCM nonces are accepted here; an envelope with
///   a well-formed prefix and another iv length is still rejected.
/// - `DiaryError::KeyUnwrap` if the content key cannot be recovered (wrong
///   key, corrupted wrapped key, or padding failure; these are not told apart)
/// - `DiaryError::Authentication` if the GCM tag does not verify
pub fn decrypt(sealed: &[u8], key: &PrivateKey) -> Result<Vec<u8>> {
    let envelope = Envelope::parse(sealed)?;
    if envelope.iv().len() != NONCE_LEN {
        return Err(DiaryError::MalformedEnvelope(format!(
            "iv is {} bytes, expected {}",
            envelope.iv().len(),
            NONCE_LEN
        )));
    }

    let content_key = key
        .rsa()
        .decrypt_blinded(&mut OsRng, Oaep::new::<Sha256>(), envelope.wrapped_key())
        .map(Zeroizing::new)
        .map_err(|_| DiaryError::KeyUnwrap)?;
    if content_key.len() != CONTENT_KEY_LEN {
        return Err(DiaryError::KeyUnwrap);
    }

    let cipher =
        Aes256Gcm::new_from_slice(content_key.as_slice()).map_err(|_| DiaryError::KeyUnwrap)?;
    let plaintext = cipher
        .decrypt(Nonce::from_slice(envelope.iv()), envelope.ciphertext())
        .map_err(|_| DiaryError::Authentication)?;

    tracing::debug!(
        envelope_len = sealed.len(),
        plaintext_len = plaintext.len(),
        "opened envelope"
    );
    Ok(plaintext)
}
