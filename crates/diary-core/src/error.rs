//! Error types for Diary core operations.
//!
//! This module defines the error hierarchy for all core operations.
//! Errors are descriptive at the core level; the CLI layer will map these
//! to user-friendly messages.

use thiserror::Error;

/// Result type alias for Diary operations.
pub type Result<T> = std::result::Result<T, DiaryError>;

/// Core error type for Diary operations.
#[derive(Debug, Error)]
pub enum DiaryError {
    /// The RSA primitive could not produce a key pair
    #[error("Key generation failed: {0}")]
    KeyGeneration(String),

    /// Key bytes (or their text encoding) could not be parsed
    #[error("Invalid key format: {0}")]
    InvalidKeyFormat(String),

    /// A primitive failed while building an envelope
    #[error("Encryption failed: {0}")]
    Encryption(String),

    /// Envelope framing is inconsistent with its length prefixes
    #[error("Malformed envelope: {0}")]
    MalformedEnvelope(String),

    /// The wrapped content key could not be recovered.
    ///
    /// Carries no detail: a wrong private key, a corrupted wrapped key and an
    /// OAEP padding mismatch must all look the same to the caller.
    #[error("Failed to unwrap content key")]
    KeyUnwrap,

    /// The GCM tag did not verify
    #[error("Authentication failed: ciphertext was modified or the key is wrong")]
    Authentication,

    /// Key store backend error
    #[error("Key store error: {0}")]
    KeyStore(String),

    /// An operation needed the active key pair but none is loaded
    #[error("No key pair loaded")]
    NoKeyPair,

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

impl DiaryError {
    /// Whether this error came out of `decrypt` for bad input or bad keys.
    ///
    /// Callers should collapse all of these into one generic message so the
    /// failing step is not revealed.
    pub fn is_decryption_failure(&self) -> bool {
        matches!(
            self,
            DiaryError::MalformedEnvelope(_) | DiaryError::KeyUnwrap | DiaryError::Authentication
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decryption_failures_grouped() {
        assert!(DiaryError::KeyUnwrap.is_decryption_failure());
        assert!(DiaryError::Authentication.is_decryption_failure());
        assert!(DiaryError::MalformedEnvelope("short".to_string()).is_decryption_failure());
        assert!(!DiaryError::NoKeyPair.is_decryption_failure());
        assert!(!DiaryError::Encryption("x".to_string()).is_decryption_failure());
    }

    #[test]
    fn test_key_unwrap_message_has_no_detail() {
        assert_eq!(
            DiaryError::KeyUnwrap.to_string(),
            "Failed to unwrap content key"
        );
    }
}
