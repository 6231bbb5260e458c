//! File naming for encrypted artifacts.
//!
//! - encrypting `photo.jpg` produces `photo.jpg.enc`
//! - a diary entry written at millisecond `t` is `diary-entry-<t>.txt`
//! - decrypting `x.enc` restores `x`; `.txt` artifacts are shown as text

/// Suffix appended to every encrypted artifact.
pub const ENCRYPTED_SUFFIX: &str = ".enc";

/// Suffix marking an artifact whose plaintext is UTF-8 text.
pub const TEXT_SUFFIX: &str = ".txt";

const ENTRY_PREFIX: &str = "diary-entry-";

/// Name of the encrypted artifact for `name`.
pub fn encrypted_name(name: &str) -> String {
    format!("{}{}", name, ENCRYPTED_SUFFIX)
}

/// Name of the plaintext artifact recovered from `name`.
///
/// Only a trailing `.enc` is removed; a name without it is returned as-is.
pub fn decrypted_name(name: &str) -> &str {
    match name.strip_suffix(ENCRYPTED_SUFFIX) {
        Some(stem) if !stem.is_empty() => stem,
        _ => name,
    }
}

/// Plaintext name for a diary entry created at `timestamp_millis`.
pub fn entry_name(timestamp_millis: i64) -> String {
    format!("{}{}{}", ENTRY_PREFIX, timestamp_millis, TEXT_SUFFIX)
}

/// Whether a (decrypted) artifact name denotes text content.
pub fn is_text_name(name: &str) -> bool {
    name.ends_with(TEXT_SUFFIX)
}
