//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// No key pair, or an input file that does not exist.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// An encrypted file could not be opened with the active keys.
    pub const DECRYPT_FAILED: i32 = 5;
}

/// Default file name for `keys export`.
pub const DEFAULT_EXPORT_FILE: &str = "diary-keys.json";

/// Keychain service name.
pub const KEYCHAIN_SERVICE: &str = "diary";

/// Keychain account holding the key bundle.
pub const KEYCHAIN_ACCOUNT: &str = "keys";

/// Shown for every decryption failure, whatever step failed.
pub const DECRYPT_FAILED_MESSAGE: &str =
    "Error decrypting file. Make sure you're using the correct keys.";
