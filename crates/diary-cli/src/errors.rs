//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use crate::constants::DECRYPT_FAILED_MESSAGE;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (key pair, input file)
    NotFound { message: String, hint: String },

    /// Decryption failed; deliberately carries no detail
    DecryptFailed,

    /// Invalid user input
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::DecryptFailed => write!(f, "{}", DECRYPT_FAILED_MESSAGE),
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// NotFound error for a command that needs keys when none are stored.
    pub fn no_keys() -> Self {
        Self::not_found(
            "No keys found.",
            "Run:\n  diary keys generate\n\nOr import existing keys:\n  diary keys import --file diary-keys.json",
        )
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use super::constants::exit_codes;
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::DecryptFailed => exit_codes::DECRYPT_FAILED,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }

    /// Print error message to stderr and exit with appropriate code.
    pub fn exit(&self) -> ! {
        match self {
            CliError::DecryptFailed => eprintln!("{}", self),
            _ => eprintln!("Error: {}", self),
        }
        std::process::exit(self.exit_code())
    }
}
