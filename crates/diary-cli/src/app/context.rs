//! Application context for the Diary CLI.
//!
//! Provides a unified context that combines CLI arguments with
//! lazily-loaded configuration.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use diary_core::{KeySession, KeyStore};

use crate::cli::Cli;
use crate::config::{read_config, DiaryConfig};
use crate::errors::CliError;

use super::resolver::{resolve_config_path, resolve_key_store, resolve_output_dir};

/// Key session over whichever store the invocation resolved to.
pub type Session = KeySession<Box<dyn KeyStore>>;

/// Application context that bundles CLI args with configuration.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<DiaryConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&DiaryConfig> {
        self.config.get_or_try_init(|| {
            let path = resolve_config_path(self.cli)?;
            tracing::debug!(path = %path.display(), "loading config");
            read_config(&path)
        })
    }

    pub fn output_dir(&self) -> anyhow::Result<PathBuf> {
        Ok(resolve_output_dir(self.cli, self.config()?))
    }

    /// Open a session without loading keys.
    pub fn session(&self) -> anyhow::Result<Session> {
        let store = resolve_key_store(self.cli, self.config()?)?;
        Ok(KeySession::new(store))
    }

    /// Open a session and load the stored key pair, failing when there is none.
    pub fn session_with_keys(&self) -> anyhow::Result<Session> {
        let mut session = self.session()?;
        if !session.restore()? {
            return Err(CliError::no_keys().into());
        }
        Ok(session)
    }

    /// Print a status line unless quiet.
    pub fn status(&self, message: impl std::fmt::Display) {
        if !self.quiet() {
            println!("{}", message);
        }
    }
}
