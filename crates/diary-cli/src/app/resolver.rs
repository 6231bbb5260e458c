//! Path resolution for config, key store and output files.

use std::path::PathBuf;

use diary_core::{FileKeyStore, KeyStore};

use crate::cli::Cli;
use crate::config::{default_config_path, default_key_file_path, DiaryConfig, KeyStoreKind};
use crate::security::KeychainKeyStore;

/// Resolve the config file path: `--config`, then DIARY_CONFIG, then the XDG default.
pub fn resolve_config_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.config.clone() {
        return Ok(path);
    }
    if let Ok(value) = std::env::var("DIARY_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Pick the key store. An explicit `--key-file` always wins over config.
pub fn resolve_key_store(cli: &Cli, config: &DiaryConfig) -> anyhow::Result<Box<dyn KeyStore>> {
    if let Some(path) = cli.key_file.clone() {
        tracing::debug!(path = %path.display(), "using key file from command line");
        return Ok(Box::new(FileKeyStore::new(path)));
    }

    match config.keys.store {
        KeyStoreKind::Keychain => {
            tracing::debug!("using keychain key store");
            Ok(Box::new(KeychainKeyStore::new()))
        }
        KeyStoreKind::File => {
            let path = match &config.keys.path {
                Some(path) => PathBuf::from(path),
                None => default_key_file_path()?,
            };
            tracing::debug!(path = %path.display(), "using key file");
            Ok(Box::new(FileKeyStore::new(path)))
        }
    }
}

/// Output directory: `--output-dir`, then `[output] dir`, then the working directory.
pub fn resolve_output_dir(cli: &Cli, config: &DiaryConfig) -> PathBuf {
    if let Some(dir) = cli.output_dir.clone() {
        return dir;
    }
    config
        .output
        .dir
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}
