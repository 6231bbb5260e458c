//! Application-level utilities for the Diary CLI.
//!
//! This module provides:
//! - Path resolution for config, key store and output directory
//! - The per-invocation context that opens the key session

mod context;
mod resolver;

// Re-export public API
pub use context::{AppContext, Session};
pub use resolver::{resolve_config_path, resolve_key_store, resolve_output_dir};
