//! Input and output helper functions for the CLI.
//!
//! This module provides utilities for:
//! - Entry body reading and confirmation prompts (`input`)
//! - Writing artifacts into the output directory (`output`)

mod input;
mod output;

// Re-export public API
pub use input::{confirm, read_entry_body};
pub use output::{file_name_of, write_artifact, write_output};
