//! Input handling helpers for entry bodies and prompts.

use std::io::{self, IsTerminal, Read};

use dialoguer::Confirm;

/// Read entry body from --body flag or stdin.
///
/// Stdin is taken byte-for-byte (trailing newline included) so the entry
/// decrypts to exactly what was piped in.
pub fn read_entry_body(body: Option<String>) -> anyhow::Result<String> {
    if let Some(value) = body {
        return Ok(value);
    }

    if io::stdin().is_terminal() {
        return Err(anyhow::anyhow!(
            "No entry body; use --body or pipe content via stdin"
        ));
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
    Ok(buffer)
}

/// Ask a yes/no question; `None` when no TTY is available to ask on.
pub fn confirm(prompt: &str, default: bool) -> anyhow::Result<Option<bool>> {
    if !io::stdin().is_terminal() || !io::stderr().is_terminal() {
        return Ok(None);
    }
    Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map(Some)
        .map_err(|e| anyhow::anyhow!("Failed to read answer: {}", e))
}
