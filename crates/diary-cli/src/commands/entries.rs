use chrono::Utc;

use diary_core::naming::{encrypted_name, entry_name};

use crate::app::AppContext;
use crate::cli::WriteArgs;
use crate::errors::CliError;
use crate::helpers::{read_entry_body, write_artifact};

pub fn handle_write(ctx: &AppContext, args: &WriteArgs) -> anyhow::Result<()> {
    let body = read_entry_body(args.body.clone())?;
    if body.is_empty() {
        return Err(CliError::invalid_input("Entry body is empty; nothing to save.").into());
    }

    let session = ctx.session_with_keys()?;
    let sealed = session.encrypt(body.as_bytes())?;

    let name = encrypted_name(&entry_name(Utc::now().timestamp_millis()));
    let path = write_artifact(&ctx.output_dir()?, &name, &sealed, false, None)?;
    ctx.status(format!("Saved encrypted entry to {}", path.display()));
    Ok(())
}
