use std::io::Write;
use std::path::Path;

use diary_core::naming::{decrypted_name, encrypted_name, is_text_name};

use crate::app::AppContext;
use crate::cli::{DecryptArgs, EncryptArgs};
use crate::errors::CliError;
use crate::helpers::{file_name_of, write_artifact};

pub fn handle_encrypt(ctx: &AppContext, args: &EncryptArgs) -> anyhow::Result<()> {
    let plaintext = read_input(&args.file)?;
    let session = ctx.session_with_keys()?;
    let sealed = session.encrypt(&plaintext)?;

    let name = encrypted_name(&file_name_of(&args.file)?);
    let path = write_artifact(
        &ctx.output_dir()?,
        &name,
        &sealed,
        args.force,
        Some(&args.file),
    )?;
    ctx.status(format!("Encrypted {} to {}", args.file.display(), path.display()));
    Ok(())
}

pub fn handle_decrypt(ctx: &AppContext, args: &DecryptArgs) -> anyhow::Result<()> {
    let sealed = read_input(&args.file)?;
    let session = ctx.session_with_keys()?;
    let plaintext = session.decrypt(&sealed).map_err(|e| {
        tracing::debug!(error = %e, "decryption failed");
        if e.is_decryption_failure() {
            anyhow::Error::new(CliError::DecryptFailed)
        } else {
            anyhow::Error::new(e)
        }
    })?;

    let source = file_name_of(&args.file)?;
    let name = decrypted_name(&source);
    if is_text_name(name) && !args.save {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(String::from_utf8_lossy(&plaintext).as_bytes())?;
        stdout.write_all(b"\n")?;
        return Ok(());
    }

    let path = write_artifact(
        &ctx.output_dir()?,
        name,
        &plaintext,
        args.force,
        Some(&args.file),
    )?;
    ctx.status(format!("Decrypted {} to {}", args.file.display(), path.display()));
    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| {
        CliError::not_found(
            format!("Failed to read {}: {}", path.display(), e),
            "Check the file path and try again.",
        )
        .into()
    })
}
