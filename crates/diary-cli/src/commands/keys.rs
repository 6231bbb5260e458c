use std::path::Path;

use diary_core::keys::RSA_MODULUS_BITS;
use diary_core::{KeyBundle, KeyStore};

use crate::app::{AppContext, Session};
use crate::cli::{ExportArgs, GenerateArgs, ImportArgs, ShowArgs};
use crate::errors::CliError;
use crate::helpers::write_output;

pub fn handle_generate(ctx: &AppContext, args: &GenerateArgs) -> anyhow::Result<()> {
    let mut session = ctx.session()?;
    if !args.force && session.store().load()?.is_some() {
        return Err(CliError::invalid_input(
            "Keys already exist. Export them first, then run `diary keys generate --force` to replace them.",
        )
        .into());
    }

    if !ctx.quiet() {
        eprintln!("Generating {}-bit RSA key pair...", RSA_MODULUS_BITS);
    }
    let fingerprint = session.generate()?.public().fingerprint();
    ctx.status(format!("Generated key pair {}", fingerprint));
    Ok(())
}

pub fn handle_import(ctx: &AppContext, args: &ImportArgs) -> anyhow::Result<()> {
    let mut session = ctx.session()?;

    let pair = match (&args.file, &args.public, &args.private) {
        (Some(path), _, _) => {
            let contents = std::fs::read_to_string(path).map_err(|e| {
                CliError::not_found(
                    format!("Failed to read key file {}: {}", path.display(), e),
                    "Pass the JSON file written by `diary keys export`.",
                )
            })?;
            let bundle = KeyBundle::from_json(&zeroize::Zeroizing::new(contents))
                .map_err(|e| CliError::invalid_input(e.to_string()))?;
            session.import_bundle(&bundle)
        }
        (None, Some(public), Some(private)) => session.import_text(public, private),
        _ => {
            return Err(CliError::invalid_input(
                "Nothing to import. Use --file <PATH> or --public <B64> --private <B64>.",
            )
            .into())
        }
    };

    let pair = pair.map_err(|e| CliError::invalid_input(e.to_string()))?;
    ctx.status(format!("Imported key pair {}", pair.public().fingerprint()));
    Ok(())
}

pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let session = ctx.session_with_keys()?;
    if args.output == "-" {
        let json = session.export_bundle()?.to_json()?;
        println!("{}", json.as_str());
        return Ok(());
    }
    export_to(ctx, &session, Path::new(&args.output), args.force)
}

/// Write the active pair as a key file at `path`.
pub fn export_to(
    ctx: &AppContext,
    session: &Session,
    path: &Path,
    force: bool,
) -> anyhow::Result<()> {
    let json = session.export_bundle()?.to_json()?;
    write_output(path, json.as_bytes(), true, force, None)?;
    tracing::debug!(path = %path.display(), "exported keys");
    ctx.status(format!("Exported keys to {}", path.display()));
    Ok(())
}

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let session = ctx.session_with_keys()?;
    let public = session.keys()?.public();

    if args.json {
        let value = serde_json::json!({
            "fingerprint": public.fingerprint(),
            "bits": public.bits(),
            "public_key": public.to_base64(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Fingerprint: {}", public.fingerprint());
    println!("Key size: {} bits", public.bits());
    Ok(())
}
