use crate::app::AppContext;
use crate::cli::LogoutArgs;
use crate::constants::DEFAULT_EXPORT_FILE;
use crate::helpers::confirm;

use super::keys::export_to;

/// Clear the stored keys, offering an export first.
///
/// Keys that cannot be read are still cleared; only the export is skipped.
pub fn handle_logout(ctx: &AppContext, args: &LogoutArgs) -> anyhow::Result<()> {
    let mut session = ctx.session()?;
    let readable = match session.restore() {
        Ok(true) => true,
        Ok(false) => {
            ctx.status("No stored keys; nothing to clear.");
            return Ok(());
        }
        Err(e) => {
            tracing::warn!(error = %e, "stored keys are unreadable");
            if !ctx.quiet() {
                eprintln!(
                    "Warning: stored keys could not be read ({}); clearing them without export.",
                    e
                );
            }
            false
        }
    };

    if readable {
        if let Some(path) = &args.export {
            export_to(ctx, &session, path, false)?;
        } else if !args.no_input {
            let wants_export = confirm(
                "Would you like to export your keys before logging out?",
                true,
            )?;
            if wants_export == Some(true) {
                let path = ctx.output_dir()?.join(DEFAULT_EXPORT_FILE);
                export_to(ctx, &session, &path, false)?;
            }
        }
    }

    session.logout()?;
    ctx.status("Logged out. Stored keys removed.");
    Ok(())
}
