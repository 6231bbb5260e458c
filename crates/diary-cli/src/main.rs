//! Diary CLI - public-key encryption for journal entries and files
//!
//! This is the command-line interface for Diary. It provides a user-friendly
//! interface to the core library functionality.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod security;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::app::AppContext;
use crate::cli::{Cli, Commands, KeysSubcommand};
use crate::commands::{entries, files, keys, logout, misc};
use crate::errors::CliError;

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        if let Some(cli_error) = e.downcast_ref::<CliError>() {
            cli_error.exit();
        }
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so decrypted text on stdout stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("DIARY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Keys(args) => match &args.command {
            KeysSubcommand::Generate(generate_args) => {
                keys::handle_generate(ctx, generate_args)?;
            }
            KeysSubcommand::Import(import_args) => {
                keys::handle_import(ctx, import_args)?;
            }
            KeysSubcommand::Export(export_args) => {
                keys::handle_export(ctx, export_args)?;
            }
            KeysSubcommand::Show(show_args) => {
                keys::handle_show(ctx, show_args)?;
            }
        },
        Commands::Logout(args) => {
            logout::handle_logout(ctx, args)?;
        }
        Commands::Write(args) => {
            entries::handle_write(ctx, args)?;
        }
        Commands::Encrypt(args) => {
            files::handle_encrypt(ctx, args)?;
        }
        Commands::Decrypt(args) => {
            files::handle_decrypt(ctx, args)?;
        }
        Commands::Completions(args) => {
            misc::handle_completions(args)?;
        }
    }
    Ok(())
}
