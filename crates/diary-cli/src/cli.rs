use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use diary_core::VERSION;

/// Diary - public-key encryption for journal entries and files
#[derive(Parser)]
#[command(name = "diary")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Key file to use instead of the configured key store
    #[arg(long, global = true, env = "DIARY_KEY_FILE", value_name = "PATH")]
    pub key_file: Option<PathBuf>,

    /// Directory for encrypted and decrypted output files
    #[arg(short, long, global = true, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage the key pair
    Keys(KeysArgs),

    /// Forget the stored key pair
    Logout(LogoutArgs),

    /// Encrypt a new diary entry
    Write(WriteArgs),

    /// Encrypt a file
    Encrypt(EncryptArgs),

    /// Decrypt a file produced by `encrypt` or `write`
    Decrypt(DecryptArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `keys` command
#[derive(Args)]
pub struct KeysArgs {
    #[command(subcommand)]
    pub command: KeysSubcommand,
}

#[derive(Subcommand)]
pub enum KeysSubcommand {
    /// Generate a new key pair
    Generate(GenerateArgs),

    /// Import a key pair from an exported key file or base64 text
    Import(ImportArgs),

    /// Export the key pair as a JSON key file
    Export(ExportArgs),

    /// Show the active key pair
    Show(ShowArgs),
}

/// Arguments for `keys generate`
#[derive(Args)]
pub struct GenerateArgs {
    /// Replace an existing key pair
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `keys import`
#[derive(Args)]
pub struct ImportArgs {
    /// Exported key file (`{ "publicKey": ..., "privateKey": ... }`)
    #[arg(long, value_name = "PATH", conflicts_with_all = ["public", "private"])]
    pub file: Option<PathBuf>,

    /// Base64 SPKI public key
    #[arg(long, requires = "private")]
    pub public: Option<String>,

    /// Base64 PKCS#8 private key
    #[arg(long, requires = "public")]
    pub private: Option<String>,
}

/// Arguments for `keys export`
#[derive(Args)]
pub struct ExportArgs {
    /// Output path (`-` for stdout)
    #[arg(long, short = 'O', value_name = "PATH", default_value = crate::constants::DEFAULT_EXPORT_FILE)]
    pub output: String,

    /// Replace an existing file at the output path
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `keys show`
#[derive(Args)]
pub struct ShowArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `logout` command
#[derive(Args)]
pub struct LogoutArgs {
    /// Export the key pair to this path before clearing it
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `write` command
#[derive(Args)]
pub struct WriteArgs {
    /// Entry body (overrides stdin)
    #[arg(long)]
    pub body: Option<String>,
}

/// Arguments for the `encrypt` command
#[derive(Args)]
pub struct EncryptArgs {
    /// File to encrypt
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Replace an existing `.enc` file in the output directory
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `decrypt` command
#[derive(Args)]
pub struct DecryptArgs {
    /// Encrypted file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Write text entries to the output directory instead of printing them
    #[arg(long)]
    pub save: bool,

    /// Replace an existing file in the output directory
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
