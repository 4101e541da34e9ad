use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use datavault_core::VERSION;

/// Datavault - passphrase-protected storage for personal data
#[derive(Parser)]
#[command(name = "datavault")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the vault database
    #[arg(short, long, global = true, env = "DATAVAULT_DB")]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a vault and write the config file
    Init(InitArgs),

    /// Encrypt and store a new record
    Add(AddArgs),

    /// List stored records (still encrypted)
    List(ListArgs),

    /// Decrypt and show one record
    Show(ShowArgs),

    /// Decrypt every record with one passphrase
    Decrypt(DecryptArgs),

    /// Decrypt, change, and re-encrypt a record
    Edit(EditArgs),

    /// Delete a record
    Delete(DeleteArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Path where the vault will be created
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Config path override
    #[arg(long)]
    pub config_path: Option<String>,
}

/// Personal field values supplied on the command line
#[derive(Args, Default)]
pub struct FieldArgs {
    /// Full name
    #[arg(long)]
    pub name: Option<String>,

    /// National ID number
    #[arg(long)]
    pub id_number: Option<String>,

    /// Address
    #[arg(long)]
    pub address: Option<String>,

    /// Phone number
    #[arg(long)]
    pub phone: Option<String>,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    #[command(flatten)]
    pub fields: FieldArgs,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Record ID
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `decrypt` command
#[derive(Args)]
pub struct DecryptArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Record ID
    #[arg(value_name = "ID")]
    pub id: i64,

    #[command(flatten)]
    pub fields: FieldArgs,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Record ID
    #[arg(value_name = "ID")]
    pub id: i64,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}
