//! Datavault CLI - passphrase-protected storage for personal data
//!
//! This is the command-line interface for Datavault. It collects input,
//! prompts for passphrases, and formats results; all encryption and
//! storage happen in `datavault-core`.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;

use clap::Parser;
use datavault_core::{VaultError, VERSION};
use tracing::debug;

use crate::app::{resolve_config_path, AppContext};
use crate::cli::{Cli, Commands};
use crate::commands::{init, misc, records};
use crate::config::read_config;
use crate::constants::exit_codes;
use crate::errors::CliError;
use crate::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, configured_log_level().as_deref());
    let ctx = AppContext::new(&cli);

    if let Err(err) = run(&ctx, &cli) {
        exit_with_error(err);
    }
}

/// Logging level from the config file, if one exists and parses.
fn configured_log_level() -> Option<String> {
    let path = resolve_config_path().ok().filter(|p| p.exists())?;
    read_config(&path).ok()?.logging.level
}

fn exit_with_error(err: anyhow::Error) -> ! {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        cli_err.exit()
    }
    if let Some(vault_err) = err.downcast_ref::<VaultError>() {
        debug!(error = ?vault_err, "command failed");
        if let Some(cli_err) = CliError::from_vault(vault_err) {
            cli_err.exit()
        }
    }
    eprintln!("Error: {:#}", err);
    std::process::exit(exit_codes::FAILURE)
}

fn run(ctx: &AppContext<'_>, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => {
            init::handle_init(ctx, args)?;
        }
        Some(Commands::Add(args)) => {
            records::handle_add(ctx, args)?;
        }
        Some(Commands::List(args)) => {
            records::handle_list(ctx, args)?;
        }
        Some(Commands::Show(args)) => {
            records::handle_show(ctx, args)?;
        }
        Some(Commands::Decrypt(args)) => {
            records::handle_decrypt(ctx, args)?;
        }
        Some(Commands::Edit(args)) => {
            records::handle_edit(ctx, args)?;
        }
        Some(Commands::Delete(args)) => {
            records::handle_delete(ctx, args)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
        None => {
            println!("Datavault v{}", VERSION);
            println!("\nQuickstart:");
            println!("  datavault init");
            println!("  datavault add");
            println!("  datavault list");
            println!("  datavault show <id>");
            println!("  datavault decrypt");
            println!("\nRun `datavault --help` for full usage.");
        }
    }

    Ok(())
}
