use std::path::PathBuf;

use datavault_core::storage::RecordStore;
use datavault_core::SqliteRecordStore;

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{write_config, VaultConfig};

pub fn handle_init(ctx: &AppContext<'_>, args: &InitArgs) -> anyhow::Result<()> {
    let vault_path = match &args.path {
        Some(path) => PathBuf::from(path),
        None => ctx.vault_path()?,
    };
    let config_path = match &args.config_path {
        Some(path) => PathBuf::from(path),
        None => resolve_config_path()?,
    };

    let store = SqliteRecordStore::open(&vault_path)?;
    let metadata = store.metadata()?;
    let vault_path = std::fs::canonicalize(&vault_path).unwrap_or(vault_path);
    write_config(&config_path, &VaultConfig::new(vault_path.clone()))?;

    if !ctx.quiet() {
        println!("Initialized vault at {}", vault_path.display());
        println!("Format version: {} ({})", metadata.format_version, metadata.cipher);
        println!("Config written to {}", config_path.display());
    }
    Ok(())
}
