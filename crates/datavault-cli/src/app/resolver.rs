//! Path resolution for config and vault files.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{default_config_path, default_vault_path, read_config};
use crate::constants::CONFIG_ENV;

/// Resolve the config file path, checking DATAVAULT_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(CONFIG_ENV) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the vault database path.
///
/// Precedence: `--db` / DATAVAULT_DB, then the config file, then the
/// default data directory.
pub fn resolve_vault_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.db.as_ref().filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }

    let config_path = resolve_config_path()?;
    if config_path.exists() {
        let config = read_config(&config_path)?;
        return Ok(PathBuf::from(config.vault.path));
    }

    default_vault_path()
}
