//! Application context for the Datavault CLI.

use std::io::IsTerminal;
use std::path::PathBuf;

use datavault_core::{RecordService, SqliteRecordStore};
use tracing::debug;

use crate::cli::Cli;

use super::resolver::resolve_vault_path;

/// Application context that bundles CLI args with path resolution.
pub struct AppContext<'a> {
    cli: &'a Cli,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self { cli }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Whether prompts may be shown.
    pub fn interactive(&self, no_input: bool) -> bool {
        std::io::stdin().is_terminal() && !no_input
    }

    /// Resolve the vault database path.
    pub fn vault_path(&self) -> anyhow::Result<PathBuf> {
        resolve_vault_path(self.cli)
    }

    /// Open the record service over the resolved vault.
    pub fn open_service(&self) -> anyhow::Result<RecordService<SqliteRecordStore>> {
        let path = self.vault_path()?;
        debug!(path = %path.display(), "opening vault");
        let store = SqliteRecordStore::open(&path)?;
        Ok(RecordService::new(store))
    }
}
