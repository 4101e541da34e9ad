//! Input helpers for passphrases and record fields.

use dialoguer::{Input, Password};
use zeroize::Zeroizing;

use datavault_core::crypto::validate_passphrase;
use datavault_core::storage::{FieldKind, PersonalData};

use crate::cli::FieldArgs;
use crate::constants::PASSPHRASE_ENV;
use crate::errors::CliError;

fn env_passphrase() -> Option<Zeroizing<String>> {
    std::env::var(PASSPHRASE_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(Zeroizing::new)
}

/// Prompt for passphrase, or read from DATAVAULT_PASSPHRASE env var.
pub fn prompt_passphrase(interactive: bool) -> anyhow::Result<Zeroizing<String>> {
    if let Some(value) = env_passphrase() {
        return Ok(value);
    }
    if !interactive {
        return Err(CliError::invalid_input(format!(
            "No passphrase provided and no TTY available. Set {}.",
            PASSPHRASE_ENV
        ))
        .into());
    }
    let passphrase = Password::new()
        .with_prompt("Passphrase")
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read passphrase: {}", e))?;
    let passphrase = Zeroizing::new(passphrase);
    validate_passphrase(&passphrase).map_err(|e| CliError::invalid_input(e.to_string()))?;
    Ok(passphrase)
}

/// Prompt for a passphrase with confirmation (for new records), or read
/// from DATAVAULT_PASSPHRASE env var.
pub fn prompt_new_passphrase(interactive: bool) -> anyhow::Result<Zeroizing<String>> {
    if let Some(value) = env_passphrase() {
        return Ok(value);
    }
    if !interactive {
        return Err(CliError::invalid_input(format!(
            "No passphrase provided and no TTY available. Set {}.",
            PASSPHRASE_ENV
        ))
        .into());
    }
    loop {
        let passphrase = Zeroizing::new(
            Password::new()
                .with_prompt("Enter passphrase")
                .with_confirmation("Confirm passphrase", "Passphrases do not match")
                .interact()
                .map_err(|e| anyhow::anyhow!("Failed to read passphrase: {}", e))?,
        );
        if let Err(err) = validate_passphrase(&passphrase) {
            eprintln!("{}", err);
            continue;
        }
        return Ok(passphrase);
    }
}

impl FieldArgs {
    /// Value supplied for one field, if any.
    pub fn get(&self, kind: FieldKind) -> Option<&str> {
        match kind {
            FieldKind::Name => self.name.as_deref(),
            FieldKind::IdNumber => self.id_number.as_deref(),
            FieldKind::Address => self.address.as_deref(),
            FieldKind::Phone => self.phone.as_deref(),
        }
    }
}

/// Collect all four fields from flags, prompts, or current values.
///
/// Flags win. Missing fields are prompted for when interactive (with the
/// current value as default when editing); otherwise the current value is
/// kept, and a field with neither is an error.
pub fn read_fields(
    args: &FieldArgs,
    current: Option<&PersonalData>,
    interactive: bool,
) -> anyhow::Result<PersonalData> {
    let field = |kind: FieldKind| -> anyhow::Result<String> {
        match (args.get(kind), current) {
            (Some(value), _) => Ok(value.to_string()),
            (None, current) if interactive => prompt_field(kind, current.map(|c| c.get(kind))),
            (None, Some(current)) => Ok(current.get(kind).to_string()),
            (None, None) => Err(CliError::invalid_input(format!(
                "Missing --{} (interactive prompts disabled)",
                kind.column().replace('_', "-")
            ))
            .into()),
        }
    };

    let data = PersonalData {
        name: field(FieldKind::Name)?,
        id_number: field(FieldKind::IdNumber)?,
        address: field(FieldKind::Address)?,
        phone: field(FieldKind::Phone)?,
    };
    data.ensure_complete()
        .map_err(|e| CliError::invalid_input(e.to_string()))?;
    Ok(data)
}

fn prompt_field(kind: FieldKind, default: Option<&str>) -> anyhow::Result<String> {
    let mut input = Input::<String>::new().with_prompt(kind.label());
    if let Some(value) = default {
        input = input.default(value.to_string());
    }
    input
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", kind.label(), e))
}
