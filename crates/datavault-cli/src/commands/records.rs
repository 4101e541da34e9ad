use datavault_core::storage::Record;
use datavault_core::{RecordService, SqliteRecordStore};

use crate::app::AppContext;
use crate::cli::{AddArgs, DecryptArgs, DeleteArgs, EditArgs, ListArgs, ShowArgs};
use crate::errors::CliError;
use crate::helpers::{prompt_new_passphrase, prompt_passphrase, read_fields};
use crate::output::{
    decrypted_json, outcomes_json, print_decrypted, print_outcomes, print_record_list,
    records_json,
};

fn require_record(service: &RecordService<SqliteRecordStore>, id: i64) -> anyhow::Result<Record> {
    service.find(id)?.ok_or_else(|| {
        CliError::not_found(
            format!("Record {} not found", id),
            "Hint: Run `datavault list` to see record IDs.",
        )
        .into()
    })
}

pub fn handle_add(ctx: &AppContext<'_>, args: &AddArgs) -> anyhow::Result<()> {
    let interactive = ctx.interactive(args.no_input);
    let fields = read_fields(&args.fields, None, interactive)?;
    let passphrase = prompt_new_passphrase(interactive)?;

    let mut service = ctx.open_service()?;
    let id = service.insert(&fields, &passphrase)?;

    if !ctx.quiet() {
        println!("Encrypted and saved record {}", id);
    }
    Ok(())
}

pub fn handle_list(ctx: &AppContext<'_>, args: &ListArgs) -> anyhow::Result<()> {
    let service = ctx.open_service()?;
    let records = service.read_all()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records_json(&records))?);
    } else {
        print_record_list(&records);
    }
    Ok(())
}

pub fn handle_show(ctx: &AppContext<'_>, args: &ShowArgs) -> anyhow::Result<()> {
    let service = ctx.open_service()?;
    let record = require_record(&service, args.id)?;

    let passphrase = prompt_passphrase(ctx.interactive(args.no_input))?;
    let data = service.decrypt_record(&record, &passphrase)?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&decrypted_json(record.id, &data))?
        );
    } else {
        print_decrypted(record.id, &data);
    }
    Ok(())
}

pub fn handle_decrypt(ctx: &AppContext<'_>, args: &DecryptArgs) -> anyhow::Result<()> {
    let service = ctx.open_service()?;
    let passphrase = prompt_passphrase(ctx.interactive(args.no_input))?;
    let outcomes = service.decrypt_all(&passphrase)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcomes_json(&outcomes))?);
    } else {
        print_outcomes(&outcomes);
    }
    Ok(())
}

/// Decrypt the selected record, take new values, and re-encrypt with the
/// same passphrase. The record must decrypt before anything is changed.
pub fn handle_edit(ctx: &AppContext<'_>, args: &EditArgs) -> anyhow::Result<()> {
    let interactive = ctx.interactive(args.no_input);
    let mut service = ctx.open_service()?;
    let record = require_record(&service, args.id)?;

    let passphrase = prompt_passphrase(interactive)?;
    let current = service.decrypt_record(&record, &passphrase)?;
    let updated = read_fields(&args.fields, Some(&current), interactive)?;

    service.update(record.id, &updated, &passphrase)?;

    if !ctx.quiet() {
        println!("Updated record {}", record.id);
    }
    Ok(())
}

pub fn handle_delete(ctx: &AppContext<'_>, args: &DeleteArgs) -> anyhow::Result<()> {
    let mut service = ctx.open_service()?;
    service.delete(args.id)?;

    if !ctx.quiet() {
        println!("Deleted record {}", args.id);
    }
    Ok(())
}
