//! Text and table output formatting for records.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use datavault_core::storage::{FieldKind, PersonalData, Record};
use datavault_core::DecryptOutcome;

/// Ciphertext is long and meaningless to read; show only its start.
const CIPHERTEXT_PREVIEW: usize = 24;

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn field_headers(first: &str) -> Vec<&str> {
    let mut headers = vec![first];
    headers.extend(FieldKind::ALL.iter().map(|k| k.label()));
    headers
}

/// Print stored records with their ciphertext.
pub fn print_record_list(records: &[Record]) {
    if records.is_empty() {
        println!("No records stored.");
        return;
    }

    let mut table = new_table();
    table.set_header(field_headers("ID"));
    for record in records {
        let mut row = vec![record.id.to_string()];
        row.extend(
            FieldKind::ALL
                .iter()
                .map(|k| truncate(record.fields.get(*k), CIPHERTEXT_PREVIEW)),
        );
        table.add_row(row);
    }
    println!("{table}");
}

/// Print one decrypted record.
pub fn print_decrypted(id: i64, data: &PersonalData) {
    println!("ID: {}", id);
    for kind in FieldKind::ALL {
        println!("{}: {}", kind.label(), data.get(kind));
    }
}

/// Print decrypt-all results, one row per record.
pub fn print_outcomes(outcomes: &[DecryptOutcome]) {
    if outcomes.is_empty() {
        println!("No records stored.");
        return;
    }

    let mut table = new_table();
    table.set_header(field_headers("ID"));
    for outcome in outcomes {
        let mut row = vec![outcome.id.to_string()];
        match &outcome.result {
            Ok(data) => row.extend(FieldKind::ALL.iter().map(|k| data.get(*k).to_string())),
            Err(_) => {
                row.push("(failed to decrypt: wrong passphrase?)".to_string());
                row.extend(std::iter::repeat("-".to_string()).take(FieldKind::ALL.len() - 1));
            }
        }
        table.add_row(row);
    }
    println!("{table}");

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    if failed > 0 {
        eprintln!(
            "{} of {} records could not be decrypted with this passphrase.",
            failed,
            outcomes.len()
        );
    }
}
