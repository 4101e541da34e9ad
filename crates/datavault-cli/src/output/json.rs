//! JSON output formatting for records.

use datavault_core::storage::{PersonalData, Record};
use datavault_core::DecryptOutcome;

/// Convert stored (encrypted) records to a JSON array.
pub fn records_json(records: &[Record]) -> serde_json::Value {
    serde_json::json!(records)
}

/// Convert one decrypted record to JSON.
pub fn decrypted_json(id: i64, data: &PersonalData) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": data.name,
        "id_number": data.id_number,
        "address": data.address,
        "phone": data.phone,
    })
}

/// Convert decrypt-all outcomes to a JSON array.
///
/// Successful records carry their fields; failed ones carry `"ok": false`
/// and an error message.
pub fn outcomes_json(outcomes: &[DecryptOutcome]) -> serde_json::Value {
    let items: Vec<serde_json::Value> = outcomes
        .iter()
        .map(|outcome| match &outcome.result {
            Ok(data) => {
                let mut value = decrypted_json(outcome.id, data);
                value["ok"] = serde_json::Value::Bool(true);
                value
            }
            Err(err) => serde_json::json!({
                "id": outcome.id,
                "ok": false,
                "error": err.to_string(),
            }),
        })
        .collect();
    serde_json::Value::Array(items)
}
