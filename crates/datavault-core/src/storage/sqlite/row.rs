//! Record row type for database queries.

use rusqlite::Row;

use crate::storage::types::{EncryptedFields, Record};

/// Columns selected for a record, in row order.
pub const RECORD_COLUMNS: &str = "id, name, id_number, address, phone";

/// Raw row data from the records table.
#[derive(Debug)]
pub struct RecordRow {
    pub id: i64,
    pub name: String,
    pub id_number: String,
    pub address: String,
    pub phone: String,
}

impl RecordRow {
    /// Read a row selected with [`RECORD_COLUMNS`].
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            id_number: row.get(2)?,
            address: row.get(3)?,
            phone: row.get(4)?,
        })
    }
}

impl From<RecordRow> for Record {
    fn from(row: RecordRow) -> Self {
        Record {
            id: row.id,
            fields: EncryptedFields {
                name: row.name,
                id_number: row.id_number,
                address: row.address,
                phone: row.phone,
            },
        }
    }
}
