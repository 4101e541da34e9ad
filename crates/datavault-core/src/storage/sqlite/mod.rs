//! SQLite record store.
//!
//! Records live in a single `records` table whose ID column is
//! `AUTOINCREMENT`, so IDs are never handed out twice even after deletes.
//! A small `meta` table records the field format version.

mod row;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use crate::error::{Result, VaultError};
use crate::storage::traits::RecordStore;
use crate::storage::types::{
    EncryptedFields, Record, StoreMetadata, CIPHER_LABEL, FORMAT_VERSION,
};

use row::{RecordRow, RECORD_COLUMNS};

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS meta (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS records (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        id_number TEXT NOT NULL,
        address TEXT NOT NULL,
        phone TEXT NOT NULL
    );
"#;

/// SQLite-backed record store.
pub struct SqliteRecordStore {
    path: Option<PathBuf>,
    conn: Mutex<Connection>,
}

impl SqliteRecordStore {
    /// Open the store at `path`, creating the file and schema if needed.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::Storage` if the file was written by an
    /// incompatible format version.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        Self::initialize(&conn)?;
        debug!(path = %path.display(), "opened record store");

        Ok(Self {
            path: Some(path.to_path_buf()),
            conn: Mutex::new(conn),
        })
    }

    /// Open a transient store that lives only as long as this value.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::initialize(&conn)?;

        Ok(Self {
            path: None,
            conn: Mutex::new(conn),
        })
    }

    /// Path of the backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn initialize(conn: &Connection) -> Result<()> {
        conn.execute_batch(SCHEMA)?;
        conn.execute(
            "INSERT OR IGNORE INTO meta (key, value) VALUES ('format_version', ?1)",
            params![FORMAT_VERSION],
        )?;
        conn.execute(
            "INSERT OR IGNORE INTO meta (key, value) VALUES ('cipher', ?1)",
            params![CIPHER_LABEL],
        )?;

        let version = Self::meta_value(conn, "format_version")?;
        if version != FORMAT_VERSION {
            return Err(VaultError::Storage(format!(
                "Unsupported format version: {} (expected {})",
                version, FORMAT_VERSION
            )));
        }
        Ok(())
    }

    fn meta_value(conn: &Connection, key: &str) -> Result<String> {
        conn.query_row("SELECT value FROM meta WHERE key = ?1", params![key], |row| {
            row.get(0)
        })
        .optional()?
        .ok_or_else(|| VaultError::Storage(format!("Missing metadata key: {}", key)))
    }

    /// Lock the database connection, returning an error if the mutex is poisoned.
    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| VaultError::Storage("SQLite connection poisoned".to_string()))
    }
}

impl RecordStore for SqliteRecordStore {
    fn insert(&mut self, fields: &EncryptedFields) -> Result<i64> {
        let conn = self.lock_conn()?;
        conn.execute(
            "INSERT INTO records (name, id_number, address, phone) VALUES (?1, ?2, ?3, ?4)",
            params![fields.name, fields.id_number, fields.address, fields.phone],
        )?;
        let id = conn.last_insert_rowid();
        debug!(record_id = id, "inserted record");
        Ok(id)
    }

    fn select_all(&self) -> Result<Vec<Record>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM records ORDER BY id ASC",
            RECORD_COLUMNS
        ))?;
        let rows = stmt.query_map([], RecordRow::from_row)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(Record::from(row?));
        }
        debug!(count = records.len(), "selected records");
        Ok(records)
    }

    fn get(&self, id: i64) -> Result<Option<Record>> {
        let conn = self.lock_conn()?;
        let row = conn
            .query_row(
                &format!("SELECT {} FROM records WHERE id = ?1", RECORD_COLUMNS),
                params![id],
                RecordRow::from_row,
            )
            .optional()?;
        Ok(row.map(Record::from))
    }

    fn update(&mut self, id: i64, fields: &EncryptedFields) -> Result<()> {
        let conn = self.lock_conn()?;
        let changed = conn.execute(
            "UPDATE records SET name = ?1, id_number = ?2, address = ?3, phone = ?4 WHERE id = ?5",
            params![
                fields.name,
                fields.id_number,
                fields.address,
                fields.phone,
                id
            ],
        )?;
        if changed == 0 {
            return Err(VaultError::NotFound(id));
        }
        debug!(record_id = id, "updated record");
        Ok(())
    }

    fn delete(&mut self, id: i64) -> Result<()> {
        let conn = self.lock_conn()?;
        let changed = conn.execute("DELETE FROM records WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(VaultError::NotFound(id));
        }
        debug!(record_id = id, "deleted record");
        Ok(())
    }

    fn metadata(&self) -> Result<StoreMetadata> {
        let conn = self.lock_conn()?;
        Ok(StoreMetadata {
            format_version: Self::meta_value(&conn, "format_version")?,
            cipher: Self::meta_value(&conn, "cipher")?,
        })
    }
}
