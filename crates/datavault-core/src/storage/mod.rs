//! Storage layer for Datavault.
//!
//! This module provides the record store abstraction and its SQLite
//! implementation. The store never sees plaintext.

mod sqlite;
pub mod traits;
pub mod types;

pub use sqlite::SqliteRecordStore;
pub use traits::RecordStore;
pub use types::{
    EncryptedFields, FieldKind, PersonalData, Record, StoreMetadata, CIPHER_LABEL,
    FORMAT_VERSION,
};
