//! Record store trait definition.
//!
//! The `RecordStore` trait is the persistence boundary of Datavault: a
//! generic keyed table whose four text columns are opaque. It knows
//! nothing about encryption; the record service hands it encoded
//! ciphertext and gets the same text back.

use super::types::{EncryptedFields, Record, StoreMetadata};
use crate::error::Result;

/// Storage interface for encrypted records.
///
/// All implementations must ensure:
/// - IDs are assigned by the store, unique, and never reused after delete
/// - Each call is atomic (no partially written record is ever visible)
/// - Field contents are stored and returned byte-for-byte
pub trait RecordStore: Send + Sync {
    /// Insert a new record.
    ///
    /// # Returns
    ///
    /// Returns the store-assigned ID of the created record.
    fn insert(&mut self, fields: &EncryptedFields) -> Result<i64>;

    /// List every record, in ascending ID order.
    ///
    /// Each call returns a fresh snapshot.
    fn select_all(&self) -> Result<Vec<Record>>;

    /// Get a record by ID.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(record))` if found, `Ok(None)` if not found.
    fn get(&self, id: i64) -> Result<Option<Record>>;

    /// Replace all four fields of an existing record.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::NotFound` if no record has this ID.
    fn update(&mut self, id: i64, fields: &EncryptedFields) -> Result<()>;

    /// Delete a record.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::NotFound` if no record has this ID.
    fn delete(&mut self, id: i64) -> Result<()>;

    /// Get store metadata.
    fn metadata(&self) -> Result<StoreMetadata>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_definition_compiles() {
        fn _accepts_record_store<T: RecordStore>(_store: T) {}
        fn _accepts_boxed(_store: Box<dyn RecordStore>) {}
    }
}
