//! Record service: encrypts on the way in, decrypts on request.
//!
//! Every call is one-shot. The service derives a key from the passphrase
//! it is handed, uses it, and drops it; nothing about the passphrase
//! outlives the call or reaches the store.

use tracing::debug;

use crate::codec;
use crate::crypto::{self, derive_key, DerivedKey};
use crate::error::{Result, VaultError};
use crate::storage::{EncryptedFields, FieldKind, PersonalData, Record, RecordStore};

/// Result of decrypting one record during [`RecordService::decrypt_all`].
#[derive(Debug)]
pub struct DecryptOutcome {
    pub id: i64,
    pub result: Result<PersonalData>,
}

/// Orchestrates key derivation, field encryption, and persistence.
pub struct RecordService<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> RecordService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the service, returning the store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Encrypt all four fields under `passphrase` without touching storage.
    ///
    /// The key is derived once; every field gets its own random IV. Either
    /// all four encoded fields are returned or none are.
    pub fn write(&self, fields: &PersonalData, passphrase: &str) -> Result<EncryptedFields> {
        let key = derive_key(passphrase);
        Ok(EncryptedFields {
            name: seal(&fields.name, &key)?,
            id_number: seal(&fields.id_number, &key)?,
            address: seal(&fields.address, &key)?,
            phone: seal(&fields.phone, &key)?,
        })
    }

    /// Encrypt `fields` and store them as a new record.
    ///
    /// # Returns
    ///
    /// Returns the store-assigned record ID.
    pub fn insert(&mut self, fields: &PersonalData, passphrase: &str) -> Result<i64> {
        let encrypted = self.write(fields, passphrase)?;
        let id = self.store.insert(&encrypted)?;
        debug!(record_id = id, "stored encrypted record");
        Ok(id)
    }

    /// Re-encrypt `fields` and replace all four fields of record `id`.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::NotFound` if the record does not exist.
    pub fn update(&mut self, id: i64, fields: &PersonalData, passphrase: &str) -> Result<()> {
        let encrypted = self.write(fields, passphrase)?;
        self.store.update(id, &encrypted)?;
        debug!(record_id = id, "replaced encrypted record");
        Ok(())
    }

    /// Delete record `id`.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::NotFound` if the record does not exist.
    pub fn delete(&mut self, id: i64) -> Result<()> {
        self.store.delete(id)
    }

    /// All stored records with their fields still encrypted.
    pub fn read_all(&self) -> Result<Vec<Record>> {
        self.store.select_all()
    }

    /// A single stored record, still encrypted.
    pub fn find(&self, id: i64) -> Result<Option<Record>> {
        self.store.get(id)
    }

    /// Decrypt all four fields of `record` with `passphrase`.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::WrongKeyOrCorrupt` if any field fails to decode
    /// or decrypt. No partially decrypted record is ever returned.
    pub fn decrypt_record(&self, record: &Record, passphrase: &str) -> Result<PersonalData> {
        let key = derive_key(passphrase);
        let field = |kind: FieldKind| -> Result<String> {
            open(record.fields.get(kind), &key)
                .map_err(|source| VaultError::wrong_key_or_corrupt(kind, source))
        };

        let data = PersonalData {
            name: field(FieldKind::Name)?,
            id_number: field(FieldKind::IdNumber)?,
            address: field(FieldKind::Address)?,
            phone: field(FieldKind::Phone)?,
        };
        debug!(record_id = record.id, "decrypted record");
        Ok(data)
    }

    /// Decrypt every stored record with one passphrase.
    ///
    /// A record that fails to decrypt is reported in its outcome and does
    /// not stop the others.
    pub fn decrypt_all(&self, passphrase: &str) -> Result<Vec<DecryptOutcome>> {
        let outcomes: Vec<DecryptOutcome> = self
            .read_all()?
            .iter()
            .map(|record| DecryptOutcome {
                id: record.id,
                result: self.decrypt_record(record, passphrase),
            })
            .collect();

        let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
        debug!(total = outcomes.len(), failed, "decrypted all records");
        Ok(outcomes)
    }
}

fn seal(plain: &str, key: &DerivedKey) -> Result<String> {
    Ok(codec::encode(&crypto::encrypt(plain, key)?))
}

fn open(text: &str, key: &DerivedKey) -> Result<String> {
    crypto::decrypt(&codec::decode(text)?, key)
}
