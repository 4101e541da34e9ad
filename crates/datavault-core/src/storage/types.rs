//! Core data types for the storage layer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VaultError};

/// Current on-disk format version.
pub const FORMAT_VERSION: &str = "1";

/// Cipher label recorded alongside the format version.
pub const CIPHER_LABEL: &str = "aes-128-cbc";

/// The four personal fields carried by every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    IdNumber,
    Address,
    Phone,
}

impl FieldKind {
    /// All fields, in storage column order.
    pub const ALL: [FieldKind; 4] = [
        FieldKind::Name,
        FieldKind::IdNumber,
        FieldKind::Address,
        FieldKind::Phone,
    ];

    /// Column name in the `records` table.
    pub fn column(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::IdNumber => "id_number",
            Self::Address => "address",
            Self::Phone => "phone",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::IdNumber => "ID number",
            Self::Address => "Address",
            Self::Phone => "Phone",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Plaintext personal data, as entered by the user.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalData {
    pub name: String,
    pub id_number: String,
    pub address: String,
    pub phone: String,
}

impl PersonalData {
    pub fn new(
        name: impl Into<String>,
        id_number: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            id_number: id_number.into(),
            address: address.into(),
            phone: phone.into(),
        }
    }

    /// Borrow one field by kind.
    pub fn get(&self, kind: FieldKind) -> &str {
        match kind {
            FieldKind::Name => &self.name,
            FieldKind::IdNumber => &self.id_number,
            FieldKind::Address => &self.address,
            FieldKind::Phone => &self.phone,
        }
    }

    /// Require every field to be non-blank.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::InvalidInput` naming the first blank field.
    pub fn ensure_complete(&self) -> Result<()> {
        for kind in FieldKind::ALL {
            if self.get(kind).trim().is_empty() {
                return Err(VaultError::InvalidInput(format!(
                    "{} cannot be empty",
                    kind.label()
                )));
            }
        }
        Ok(())
    }
}

// Plaintext is personal data; keep it out of debug logs.
impl fmt::Debug for PersonalData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersonalData")
            .field("name", &"[REDACTED]")
            .field("id_number", &"[REDACTED]")
            .field("address", &"[REDACTED]")
            .field("phone", &"[REDACTED]")
            .finish()
    }
}

/// The four encoded ciphertext fields of one record.
///
/// The store treats these as opaque text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedFields {
    pub name: String,
    pub id_number: String,
    pub address: String,
    pub phone: String,
}

impl EncryptedFields {
    /// Borrow one field by kind.
    pub fn get(&self, kind: FieldKind) -> &str {
        match kind {
            FieldKind::Name => &self.name,
            FieldKind::IdNumber => &self.id_number,
            FieldKind::Address => &self.address,
            FieldKind::Phone => &self.phone,
        }
    }
}

/// A stored record: store-assigned ID plus opaque encrypted fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique, auto-incrementing, never reused
    pub id: i64,

    #[serde(flatten)]
    pub fields: EncryptedFields,
}

/// Metadata for a record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreMetadata {
    /// Format version (e.g., "1")
    pub format_version: String,

    /// Cipher used for stored fields
    pub cipher: String,
}
