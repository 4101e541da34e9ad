//! Error types for Datavault core operations.
//!
//! This module defines the error hierarchy for all core operations.
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages and exit codes.

use thiserror::Error;

use crate::storage::FieldKind;

/// Result type alias for Datavault operations.
pub type Result<T> = std::result::Result<T, VaultError>;

/// Core error type for Datavault operations.
#[derive(Debug, Error)]
pub enum VaultError {
    /// Stored field text is not radix-64 or is too short to hold an IV
    #[error("Decode error: {0}")]
    Decode(String),

    /// CBC decryption produced an invalid PKCS#7 pad
    #[error("Invalid padding")]
    Padding,

    /// Unpadded plaintext is not valid UTF-8
    #[error("Decrypted field is not valid UTF-8: {source}")]
    Utf8 {
        #[from]
        source: std::string::FromUtf8Error,
    },

    /// A record could not be decrypted with the supplied passphrase.
    ///
    /// Wrong passphrase, corrupted storage, and foreign-format data are not
    /// distinguished here; `source` carries the first field-level failure.
    #[error("Wrong passphrase or corrupted data (field: {field})")]
    WrongKeyOrCorrupt {
        field: FieldKind,
        #[source]
        source: Box<VaultError>,
    },

    /// Record not found by ID
    #[error("Record not found: {0}")]
    NotFound(i64),

    /// Encryption setup error (entropy source unavailable)
    #[error("Encryption error: {0}")]
    Crypto(String),

    /// Storage backend error (generic)
    #[error("Storage error: {0}")]
    Storage(String),

    /// SQLite-specific storage error
    #[error("SQLite error: {source}")]
    Sqlite {
        #[from]
        source: rusqlite::Error,
    },

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl VaultError {
    /// True for the coalesced record-level decryption failure.
    pub fn is_wrong_key_or_corrupt(&self) -> bool {
        matches!(self, VaultError::WrongKeyOrCorrupt { .. })
    }

    pub(crate) fn wrong_key_or_corrupt(field: FieldKind, source: VaultError) -> Self {
        VaultError::WrongKeyOrCorrupt {
            field,
            source: Box::new(source),
        }
    }
}
