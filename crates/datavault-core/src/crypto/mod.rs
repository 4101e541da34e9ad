//! Field-level cryptography for Datavault.
//!
//! - **key**: passphrase to 16-byte AES key (zero-pad / truncate)
//! - **cipher**: AES-128-CBC with PKCS#7 padding and a random IV per field
//! - **passphrase**: presence check used by front ends
//!
//! ## Security Model
//!
//! - Each field is encrypted independently with its own IV
//! - Keys are derived per call and zeroized on drop
//! - Passphrases are never stored or logged
//!
//! We do NOT defend against:
//! - Offline brute force (the key derivation is not a KDF)
//! - Ciphertext tampering (no authentication tag)

pub mod cipher;
pub mod key;
pub mod passphrase;

pub use cipher::{decrypt, encrypt, SealedField, BLOCK_SIZE, IV_LENGTH};
pub use key::{derive_key, DerivedKey, KEY_LENGTH};
pub use passphrase::validate_passphrase;
