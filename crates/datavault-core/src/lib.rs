//! # Datavault Core
//!
//! Core library for Datavault - a passphrase-protected store for personal
//! data (name, national ID number, address, phone).
//!
//! Every field is encrypted on its own before it reaches storage, so the
//! database only ever holds opaque text. Reading a field back requires the
//! passphrase it was written with.
//!
//! ## Architecture
//!
//! - **crypto**: key derivation and AES-128-CBC field encryption
//! - **codec**: `IV || ciphertext` to base64 text and back
//! - **storage**: record store trait and SQLite implementation
//! - **service**: encrypt-and-store / load-and-decrypt orchestration

pub mod codec;
pub mod crypto;
pub mod error;
pub mod service;
pub mod storage;

pub use error::{Result, VaultError};
pub use service::{DecryptOutcome, RecordService};
pub use storage::{PersonalData, RecordStore, SqliteRecordStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
