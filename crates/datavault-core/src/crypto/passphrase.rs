//! Passphrase checks for front ends.
//!
//! Key derivation accepts any text, including the empty string. Front ends
//! still refuse to encrypt without a passphrase, so they call
//! [`validate_passphrase`] before handing one to the record service.

use crate::error::{Result, VaultError};

/// Validate that a passphrase was actually supplied.
///
/// # Returns
///
/// Returns `Ok(())` if valid, or `VaultError::InvalidInput` with explanation.
///
/// # Examples
///
/// ```
/// use datavault_core::crypto::validate_passphrase;
///
/// assert!(validate_passphrase("secret").is_ok());
/// assert!(validate_passphrase("   ").is_err());
/// ```
pub fn validate_passphrase(passphrase: &str) -> Result<()> {
    if passphrase.trim().is_empty() {
        return Err(VaultError::InvalidInput(
            "Passphrase cannot be empty".to_string(),
        ));
    }

    Ok(())
}
