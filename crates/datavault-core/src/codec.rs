//! Text encoding for encrypted fields.
//!
//! A stored field is the standard radix-64 (base64, padded) encoding of
//! `IV (16 bytes) || ciphertext`. This is the only artifact that crosses the
//! storage boundary, so writer and reader must agree on it exactly.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::crypto::{SealedField, IV_LENGTH};
use crate::error::{Result, VaultError};

/// Encode a sealed field as storable text.
pub fn encode(sealed: &SealedField) -> String {
    let mut bytes = Vec::with_capacity(IV_LENGTH + sealed.ciphertext.len());
    bytes.extend_from_slice(&sealed.iv);
    bytes.extend_from_slice(&sealed.ciphertext);
    STANDARD.encode(bytes)
}

/// Decode stored text back into IV and ciphertext.
///
/// # Errors
///
/// Returns `VaultError::Decode` if the text is not valid radix-64 or decodes
/// to fewer than 16 bytes. The ciphertext itself is not validated here.
pub fn decode(text: &str) -> Result<SealedField> {
    let bytes = STANDARD
        .decode(text)
        .map_err(|e| VaultError::Decode(format!("Invalid base64: {}", e)))?;

    if bytes.len() < IV_LENGTH {
        return Err(VaultError::Decode(format!(
            "Encoded field too short: {} bytes (need at least {})",
            bytes.len(),
            IV_LENGTH
        )));
    }

    let (iv_bytes, ciphertext) = bytes.split_at(IV_LENGTH);
    let mut iv = [0u8; IV_LENGTH];
    iv.copy_from_slice(iv_bytes);

    Ok(SealedField {
        iv,
        ciphertext: ciphertext.to_vec(),
    })
}
