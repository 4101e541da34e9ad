//! AES-128-CBC field encryption.
//!
//! Each call to [`encrypt`] draws a fresh 16-byte IV from the OS random
//! source, so encrypting the same text twice under the same key yields
//! different ciphertexts. No authentication tag is produced: tampering is
//! only noticed when it happens to break the padding or the UTF-8 check.

use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::rngs::OsRng;
use rand::RngCore;

use super::key::DerivedKey;
use crate::error::{Result, VaultError};

type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;
type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Length of the initialization vector in bytes.
pub const IV_LENGTH: usize = 16;

/// Output of a single field encryption: the IV and the CBC ciphertext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedField {
    pub iv: [u8; IV_LENGTH],
    pub ciphertext: Vec<u8>,
}

/// Encrypt one text value under `key`.
///
/// The plaintext is PKCS#7 padded, so the ciphertext is always at least one
/// block long and a block-aligned plaintext gains a full padding block.
///
/// # Errors
///
/// Returns `VaultError::Crypto` only if the OS random source is unavailable.
pub fn encrypt(plain: &str, key: &DerivedKey) -> Result<SealedField> {
    let mut iv = [0u8; IV_LENGTH];
    OsRng
        .try_fill_bytes(&mut iv)
        .map_err(|e| VaultError::Crypto(format!("IV generation failed: {}", e)))?;

    let ciphertext = Aes128CbcEnc::new(&(*key.as_bytes()).into(), &iv.into())
        .encrypt_padded_vec_mut::<Pkcs7>(plain.as_bytes());

    Ok(SealedField { iv, ciphertext })
}

/// Decrypt a sealed field under `key`.
///
/// # Errors
///
/// - `VaultError::Padding` if the ciphertext is empty, not block aligned, or
///   ends in an invalid pad. With a wrong key this is the usual outcome.
/// - `VaultError::Utf8` if the unpadded bytes are not valid UTF-8.
pub fn decrypt(sealed: &SealedField, key: &DerivedKey) -> Result<String> {
    if sealed.ciphertext.is_empty() || sealed.ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(VaultError::Padding);
    }

    let plain = Aes128CbcDec::new(&(*key.as_bytes()).into(), &sealed.iv.into())
        .decrypt_padded_vec_mut::<Pkcs7>(&sealed.ciphertext)
        .map_err(|_| VaultError::Padding)?;

    Ok(String::from_utf8(plain)?)
}
