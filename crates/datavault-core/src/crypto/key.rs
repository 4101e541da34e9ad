//! Passphrase-to-key derivation.
//!
//! The derivation is a fixed pad/truncate step that presents a 16-byte key
//! to AES-128. It is not a password hashing function and offers no
//! resistance to brute force. Replacing it with a salted, iterated KDF
//! changes the stored field format and must bump the store's format version.

use zeroize::ZeroizeOnDrop;

/// Length of derived key in bytes (16 bytes = 128 bits for AES-128).
pub const KEY_LENGTH: usize = 16;

/// A cipher key derived from a passphrase.
///
/// Key material is zeroized from memory when dropped.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_LENGTH],
}

impl DerivedKey {
    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for immediate encryption operations.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive a cipher key from a passphrase.
///
/// The UTF-8 bytes of `passphrase` are right-padded with zero bytes to
/// [`KEY_LENGTH`], or truncated to the first [`KEY_LENGTH`] bytes. Any input
/// is accepted, including the empty string.
///
/// # Examples
///
/// ```
/// use datavault_core::crypto::derive_key;
///
/// let key = derive_key("abc");
/// assert_eq!(&key.as_bytes()[..3], b"abc");
/// assert!(key.as_bytes()[3..].iter().all(|b| *b == 0));
/// ```
pub fn derive_key(passphrase: &str) -> DerivedKey {
    let bytes = passphrase.as_bytes();
    let take = bytes.len().min(KEY_LENGTH);

    let mut key = [0u8; KEY_LENGTH];
    key[..take].copy_from_slice(&bytes[..take]);

    DerivedKey { key }
}
