//! Key types with secure memory handling.
//!
//! All key types automatically zeroize their memory on drop to prevent
//! sensitive data from persisting in memory.

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Length of derived keys in bytes (256-bit).
pub const KEY_LENGTH: usize = 32;

/// Symmetric key derived from a viewer-entered passphrase.
///
/// Derived fresh for every decrypt attempt and never cached or
/// persisted; the bytes are zeroized when the key is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PostKey {
    key: [u8; KEY_LENGTH],
}

impl PostKey {
    /// Create a post key from raw bytes.
    pub fn from_bytes(key: [u8; KEY_LENGTH]) -> Self {
        Self { key }
    }

    /// Get the key bytes.
    ///
    /// # Security
    /// The returned slice should be used immediately and not stored.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }

    /// Derive the MAC subkey used by the sealed payload format.
    ///
    /// Uses BLAKE2b over the key plus a domain string, so the MAC key
    /// is bound to this key without exposing it.
    pub fn derive_mac_key(&self) -> MacKey {
        use blake2::digest::consts::U32;
        use blake2::{Blake2b, Digest};

        let mut hasher = Blake2b::<U32>::new();
        hasher.update(&self.key);
        hasher.update(b"postview.mac");

        let result = hasher.finalize();
        let mut derived = [0u8; KEY_LENGTH];
        derived.copy_from_slice(&result);
        MacKey::from_bytes(derived)
    }
}

impl fmt::Debug for PostKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PostKey([REDACTED])")
    }
}

/// Key for authenticating sealed payloads.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct MacKey {
    key: [u8; KEY_LENGTH],
}

impl MacKey {
    /// Create a MAC key from raw bytes.
    pub fn from_bytes(key: [u8; KEY_LENGTH]) -> Self {
        Self { key }
    }

    /// Get the key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl fmt::Debug for MacKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MacKey([REDACTED])")
    }
}
