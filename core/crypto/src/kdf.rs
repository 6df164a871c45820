//! Passphrase key derivation using scrypt.
//!
//! scrypt is a memory-hard password hashing function; the cost
//! parameters here are part of the wire contract with already-published
//! posts and must not change on the decrypt path.

use scrypt::{scrypt, Params};

use crate::keys::{PostKey, KEY_LENGTH};
use postview_common::{Error, Result};

/// Salt for passphrase derivation.
///
/// A single literal shared by every post. Two posts encrypted under the
/// same passphrase therefore derive the same key; kept as-is because
/// changing it orphans all existing encrypted content.
pub const POST_SALT: &[u8] = b"cbbc";

/// scrypt cost: log2 of the iteration count (N = 16384).
pub const SCRYPT_LOG_N: u8 = 14;
/// scrypt block size.
pub const SCRYPT_R: u32 = 8;
/// scrypt parallelism.
pub const SCRYPT_P: u32 = 1;

/// Derive the symmetric key for a post from a viewer-entered passphrase.
///
/// Deterministic: the same passphrase always yields the same key. The
/// derivation is CPU-bound and runs synchronously to completion; expect
/// tens to hundreds of milliseconds.
///
/// # Errors
/// - Returns error if the scrypt parameters are rejected (fixed
///   constants, so this indicates a build problem rather than bad input)
pub fn derive_post_key(passphrase: &str) -> Result<PostKey> {
    derive_post_key_with(passphrase, POST_SALT, SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P)
}

/// Derive a key with explicit salt and cost parameters.
///
/// The product decrypt path always uses [`derive_post_key`]; this
/// variant exists for tooling and tests that need other parameters.
pub fn derive_post_key_with(
    passphrase: &str,
    salt: &[u8],
    log_n: u8,
    r: u32,
    p: u32,
) -> Result<PostKey> {
    let params = Params::new(log_n, r, p, KEY_LENGTH)
        .map_err(|e| Error::Crypto(format!("Invalid KDF parameters: {}", e)))?;

    let mut key_bytes = [0u8; KEY_LENGTH];
    scrypt(passphrase.as_bytes(), salt, &params, &mut key_bytes)
        .map_err(|e| Error::Crypto(format!("Key derivation failed: {}", e)))?;

    Ok(PostKey::from_bytes(key_bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_deterministic() {
        let key1 = derive_post_key("test-passphrase-123").unwrap();
        let key2 = derive_post_key("test-passphrase-123").unwrap();

        assert_eq!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_derive_different_passphrases() {
        let key1 = derive_post_key("passphrase1").unwrap();
        let key2 = derive_post_key("passphrase2").unwrap();

        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_derive_known_answer() {
        // Fixed vector for scrypt(N=16384, r=8, p=1, salt="cbbc", 32 bytes).
        let key = derive_post_key("open sesame").unwrap();
        assert_eq!(
            hex::encode(key.as_bytes()),
            "14148097bd1c1df80ff45799ed04c69a0a76622b4769cfdfcdd1c198cd5f6a74"
        );

        let key = derive_post_key("hunter2").unwrap();
        assert_eq!(
            hex::encode(key.as_bytes()),
            "03f872616c8ffd7130a4fcb018c9a5bb7528b25865d4e4fc81cbbf94f823c101"
        );
    }

    #[test]
    fn test_derive_empty_passphrase_allowed() {
        // No passphrase policy is enforced at this layer.
        let key1 = derive_post_key("").unwrap();
        let key2 = derive_post_key("").unwrap();

        assert_eq!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_derive_salt_changes_key() {
        let key1 = derive_post_key_with("pp", b"cbbc", 4, 8, 1).unwrap();
        let key2 = derive_post_key_with("pp", b"other", 4, 8, 1).unwrap();

        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }
}
