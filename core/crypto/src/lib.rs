//! Cryptographic primitives for the post viewer.
//!
//! This module provides:
//! - Passphrase key derivation using scrypt
//! - Encrypted payload framing (IV header, optional trailing tag)
//! - AES-256-OFB decryption and encryption of post bodies
//! - A sealed variant that authenticates payloads with a keyed BLAKE2b tag
//!
//! # Security Guarantees
//! - All key material is automatically zeroized on drop
//! - No passphrase, key, or plaintext is ever logged
//! - Sealed payload tags are compared in constant time

pub mod cipher;
pub mod kdf;
pub mod keys;
pub mod payload;

pub use cipher::{decrypt_post, encrypt_post, open_post, seal_post};
pub use kdf::{derive_post_key, POST_SALT};
pub use keys::{MacKey, PostKey, KEY_LENGTH};
pub use payload::{EncryptedPayload, SealedPayload, HEADER_SIZE, TAG_SIZE};
