//! Encrypted payload framing.
//!
//! Wire layout of a post's encrypted body, after base64 decoding:
//!
//! ```text
//! legacy:  iv(16) || ciphertext(n)            n >= 0
//! sealed:  iv(16) || ciphertext(n) || tag(32)
//! ```
//!
//! There is no length field and no algorithm identifier; the two
//! layouts are distinguished by which parse the caller asks for.

use postview_common::{Error, Result};

/// Size of the payload header: a 16-byte IV.
pub const HEADER_SIZE: usize = 16;

/// Size of the authentication tag in the sealed layout.
pub const TAG_SIZE: usize = 32;

/// A parsed legacy payload: IV header plus ciphertext body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedPayload {
    bytes: Vec<u8>,
}

impl EncryptedPayload {
    /// Parse raw bytes into a payload.
    ///
    /// # Errors
    /// - `Error::MalformedPayload` if `bytes` is shorter than the
    ///   16-byte header. The ciphertext may be empty.
    pub fn parse(bytes: Vec<u8>) -> Result<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(Error::MalformedPayload(bytes.len()));
        }
        Ok(Self { bytes })
    }

    /// The 16-byte IV carried in the header.
    pub fn iv(&self) -> [u8; HEADER_SIZE] {
        let mut iv = [0u8; HEADER_SIZE];
        iv.copy_from_slice(&self.bytes[..HEADER_SIZE]);
        iv
    }

    /// The ciphertext body following the header; possibly empty.
    pub fn ciphertext(&self) -> &[u8] {
        &self.bytes[HEADER_SIZE..]
    }

    /// The full wire bytes, header included.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Total wire length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the ciphertext body is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.len() == HEADER_SIZE
    }
}

/// A parsed sealed payload: legacy body plus trailing authentication tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedPayload {
    body: EncryptedPayload,
    tag: [u8; TAG_SIZE],
}

impl SealedPayload {
    /// Parse raw bytes into a sealed payload.
    ///
    /// # Errors
    /// - `Error::MalformedPayload` if `bytes` cannot hold both the
    ///   header and the tag.
    pub fn parse(bytes: Vec<u8>) -> Result<Self> {
        if bytes.len() < HEADER_SIZE + TAG_SIZE {
            return Err(Error::MalformedPayload(bytes.len()));
        }

        let mut bytes = bytes;
        let tag_start = bytes.len() - TAG_SIZE;
        let mut tag = [0u8; TAG_SIZE];
        tag.copy_from_slice(&bytes[tag_start..]);
        bytes.truncate(tag_start);

        Ok(Self {
            body: EncryptedPayload::parse(bytes)?,
            tag,
        })
    }

    /// The IV-plus-ciphertext body covered by the tag.
    pub fn body(&self) -> &EncryptedPayload {
        &self.body
    }

    /// The 32-byte authentication tag.
    pub fn tag(&self) -> &[u8; TAG_SIZE] {
        &self.tag
    }
}
