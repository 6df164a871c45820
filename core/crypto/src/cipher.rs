//! Symmetric encryption of post bodies.
//!
//! The canonical cipher is AES-256 in OFB mode, keyed by the 32-byte
//! derived key with the 16-byte IV from the payload header. OFB is a
//! stream construction: no padding, ciphertext and plaintext have equal
//! length, and an empty ciphertext decrypts to an empty plaintext.
//!
//! The legacy layout carries no authentication tag, so a wrong
//! passphrase produces plausible-looking garbage with no error signal.
//! The sealed layout closes that gap with a keyed BLAKE2b tag over
//! `iv || ciphertext`, verified before any decryption happens.

use aes::Aes256;
use blake2::digest::consts::U32;
use blake2::digest::{FixedOutput, KeyInit, Update};
use blake2::Blake2bMac;
use ofb::cipher::{KeyIvInit, StreamCipher};
use ofb::Ofb;
use rand::RngCore;
use subtle::ConstantTimeEq;

use crate::keys::PostKey;
use crate::payload::{EncryptedPayload, SealedPayload, HEADER_SIZE, TAG_SIZE};
use postview_common::{Error, Result};

type Aes256Ofb = Ofb<Aes256>;

/// Decrypt a legacy payload.
///
/// # Postconditions
/// - Output length equals the ciphertext length.
///
/// # Security
/// - No integrity check: a wrong key yields incorrect plaintext with no
///   error. Use [`open_post`] with sealed payloads to detect that.
pub fn decrypt_post(payload: &EncryptedPayload, key: &PostKey) -> Result<Vec<u8>> {
    let iv = payload.iv();
    let mut out = payload.ciphertext().to_vec();

    let mut cipher = Aes256Ofb::new_from_slices(key.as_bytes(), &iv)
        .map_err(|e| Error::Crypto(format!("Cipher init failed: {}", e)))?;
    cipher.apply_keystream(&mut out);

    Ok(out)
}

/// Encrypt a plaintext into the legacy layout.
///
/// # Postconditions
/// - Returns `iv || ciphertext` with a randomly generated 16-byte IV.
pub fn encrypt_post(plaintext: &[u8], key: &PostKey) -> Result<Vec<u8>> {
    let mut iv = [0u8; HEADER_SIZE];
    rand::thread_rng().fill_bytes(&mut iv);
    encrypt_post_with_iv(plaintext, key, &iv)
}

/// Encrypt with a caller-provided IV.
///
/// # Warning
/// Reusing an IV under the same key leaks the XOR of the plaintexts.
/// Callers are responsible for IV uniqueness; [`encrypt_post`] should be
/// used everywhere outside fixtures.
pub fn encrypt_post_with_iv(
    plaintext: &[u8],
    key: &PostKey,
    iv: &[u8; HEADER_SIZE],
) -> Result<Vec<u8>> {
    let mut body = plaintext.to_vec();
    let mut cipher = Aes256Ofb::new_from_slices(key.as_bytes(), iv)
        .map_err(|e| Error::Crypto(format!("Cipher init failed: {}", e)))?;
    cipher.apply_keystream(&mut body);

    let mut out = Vec::with_capacity(HEADER_SIZE + body.len());
    out.extend_from_slice(iv);
    out.extend_from_slice(&body);
    Ok(out)
}

/// Encrypt a plaintext into the sealed layout.
///
/// # Postconditions
/// - Returns `iv || ciphertext || tag` where the tag authenticates both
///   the IV and the ciphertext.
pub fn seal_post(plaintext: &[u8], key: &PostKey) -> Result<Vec<u8>> {
    let mut out = encrypt_post(plaintext, key)?;
    let tag = compute_tag(&out, key)?;
    out.extend_from_slice(&tag);
    Ok(out)
}

/// Verify and decrypt a sealed payload.
///
/// The tag is checked in constant time before decryption; nothing is
/// decrypted when it does not match.
///
/// # Errors
/// - `Error::AuthenticationFailed` on tag mismatch (wrong passphrase or
///   tampered ciphertext)
pub fn open_post(sealed: &SealedPayload, key: &PostKey) -> Result<Vec<u8>> {
    let expected = compute_tag(sealed.body().as_bytes(), key)?;

    if !bool::from(expected.as_slice().ct_eq(sealed.tag().as_slice())) {
        return Err(Error::AuthenticationFailed);
    }

    decrypt_post(sealed.body(), key)
}

/// Keyed BLAKE2b-256 over the wire bytes, under the MAC subkey.
fn compute_tag(data: &[u8], key: &PostKey) -> Result<[u8; TAG_SIZE]> {
    let mac_key = key.derive_mac_key();
    let mut mac = Blake2bMac::<U32>::new_from_slice(mac_key.as_bytes())
        .map_err(|e| Error::Crypto(format!("MAC init failed: {}", e)))?;
    mac.update(data);

    let mut tag = [0u8; TAG_SIZE];
    tag.copy_from_slice(&mac.finalize_fixed());
    Ok(tag)
}
