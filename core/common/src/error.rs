//! Common error types for the post viewer.

use thiserror::Error;

/// Top-level error type for viewer operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Cryptographic operation failed.
    #[error("Cryptographic error: {0}")]
    Crypto(String),

    /// Network request failed or returned an unexpected status.
    #[error("Network error: {0}")]
    Network(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid input provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Decryption was requested but no encrypted body is pending.
    #[error("No encrypted body is pending")]
    MissingCiphertext,

    /// Encrypted payload is shorter than the fixed header.
    #[error("Encrypted payload too short: {0} bytes")]
    MalformedPayload(usize),

    /// Authentication tag did not verify.
    #[error("Authentication failed")]
    AuthenticationFailed,
}

/// Result type alias using the common Error.
pub type Result<T> = std::result::Result<T, Error>;
