//! Error types for the encryption layer.

use thiserror::Error;

/// Result type for crypto operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors that can occur in cryptographic operations.
///
/// None of the variants carry key material, plaintext, or full envelope
/// contents; messages are safe to log as-is.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Master key missing from configuration or wrong length.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Stored envelope does not match the three-field base64 format.
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    /// Authentication tag verification failed (wrong key or tampered data).
    #[error("authentication failed (wrong key or tampered envelope)")]
    Authentication,

    /// The platform random source failed. Safe to retry later; never
    /// substituted with a weaker nonce source.
    #[error("entropy source failure: {0}")]
    Entropy(String),

    /// Encryption failed inside the AEAD (unreachable with a valid key).
    #[error("encryption failed: {0}")]
    Encryption(String),
}
