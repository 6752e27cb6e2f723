//! Master key resolution and validation.
//!
//! The master key arrives as a 64-character hex string in process
//! configuration and is shared by every envelope the application stores.

use crate::error::{CryptoError, CryptoResult};
use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Size of the master key in bytes (256 bits for AES-256-GCM).
pub const KEY_SIZE: usize = 32;

/// Environment variable holding the hex-encoded master key.
pub const MASTER_KEY_ENV: &str = "HEARTH_ENCRYPTION_KEY";

/// The symmetric master key, zeroized on drop.
///
/// Resolved once per process (callers may cache it) and passed explicitly
/// into every encrypt/decrypt call. It is never mutated after construction
/// and is safe to share read-only across threads.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct MasterKey {
    bytes: [u8; KEY_SIZE],
}

impl MasterKey {
    /// Creates a master key from raw bytes.
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self { bytes }
    }

    /// Parses a master key from its 64-character hex representation.
    ///
    /// # Errors
    /// Returns [`CryptoError::Configuration`] if the string is not exactly
    /// 64 hex characters. Messages carry lengths only, never the value.
    pub fn from_hex(encoded: &str) -> CryptoResult<Self> {
        let encoded = encoded.trim();
        if encoded.len() != KEY_SIZE * 2 {
            return Err(CryptoError::Configuration(format!(
                "master key must be {} hex characters, got {}",
                KEY_SIZE * 2,
                encoded.len()
            )));
        }

        let mut decoded = hex::decode(encoded).map_err(|_| {
            CryptoError::Configuration("master key is not valid hex".to_string())
        })?;

        let mut bytes = [0u8; KEY_SIZE];
        bytes.copy_from_slice(&decoded);
        decoded.zeroize();

        Ok(Self { bytes })
    }

    /// Resolves the master key from [`MASTER_KEY_ENV`].
    ///
    /// # Errors
    /// Returns [`CryptoError::Configuration`] if the variable is absent or
    /// its value does not decode to exactly [`KEY_SIZE`] bytes.
    pub fn from_env() -> CryptoResult<Self> {
        Self::from_env_var(MASTER_KEY_ENV)
    }

    /// Resolves the master key from an alternate environment variable.
    ///
    /// Used for test isolation and staging a rotation key alongside the
    /// active one.
    pub fn from_env_var(name: &str) -> CryptoResult<Self> {
        let mut encoded = std::env::var(name)
            .map_err(|_| CryptoError::Configuration(format!("{name} is not set")))?;
        let key = Self::from_hex(&encoded);
        encoded.zeroize();
        key
    }

    /// Generates a random master key (provisioning and tests).
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_SIZE];
        rand::rngs::OsRng.fill_bytes(&mut bytes);
        Self { bytes }
    }

    /// Returns the key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

impl std::fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MasterKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}
