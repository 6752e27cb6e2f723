//! Sealing interface for storage collaborators.
//!
//! Consumers (the connected-account store, credential sync) depend on
//! `Arc<dyn SecretEncryptor>` — they never see the master key. KeyedEncryptor
//! owns the key; tests use `PassthroughEncryptor` to skip cryptography.

use crate::cipher;
use crate::envelope::Envelope;
use crate::error::{CryptoError, CryptoResult};
use crate::key::MasterKey;
use tracing::warn;

/// How many leading characters of an envelope may appear in logs.
const LOG_PREFIX_LEN: usize = 8;

/// Trait for sealing secrets into envelope strings and opening them again.
///
/// Implementations own the key material. Callers never see raw keys.
pub trait SecretEncryptor: Send + Sync {
    /// Seal `plaintext` into an opaque envelope string for persistence.
    fn seal(&self, plaintext: &[u8]) -> CryptoResult<String>;

    /// Open an envelope string previously produced by `seal`.
    fn open(&self, sealed: &str) -> CryptoResult<Vec<u8>>;
}

/// Seals secrets under a resolved master key.
#[derive(Debug)]
pub struct KeyedEncryptor {
    key: MasterKey,
}

impl KeyedEncryptor {
    /// Creates an encryptor from an already-resolved key.
    pub fn new(key: MasterKey) -> Self {
        Self { key }
    }

    /// Resolves the master key from the environment and wraps it.
    ///
    /// # Errors
    /// Returns [`CryptoError::Configuration`] if the key variable is absent
    /// or invalid.
    pub fn from_env() -> CryptoResult<Self> {
        Ok(Self::new(MasterKey::from_env()?))
    }
}

impl SecretEncryptor for KeyedEncryptor {
    fn seal(&self, plaintext: &[u8]) -> CryptoResult<String> {
        let envelope = cipher::encrypt(&self.key, plaintext)?;
        Ok(envelope.encode())
    }

    fn open(&self, sealed: &str) -> CryptoResult<Vec<u8>> {
        let envelope = Envelope::decode(sealed)?;
        cipher::decrypt(&self.key, &envelope).inspect_err(|e| {
            // Log the kind and a truncated reference only; never the
            // plaintext, key, or full envelope.
            warn!(envelope_prefix = truncated(sealed), error = %e, "failed to open sealed secret");
        })
    }
}

/// No-op encryptor for tests and unkeyed local development.
/// Secrets pass through unchanged; assumes UTF-8 values.
pub struct PassthroughEncryptor;

impl SecretEncryptor for PassthroughEncryptor {
    fn seal(&self, plaintext: &[u8]) -> CryptoResult<String> {
        String::from_utf8(plaintext.to_vec()).map_err(|_| {
            CryptoError::MalformedEnvelope("passthrough secret is not UTF-8".to_string())
        })
    }

    fn open(&self, sealed: &str) -> CryptoResult<Vec<u8>> {
        Ok(sealed.as_bytes().to_vec())
    }
}

fn truncated(sealed: &str) -> &str {
    let end = sealed
        .char_indices()
        .nth(LOG_PREFIX_LEN)
        .map_or(sealed.len(), |(i, _)| i);
    &sealed[..end]
}
