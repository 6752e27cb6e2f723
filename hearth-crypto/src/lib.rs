//! Secret encryption layer for Hearth.
//!
//! This crate protects third-party credentials (API keys, OAuth tokens)
//! before an external storage collaborator persists them:
//!
//! - [`MasterKey`] — the process-wide 256-bit key, resolved from
//!   configuration and passed explicitly into every call
//! - [`Envelope`] — the self-describing `nonce:tag:ciphertext` stored form
//! - [`encrypt`] / [`decrypt`] — AES-256-GCM with a fresh nonce per call
//! - [`SecretEncryptor`] — the sealing seam storage code depends on
//!
//! Decryption fails closed: a bad tag is [`CryptoError::Authentication`],
//! surfaced distinctly from malformed data, and no partial plaintext is
//! ever returned.

mod cipher;
mod encryptor;
mod envelope;
mod error;
mod key;

pub use cipher::{decrypt, decrypt_string, encrypt, encrypt_string};
pub use encryptor::{KeyedEncryptor, PassthroughEncryptor, SecretEncryptor};
pub use envelope::{Envelope, FIELD_DELIMITER, NONCE_SIZE, TAG_SIZE};
pub use error::{CryptoError, CryptoResult};
pub use key::{MasterKey, KEY_SIZE, MASTER_KEY_ENV};
