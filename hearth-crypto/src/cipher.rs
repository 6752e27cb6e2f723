//! Secret encryption using AES-256-GCM.
//!
//! Provides authenticated encryption with a fresh random nonce per call and
//! the tag stored detached in the envelope.

use crate::envelope::{Envelope, NONCE_SIZE, TAG_SIZE};
use crate::error::{CryptoError, CryptoResult};
use crate::key::MasterKey;
use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};
use rand::RngCore;

/// Encrypts plaintext under the master key.
///
/// Each call draws a fresh 12-byte nonce from the OS CSPRNG, so two
/// encryptions of the same plaintext never produce the same envelope.
///
/// # Errors
/// Returns [`CryptoError::Entropy`] if the platform random source fails;
/// the call aborts rather than degrading to a weaker nonce source.
pub fn encrypt(key: &MasterKey, plaintext: &[u8]) -> CryptoResult<Envelope> {
    let cipher = Aes256Gcm::new(key.as_bytes().into());

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    rand::rngs::OsRng
        .try_fill_bytes(&mut nonce_bytes)
        .map_err(|e| CryptoError::Entropy(e.to_string()))?;
    let nonce = Nonce::from_slice(&nonce_bytes);

    // AEAD output is ciphertext || tag; the envelope stores them detached.
    let mut ciphertext = cipher
        .encrypt(nonce, plaintext)
        .map_err(|e| CryptoError::Encryption(e.to_string()))?;
    let tag = ciphertext.split_off(ciphertext.len() - TAG_SIZE);

    Ok(Envelope {
        nonce: nonce_bytes.to_vec(),
        tag,
        ciphertext,
    })
}

/// Decrypts an envelope under the master key.
///
/// # Errors
/// Returns [`CryptoError::MalformedEnvelope`] if the nonce or tag has the
/// wrong length, and [`CryptoError::Authentication`] if tag verification
/// fails (tampered ciphertext, wrong key, or corrupted envelope). No
/// partial plaintext is ever returned.
pub fn decrypt(key: &MasterKey, envelope: &Envelope) -> CryptoResult<Vec<u8>> {
    if envelope.nonce.len() != NONCE_SIZE {
        return Err(CryptoError::MalformedEnvelope(format!(
            "nonce must be {NONCE_SIZE} bytes, got {}",
            envelope.nonce.len()
        )));
    }
    if envelope.tag.len() != TAG_SIZE {
        return Err(CryptoError::MalformedEnvelope(format!(
            "tag must be {TAG_SIZE} bytes, got {}",
            envelope.tag.len()
        )));
    }

    let cipher = Aes256Gcm::new(key.as_bytes().into());
    let nonce = Nonce::from_slice(&envelope.nonce);

    let mut sealed = Vec::with_capacity(envelope.ciphertext.len() + TAG_SIZE);
    sealed.extend_from_slice(&envelope.ciphertext);
    sealed.extend_from_slice(&envelope.tag);

    cipher
        .decrypt(nonce, sealed.as_ref())
        .map_err(|_| CryptoError::Authentication)
}

/// Encrypts a string and returns the delimited envelope form stored by
/// collaborators.
pub fn encrypt_string(key: &MasterKey, plaintext: &str) -> CryptoResult<String> {
    let envelope = encrypt(key, plaintext.as_bytes())?;
    Ok(envelope.encode())
}

/// Decrypts a delimited envelope string back to the original secret.
///
/// # Errors
/// A decrypted payload that is not UTF-8 is [`CryptoError::MalformedEnvelope`]:
/// the tag verified, so the bytes are authentic, but the stored value was
/// never a text secret.
pub fn decrypt_string(key: &MasterKey, encoded: &str) -> CryptoResult<String> {
    let envelope = Envelope::decode(encoded)?;
    let plaintext = decrypt(key, &envelope)?;
    String::from_utf8(plaintext).map_err(|_| {
        CryptoError::MalformedEnvelope("decrypted payload is not valid UTF-8".to_string())
    })
}
