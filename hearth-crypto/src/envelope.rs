//! Envelope encoding for encrypted values.
//!
//! The stored form is a single text string:
//! `base64(nonce):base64(tag):base64(ciphertext)`. Storage collaborators
//! treat it as an opaque blob; the envelope is self-describing and needs
//! only the master key to decrypt.

use crate::error::{CryptoError, CryptoResult};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

/// Size of nonce in bytes (96 bits for AES-256-GCM).
pub const NONCE_SIZE: usize = 12;

/// Size of authentication tag in bytes.
pub const TAG_SIZE: usize = 16;

/// Field separator; never occurs in the base64 alphabet.
pub const FIELD_DELIMITER: char = ':';

/// An encrypted value with the metadata needed for decryption.
///
/// Fields are raw bytes here; lengths are validated by the cipher, which is
/// the only layer holding the key to double-check authenticity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// The nonce used for encryption (unique per encryption).
    pub nonce: Vec<u8>,
    /// The authentication tag.
    pub tag: Vec<u8>,
    /// The ciphertext, tag detached.
    pub ciphertext: Vec<u8>,
}

impl Envelope {
    /// Returns the total size of the envelope payload in bytes.
    pub fn len(&self) -> usize {
        self.nonce.len() + self.tag.len() + self.ciphertext.len()
    }

    /// Returns true if the ciphertext is empty (encryption of the empty
    /// plaintext).
    pub fn is_empty(&self) -> bool {
        self.ciphertext.is_empty()
    }

    /// Encodes to the delimited base64 string stored by collaborators.
    pub fn encode(&self) -> String {
        format!(
            "{}{FIELD_DELIMITER}{}{FIELD_DELIMITER}{}",
            STANDARD.encode(&self.nonce),
            STANDARD.encode(&self.tag),
            STANDARD.encode(&self.ciphertext),
        )
    }

    /// Parses the delimited base64 form back into an envelope.
    ///
    /// # Errors
    /// Returns [`CryptoError::MalformedEnvelope`] if the string is not
    /// exactly three delimited fields, the nonce or tag field is empty, or
    /// any field fails base64 decoding. The ciphertext field may be empty.
    pub fn decode(encoded: &str) -> CryptoResult<Self> {
        let fields: Vec<&str> = encoded.split(FIELD_DELIMITER).collect();
        if fields.len() != 3 {
            return Err(CryptoError::MalformedEnvelope(format!(
                "expected 3 fields, got {}",
                fields.len()
            )));
        }
        if fields[0].is_empty() || fields[1].is_empty() {
            return Err(CryptoError::MalformedEnvelope(
                "empty nonce or tag field".to_string(),
            ));
        }

        let nonce = decode_field(fields[0], "nonce")?;
        let tag = decode_field(fields[1], "tag")?;
        let ciphertext = decode_field(fields[2], "ciphertext")?;

        Ok(Self {
            nonce,
            tag,
            ciphertext,
        })
    }
}

fn decode_field(field: &str, name: &str) -> CryptoResult<Vec<u8>> {
    STANDARD
        .decode(field)
        .map_err(|_| CryptoError::MalformedEnvelope(format!("invalid base64 in {name} field")))
}
