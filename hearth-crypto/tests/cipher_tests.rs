use base64::{engine::general_purpose::STANDARD, Engine};
use hearth_crypto::{
    decrypt, decrypt_string, encrypt, encrypt_string, CryptoError, Envelope, MasterKey,
    NONCE_SIZE, TAG_SIZE,
};

// ── roundtrip ────────────────────────────────────────────────────

#[test]
fn encrypt_decrypt_roundtrip() {
    let key = MasterKey::generate();
    let plaintext = b"Hello, World!";
    let envelope = encrypt(&key, plaintext).unwrap();
    let decrypted = decrypt(&key, &envelope).unwrap();
    assert_eq!(decrypted, plaintext);
}

#[test]
fn encrypt_decrypt_empty() {
    let key = MasterKey::generate();
    let envelope = encrypt(&key, b"").unwrap();
    assert!(envelope.ciphertext.is_empty());
    let decrypted = decrypt(&key, &envelope).unwrap();
    assert_eq!(decrypted, b"");
}

#[test]
fn encrypt_decrypt_large_data() {
    let key = MasterKey::generate();
    let plaintext: Vec<u8> = (0..10000).map(|i| (i % 256) as u8).collect();
    let envelope = encrypt(&key, &plaintext).unwrap();
    let decrypted = decrypt(&key, &envelope).unwrap();
    assert_eq!(decrypted, plaintext);
}

#[test]
fn envelope_has_fixed_nonce_and_tag_sizes() {
    let key = MasterKey::generate();
    let envelope = encrypt(&key, b"sized").unwrap();
    assert_eq!(envelope.nonce.len(), NONCE_SIZE);
    assert_eq!(envelope.tag.len(), TAG_SIZE);
    assert_eq!(envelope.ciphertext.len(), 5);
}

// ── failure paths ────────────────────────────────────────────────

#[test]
fn wrong_key_fails_authentication() {
    let key1 = MasterKey::generate();
    let key2 = MasterKey::generate();
    let envelope = encrypt(&key1, b"Secret").unwrap();
    let err = decrypt(&key2, &envelope).unwrap_err();
    assert!(matches!(err, CryptoError::Authentication));
}

#[test]
fn tampered_ciphertext_fails_authentication() {
    let key = MasterKey::generate();
    let mut envelope = encrypt(&key, b"Secret").unwrap();
    envelope.ciphertext[0] ^= 0x01;
    let err = decrypt(&key, &envelope).unwrap_err();
    assert!(matches!(err, CryptoError::Authentication));
}

#[test]
fn tampered_tag_fails_authentication() {
    let key = MasterKey::generate();
    let mut envelope = encrypt(&key, b"Secret").unwrap();
    envelope.tag[0] ^= 0x01;
    let err = decrypt(&key, &envelope).unwrap_err();
    assert!(matches!(err, CryptoError::Authentication));
}

#[test]
fn tampered_nonce_fails_authentication() {
    let key = MasterKey::generate();
    let mut envelope = encrypt(&key, b"Secret").unwrap();
    envelope.nonce[0] ^= 0x01;
    let err = decrypt(&key, &envelope).unwrap_err();
    assert!(matches!(err, CryptoError::Authentication));
}

#[test]
fn wrong_nonce_length_is_malformed_not_authentication() {
    let key = MasterKey::generate();
    let mut envelope = encrypt(&key, b"Secret").unwrap();
    envelope.nonce.pop();
    let err = decrypt(&key, &envelope).unwrap_err();
    assert!(matches!(err, CryptoError::MalformedEnvelope(_)));
}

#[test]
fn wrong_tag_length_is_malformed_not_authentication() {
    let key = MasterKey::generate();
    let mut envelope = encrypt(&key, b"Secret").unwrap();
    envelope.tag.push(0);
    let err = decrypt(&key, &envelope).unwrap_err();
    assert!(matches!(err, CryptoError::MalformedEnvelope(_)));
}

// ── non-determinism ──────────────────────────────────────────────

#[test]
fn same_plaintext_produces_different_envelopes() {
    let key = MasterKey::generate();
    let e1 = encrypt(&key, b"Same").unwrap();
    let e2 = encrypt(&key, b"Same").unwrap();
    assert_ne!(e1.nonce, e2.nonce);
    assert_ne!(e1.ciphertext, e2.ciphertext);
}

// ── string helpers ───────────────────────────────────────────────

#[test]
fn string_encrypt_decrypt() {
    let key = MasterKey::generate();
    let plaintext = "Hello, 世界! 🌍";
    let sealed = encrypt_string(&key, plaintext).unwrap();
    let opened = decrypt_string(&key, &sealed).unwrap();
    assert_eq!(opened, plaintext);
}

#[test]
fn decrypt_string_wrong_key_fails() {
    let k1 = MasterKey::generate();
    let k2 = MasterKey::generate();
    let sealed = encrypt_string(&k1, "secret").unwrap();
    let err = decrypt_string(&k2, &sealed).unwrap_err();
    assert!(matches!(err, CryptoError::Authentication));
}

#[test]
fn decrypt_string_malformed_input_never_reaches_cipher() {
    let key = MasterKey::generate();
    let err = decrypt_string(&key, "not-valid-base64!!!").unwrap_err();
    assert!(matches!(err, CryptoError::MalformedEnvelope(_)));
}

#[test]
fn decrypt_string_rejects_non_utf8_payload() {
    let key = MasterKey::generate();
    let envelope = encrypt(&key, &[0xff, 0xfe, 0xfd]).unwrap();
    let err = decrypt_string(&key, &envelope.encode()).unwrap_err();
    assert!(matches!(err, CryptoError::MalformedEnvelope(_)));
}

#[test]
fn tampered_envelope_string_fails_authentication() {
    let key = MasterKey::generate();
    let sealed = encrypt_string(&key, "hold the line").unwrap();
    let mut envelope = Envelope::decode(&sealed).unwrap();
    let last = envelope.ciphertext.len() - 1;
    envelope.ciphertext[last] ^= 0x80;
    let err = decrypt_string(&key, &envelope.encode()).unwrap_err();
    assert!(matches!(err, CryptoError::Authentication));
}

// ── known-key scenario ───────────────────────────────────────────

#[test]
fn zero_key_hello_world_envelope_shape() {
    let key = MasterKey::from_hex(&"0".repeat(64)).unwrap();
    let sealed = encrypt_string(&key, "hello world").unwrap();

    let fields: Vec<&str> = sealed.split(':').collect();
    assert_eq!(fields.len(), 3);
    assert_eq!(STANDARD.decode(fields[0]).unwrap().len(), 12);
    assert_eq!(STANDARD.decode(fields[1]).unwrap().len(), 16);

    assert_eq!(decrypt_string(&key, &sealed).unwrap(), "hello world");
}
