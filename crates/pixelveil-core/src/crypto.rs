//! # Message Encryption
//!
//! Optional confidentiality for the hidden message: the password is hashed
//! with SHA-256 into an AES-256 key and the message is sealed with AES-GCM.
//! An empty password bypasses the layer entirely, so unprotected messages
//! carry no encryption overhead and no markers.
//!
//! The sealed record layout is `nonce || ciphertext_with_tag`. Note that the
//! key derivation is a bare hash on purpose: images encoded by older builds
//! must stay decodable, and a salted KDF would change the record layout.

use aes_gcm::aead::{Aead, AeadCore, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

use crate::error::PixelveilError;
use crate::result::Result;

/// AES-GCM nonce size in bytes, prefixed to every sealed record
pub const NONCE_LEN: usize = 12;

/// Size of the GCM authentication tag appended to the ciphertext
pub const TAG_LEN: usize = 16;

/// encrypt a message with a password, returns `nonce || ciphertext_with_tag`
///
/// An empty password returns the message bytes verbatim.
pub fn encrypt_message(message: &str, password: &str) -> Result<Vec<u8>> {
    if password.is_empty() {
        return Ok(message.as_bytes().to_vec());
    }

    let mut key = derive_key(password);
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key));
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
    let encrypted = cipher.encrypt(&nonce, message.as_bytes());
    key.zeroize();

    let ciphertext = encrypted.map_err(|_| PixelveilError::EncryptionError)?;

    let mut sealed = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    sealed.extend_from_slice(&nonce);
    sealed.extend_from_slice(&ciphertext);

    Ok(sealed)
}

/// decrypt a sealed record with a password
///
/// An empty password returns the payload reinterpreted as text, unvalidated,
/// mirroring the encrypt-side bypass. Any cipher failure collapses into the
/// one generic [`PixelveilError::DecryptionError`].
pub fn decrypt_message(payload: &[u8], password: &str) -> Result<String> {
    if password.is_empty() {
        return Ok(String::from_utf8_lossy(payload).into_owned());
    }

    if payload.len() < NONCE_LEN {
        return Err(PixelveilError::CiphertextTooShort);
    }
    let (nonce, ciphertext) = payload.split_at(NONCE_LEN);

    let mut key = derive_key(password);
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key));
    let decrypted = cipher.decrypt(Nonce::from_slice(nonce), ciphertext);
    key.zeroize();

    let plaintext = decrypted.map_err(|_| PixelveilError::DecryptionError)?;

    Ok(String::from_utf8_lossy(&plaintext).into_owned())
}

fn derive_key(password: &str) -> [u8; 32] {
    Sha256::digest(password.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encryption_round_trip() {
        let password = "resistance is futile";
        let message = "lorem ipsum dolor sit amet, consectetur adipiscing elit";

        let sealed = encrypt_message(message, password).unwrap();
        let unsealed = decrypt_message(&sealed, password).unwrap();

        assert_ne!(message.as_bytes(), sealed.as_slice());
        assert_eq!(message, unsealed);
        assert_eq!(sealed.len(), NONCE_LEN + message.len() + TAG_LEN);
    }

    #[test]
    fn test_empty_password_bypasses_the_cipher() {
        let sealed = encrypt_message("hello", "").unwrap();
        assert_eq!(sealed, b"hello");

        let unsealed = decrypt_message(&sealed, "").unwrap();
        assert_eq!(unsealed, "hello");
    }

    #[test]
    fn test_encrypt_is_not_deterministic() {
        let one = encrypt_message("same message", "same password").unwrap();
        let two = encrypt_message("same message", "same password").unwrap();

        assert_ne!(one, two, "nonce freshness must differentiate the records");
        assert_eq!(decrypt_message(&one, "same password").unwrap(), "same message");
        assert_eq!(decrypt_message(&two, "same password").unwrap(), "same message");
    }

    #[test]
    fn test_wrong_password_fails_closed() {
        let sealed = encrypt_message("classified", "correct horse").unwrap();
        let result = decrypt_message(&sealed, "battery staple");

        assert!(matches!(result, Err(PixelveilError::DecryptionError)));
    }

    #[test]
    fn test_tampered_record_fails_closed() {
        let mut sealed = encrypt_message("classified", "hunter42").unwrap();
        let last = sealed.len() - 1;
        sealed[last] ^= 0x01;

        let result = decrypt_message(&sealed, "hunter42");
        assert!(matches!(result, Err(PixelveilError::DecryptionError)));
    }

    #[test]
    fn test_undersized_record_is_rejected() {
        let result = decrypt_message(&[0u8; NONCE_LEN - 1], "hunter42");
        assert!(matches!(result, Err(PixelveilError::CiphertextTooShort)));
    }

    #[test]
    fn test_empty_message_round_trip() {
        let sealed = encrypt_message("", "hunter42").unwrap();
        assert_eq!(sealed.len(), NONCE_LEN + TAG_LEN);
        assert_eq!(decrypt_message(&sealed, "hunter42").unwrap(), "");
    }
}
