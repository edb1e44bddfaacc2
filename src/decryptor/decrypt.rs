//! src/decryptor/decrypt.rs
//! RNCryptor decryption: verify-then-decrypt, no plaintext before the HMAC checks out

use crate::aliases::{Iv16, PasswordBytes, PasswordString, Salt8};
use crate::crypto::kdf::pbkdf2::derive_pbkdf2_key;
use crate::decryptor::stream::decrypt_cbc_pkcs7;
use crate::decryptor::verify::verify_container;
use crate::error::RncryptorError;
use crate::header::Container;
use crate::utils::password_to_bytes;
use tracing::trace;

/// Decrypt an RNCryptor v2/v3 container.
///
/// Either the full, authenticated plaintext is returned or nothing is.
///
/// # Errors
///
/// - [`RncryptorError::MalformedInput`] if the input is under 66 bytes or the version is unknown
/// - [`RncryptorError::AuthenticationFailed`] on a wrong password or tampered data
/// - [`RncryptorError::CorruptCiphertext`] if the HMAC verified but unpadding failed
///
/// # Example
///
/// ```
/// use rncryptor_rs::aliases::PasswordString;
/// use rncryptor_rs::{decrypt, encrypt, RncryptorError};
///
/// let container = encrypt(b"hello world", &PasswordString::new("correct horse".to_string()), 3)?;
///
/// let wrong = PasswordString::new("wrong horse".to_string());
/// assert!(matches!(decrypt(&container, &wrong), Err(RncryptorError::AuthenticationFailed)));
/// # Ok::<(), RncryptorError>(())
/// ```
pub fn decrypt(container: &[u8], password: &PasswordString) -> Result<Vec<u8>, RncryptorError> {
    decrypt_bytes(container, &password_to_bytes(password))
}

/// [`decrypt`] for passwords that are arbitrary bytes rather than UTF-8 text.
pub fn decrypt_bytes(data: &[u8], password: &PasswordBytes) -> Result<Vec<u8>, RncryptorError> {
    let container = Container::parse(data)?;
    trace!(
        version = container.version,
        ciphertext_len = container.ciphertext.len(),
        "parsed container"
    );

    let verified = verify_container(&container, password)?;

    // Same password variant that produced the matching HMAC
    let encryption_salt = Salt8::new(*container.encryption_salt);
    let encryption_key = derive_pbkdf2_key(verified.password(), &encryption_salt)?;

    let iv = Iv16::new(*container.iv);
    decrypt_cbc_pkcs7(container.ciphertext, &encryption_key, &iv)
}
