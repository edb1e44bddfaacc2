//! src/encryptor/encrypt.rs
//! RNCryptor encryption: encrypt-then-MAC, fresh salts and IV per call

use crate::aliases::{Iv16, PasswordBytes, PasswordString, Salt8};
use crate::consts::{MIN_CONTAINER_SIZE, RNCRYPTOR_V2, RNCRYPTOR_V3};
use crate::crypto::hmac::compute_hmac_tag;
use crate::crypto::kdf::pbkdf2::derive_pbkdf2_key;
use crate::crypto::rng::SecureRandomExt;
use crate::encryptor::stream::encrypt_cbc_pkcs7;
use crate::encryptor::write::{write_header, write_hmac, write_octets};
use crate::error::RncryptorError;
use crate::utils::password_to_bytes;

/// Encrypt `plaintext` into an RNCryptor container of the given `version` (2 or 3).
///
/// Every call draws a new encryption salt, HMAC salt and IV from the OS RNG,
/// so encrypting the same input twice yields two different containers.
///
/// The version has no default here. For the default (3), use
/// [`EncryptBuilder::new()`](crate::EncryptBuilder::new), which needs no
/// version argument, or pass [`RNCRYPTOR_LATEST_VERSION`](crate::consts::RNCRYPTOR_LATEST_VERSION).
///
/// # Errors
///
/// - [`RncryptorError::UnsupportedVersion`] if `version` is not 2 or 3
/// - [`RncryptorError::RandomSource`] if the OS RNG fails
///
/// # Example
///
/// ```
/// use rncryptor_rs::aliases::PasswordString;
/// use rncryptor_rs::{decrypt, encrypt, EncryptBuilder};
///
/// let password = PasswordString::new("correct horse".to_string());
/// let container = encrypt(b"hello world", &password, 3)?;
/// assert_eq!(decrypt(&container, &password)?, b"hello world");
///
/// // Default version
/// let container = EncryptBuilder::new().encrypt(b"hello world", &password)?;
/// assert_eq!(container[0], 3);
/// # Ok::<(), rncryptor_rs::RncryptorError>(())
/// ```
pub fn encrypt(
    plaintext: &[u8],
    password: &PasswordString,
    version: u8,
) -> Result<Vec<u8>, RncryptorError> {
    encrypt_bytes(plaintext, &password_to_bytes(password), version)
}

/// [`encrypt`] for passwords that are arbitrary bytes rather than UTF-8 text.
pub fn encrypt_bytes(
    plaintext: &[u8],
    password: &PasswordBytes,
    version: u8,
) -> Result<Vec<u8>, RncryptorError> {
    // Rejected before touching the RNG or the KDF
    ensure_supported_version(version)?;

    let encryption_salt = Salt8::try_random()?;
    let hmac_salt = Salt8::try_random()?;
    let iv = Iv16::try_random()?;

    encrypt_with_params(plaintext, password, version, &encryption_salt, &hmac_salt, &iv)
}

#[inline(always)]
pub(crate) fn ensure_supported_version(version: u8) -> Result<(), RncryptorError> {
    match version {
        RNCRYPTOR_V2 | RNCRYPTOR_V3 => Ok(()),
        other => Err(RncryptorError::UnsupportedVersion(other)),
    }
}

/// Core encoder with caller-supplied salts and IV.
///
/// Only [`encrypt_bytes`] and the builder call this, and both have already
/// checked `version`. The builder is the sole path that lets salts/IV be pinned.
pub(crate) fn encrypt_with_params(
    plaintext: &[u8],
    password: &PasswordBytes,
    version: u8,
    encryption_salt: &Salt8,
    hmac_salt: &Salt8,
    iv: &Iv16,
) -> Result<Vec<u8>, RncryptorError> {
    let encryption_key = derive_pbkdf2_key(password, encryption_salt)?;
    let ciphertext = encrypt_cbc_pkcs7(plaintext, &encryption_key, iv);

    let mut container = Vec::with_capacity(MIN_CONTAINER_SIZE + ciphertext.len());
    write_header(&mut container, version, encryption_salt, hmac_salt, iv)?;
    write_octets(&mut container, &ciphertext)?;

    let hmac_key = derive_pbkdf2_key(password, hmac_salt)?;
    let tag = compute_hmac_tag(&hmac_key, &container)?;
    write_hmac(&mut container, &tag)?;

    Ok(container)
}
