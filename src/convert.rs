//! src/convert.rs
//! Legacy → v3 conversion utilities
//!
//! Version 2 containers may only open through the truncated-password
//! fallback. Re-encrypting them as version 3 removes that dependency: the
//! new container authenticates with the password exactly as given.

use secure_gate::RevealSecret;
use crate::aliases::{PasswordString, PlaintextBuffer};
use crate::consts::RNCRYPTOR_V3;
use crate::{decrypt, encrypt, RncryptorError};

/// Convert a v2 (or v3) container into a fresh v3 container.
///
/// # Features
/// - Supports **separate old & new passwords**
/// - `new_password = None` → re-encrypts under `old_password`
/// - New salts and IV are always generated; nothing is carried over from the input
///
/// The intermediate plaintext is held in a zeroizing buffer.
///
/// # Errors
///
/// Anything [`decrypt`] or [`encrypt`] can return.
///
/// # Example
///
/// ```
/// use rncryptor_rs::aliases::PasswordString;
/// use rncryptor_rs::{convert_to_v3, decrypt, encrypt};
///
/// let password = PasswordString::new("upgrade me".to_string());
/// let v2 = encrypt(b"old data", &password, 2)?;
///
/// let v3 = convert_to_v3(&v2, &password, None)?;
/// assert_eq!(v3[0], 3);
/// assert_eq!(decrypt(&v3, &password)?, b"old data");
/// # Ok::<(), rncryptor_rs::RncryptorError>(())
/// ```
pub fn convert_to_v3(
    container: &[u8],
    old_password: &PasswordString,
    new_password: Option<&PasswordString>,
) -> Result<Vec<u8>, RncryptorError> {
    let plaintext = PlaintextBuffer::new(decrypt(container, old_password)?);
    let new_password = new_password.unwrap_or(old_password);

    encrypt(plaintext.expose_secret(), new_password, RNCRYPTOR_V3)
}
