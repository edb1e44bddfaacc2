//! src/crypto/kdf/pbkdf2.rs

use secure_gate::{RevealSecret, RevealSecretMut};
use crate::aliases::{Aes256Key32, HmacSha1, PasswordBytes, Salt8};
use crate::consts::PBKDF2_ITERATIONS;
use crate::RncryptorError;

use pbkdf2::pbkdf2;

/// Derive PBKDF2-HMAC-SHA1 (10,000 rounds) directly into an `Aes256Key32` buffer.
///
/// RNCryptor runs this twice per operation, once with the encryption salt and
/// once with the HMAC salt, so the two keys are independent.
///
/// # Security
/// - Output buffer is zeroized on drop
/// - The password is read as raw bytes; no normalization is applied
#[inline(always)]
pub fn derive_secure_pbkdf2_key(
    password: &PasswordBytes,
    salt: &Salt8,
    out_key: &mut Aes256Key32,
) -> Result<(), RncryptorError> {
    pbkdf2::<HmacSha1>(
        password.expose_secret().as_slice(),
        salt.expose_secret(),
        PBKDF2_ITERATIONS,
        out_key.expose_secret_mut(),
    )
    .map_err(|e| RncryptorError::Crypto(format!("PBKDF2 failed: {e}")))?;
    Ok(())
}

/// Convenience: derive and return a fresh key.
#[inline]
pub fn derive_pbkdf2_key(
    password: &PasswordBytes,
    salt: &Salt8,
) -> Result<Aes256Key32, RncryptorError> {
    let mut key = Aes256Key32::new([0u8; 32]);
    derive_secure_pbkdf2_key(password, salt, &mut key)?;
    Ok(key)
}
