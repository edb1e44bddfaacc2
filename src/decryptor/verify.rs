//! src/decryptor/verify.rs
//! HMAC verification, including the version-2 truncated-password fallback.
//!
//! Nothing in this module touches the ciphertext beyond hashing it: the
//! caller may decrypt only after [`verify_container`] returns `Ok`.

use secure_gate::RevealSecret;
use crate::aliases::{PasswordBytes, Salt8};
use crate::consts::RNCRYPTOR_V2;
use crate::crypto::hmac::verify_hmac_tag;
use crate::crypto::kdf::pbkdf2::derive_pbkdf2_key;
use crate::error::RncryptorError;
use crate::header::Container;
use crate::utils::truncate_multibyte_password;
use tracing::debug;

/// The password variant whose HMAC key authenticated the container.
///
/// The encryption key must be derived from this same variant.
pub enum VerifiedPassword<'a> {
    /// The caller's password, as given.
    Supplied(&'a PasswordBytes),
    /// Version 2 only: the password truncated the way old Cocoa encoders did.
    LegacyTruncated(PasswordBytes),
}

impl VerifiedPassword<'_> {
    #[inline]
    pub fn password(&self) -> &PasswordBytes {
        match self {
            Self::Supplied(password) => *password,
            Self::LegacyTruncated(password) => password,
        }
    }
}

/// Authenticate `container` under `password`.
///
/// 1. Derive the HMAC key from (password, HMAC salt) and check the tag.
/// 2. Version 2 only: on mismatch, retry once with
///    [`truncate_multibyte_password`]. An ASCII password truncates to itself,
///    so the retry is skipped as it could only fail again.
///
/// # Errors
///
/// - [`RncryptorError::AuthenticationFailed`] if no permitted variant verifies
pub fn verify_container<'p>(
    container: &Container<'_>,
    password: &'p PasswordBytes,
) -> Result<VerifiedPassword<'p>, RncryptorError> {
    let hmac_salt = Salt8::new(*container.hmac_salt);
    let message = container.authenticated_message();

    if tag_matches(password, &hmac_salt, message, container.hmac)? {
        return Ok(VerifiedPassword::Supplied(password));
    }

    match container.version {
        RNCRYPTOR_V2 => {
            let truncated =
                PasswordBytes::new(truncate_multibyte_password(password.expose_secret()));

            // Truncation only ever shortens, so equal length means unchanged
            if truncated.expose_secret().len() != password.expose_secret().len() {
                debug!("v2 HMAC mismatch, retrying with legacy-truncated password");
                if tag_matches(&truncated, &hmac_salt, message, container.hmac)? {
                    debug!("v2 container authenticated with legacy-truncated password");
                    return Ok(VerifiedPassword::LegacyTruncated(truncated));
                }
            }
        }
        // Version 3 has no fallback; `Container::parse` admits nothing but 2 and 3
        _ => {}
    }

    debug!(version = container.version, "HMAC verification failed");
    Err(RncryptorError::AuthenticationFailed)
}

#[inline]
fn tag_matches(
    password: &PasswordBytes,
    hmac_salt: &Salt8,
    message: &[u8],
    expected: &[u8; 32],
) -> Result<bool, RncryptorError> {
    let hmac_key = derive_pbkdf2_key(password, hmac_salt)?;
    verify_hmac_tag(&hmac_key, message, expected)
}
