// src/crypto/hmac.rs

//! HMAC-SHA256 container tagging.
//!
//! The tag covers every container byte before it: version, options, both
//! salts, IV and ciphertext.

use secure_gate::{RevealSecret, RevealSecretMut};
use crate::aliases::{Aes256Key32, HmacSha256, HmacTag32};
use crate::error::RncryptorError;
use crate::utils::constant_time_eq;
use hmac::Mac;

/// Compute HMAC-SHA256 of `message` under `key` into a zeroizing buffer.
#[inline]
pub fn compute_hmac_tag(key: &Aes256Key32, message: &[u8]) -> Result<HmacTag32, RncryptorError> {
    let mut mac = <HmacSha256 as Mac>::new_from_slice(key.expose_secret())
        .map_err(|_| RncryptorError::from("HMAC-SHA256 rejected the key length"))?;
    mac.update(message);

    let mut tag = HmacTag32::new([0u8; 32]);
    tag.expose_secret_mut()
        .copy_from_slice(mac.finalize().into_bytes().as_slice());
    Ok(tag)
}

/// Recompute the tag and compare it against `expected` in constant time.
#[inline]
pub fn verify_hmac_tag(
    key: &Aes256Key32,
    message: &[u8],
    expected: &[u8],
) -> Result<bool, RncryptorError> {
    let computed = compute_hmac_tag(key, message)?;
    Ok(constant_time_eq(computed.expose_secret(), expected))
}
