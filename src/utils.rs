// ============================================================================
// FILE: src/utils.rs
// ============================================================================

//! Utility functions used across the library.

use secure_gate::RevealSecret;
use crate::aliases::{PasswordBytes, PasswordString};
use subtle::ConstantTimeEq;

/// Copies a UTF-8 password into a zeroizing byte buffer.
///
/// Everything below the public API treats passwords as raw bytes.
#[inline]
pub fn password_to_bytes(password: &PasswordString) -> PasswordBytes {
    PasswordBytes::new(password.expose_secret().as_bytes().to_vec())
}

/// XORs two 16-byte blocks and writes the result to `output`.
///
/// Used by the CBC chaining in both the encrypt and decrypt paths.
///
/// # Panics (by contract)
///
/// Panics if any of `block_a`, `block_b` or `output` is shorter than 16 bytes.
/// All callers pass `expose_secret()` of 16-byte `Fixed` buffers or
/// `chunks_exact(16)` slices.
#[inline(always)]
pub const fn xor_blocks(block_a: &[u8], block_b: &[u8], output: &mut [u8]) {
    let mut i = 0;
    while i < 16 {
        output[i] = block_a[i] ^ block_b[i];
        i += 1;
    }
}

/// Compares two byte slices without branching on the position of the first mismatch.
///
/// Lengths are public information and are checked up front. Equal-length
/// inputs are compared with [`subtle::ConstantTimeEq`].
///
/// # Example
///
/// ```
/// use rncryptor_rs::utils::constant_time_eq;
///
/// assert!(constant_time_eq(b"tag", b"tag"));
/// assert!(!constant_time_eq(b"tag", b"tab"));
/// assert!(!constant_time_eq(b"tag", b"tags"));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

/// Reproduces the password corruption of old version-2 Cocoa encoders.
///
/// Those encoders cut the password to its *character* count measured in *bytes*,
/// so any non-ASCII password lost its tail. Given the raw password bytes:
///
/// - byte length == character count (pure ASCII): returned unchanged
/// - otherwise: the first `character count` raw bytes, split mid-character if need be
///
/// Characters are counted by UTF-8 decoding; each byte of an invalid sequence
/// counts as one character.
///
/// # Example
///
/// ```
/// use rncryptor_rs::utils::truncate_multibyte_password;
///
/// assert_eq!(truncate_multibyte_password(b"ascii only"), b"ascii only");
/// // "中文" is 2 characters but 6 bytes
/// assert_eq!(truncate_multibyte_password("中文".as_bytes()), vec![0xE4, 0xB8]);
/// ```
pub fn truncate_multibyte_password(password: &[u8]) -> Vec<u8> {
    let char_count: usize = password
        .utf8_chunks()
        .map(|chunk| chunk.valid().chars().count() + chunk.invalid().len())
        .sum();

    if char_count == password.len() {
        return password.to_vec();
    }

    password[..char_count].to_vec()
}
