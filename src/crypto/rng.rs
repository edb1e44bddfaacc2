// src/crypto/rng.rs
//! Secure randomness for fixed-size values (salts, IVs).
//!
//! Adds `T::try_random()` to every `Fixed<[u8; N]>` alias using `OsRng`.
//! Unlike a bare `fill_bytes`, an OS RNG failure is surfaced as
//! [`RncryptorError::RandomSource`] instead of silently leaving zeroes.

use crate::error::RncryptorError;
use rand::{rngs::OsRng, TryRngCore};
use secure_gate::{Fixed, RevealSecretMut};

/// Extension trait – gives `.try_random()` to all fixed-size secret types
pub trait SecureRandomExt: Sized {
    /// Generate a cryptographically secure random instance of this type
    fn try_random() -> Result<Self, RncryptorError>;
}

/// Blanket impl – every `Fixed<[u8; N]>` (`Salt8`, `Iv16`, …) gets `.try_random()`
impl<const N: usize> SecureRandomExt for Fixed<[u8; N]> {
    #[inline]
    fn try_random() -> Result<Self, RncryptorError> {
        let mut out = Fixed::new([0u8; N]);
        OsRng
            .try_fill_bytes(out.expose_secret_mut())
            .map_err(|e| RncryptorError::RandomSource(e.to_string()))?;
        Ok(out)
    }
}
