//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All operations return [`Result<T, RncryptorError>`](RncryptorError).

use thiserror::Error;

/// The error type for all RNCryptor operations.
///
/// Authentication failures are deliberately undifferentiated: a wrong password
/// and a tampered container produce the same [`RncryptorError::AuthenticationFailed`].
#[derive(Error, Debug)]
pub enum RncryptorError {
    /// The caller asked to encrypt with a format version other than 2 or 3.
    ///
    /// Raised before any key derivation or random generation takes place.
    #[error("Unsupported version: {0} (only versions 2 and 3 are supported)")]
    UnsupportedVersion(u8),

    /// The container could not be parsed.
    ///
    /// Used when:
    /// - the input is shorter than the 66-byte minimum (34-byte header + 32-byte HMAC)
    /// - the version byte is neither `0x02` nor `0x03`
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// HMAC verification failed for the supplied password (and, for version 2
    /// containers, for its legacy-truncated variant).
    #[error("Password may be incorrect, or the data has been corrupted (HMAC could not be verified)")]
    AuthenticationFailed,

    /// The HMAC verified but the ciphertext could not be unpadded.
    ///
    /// A correctly encoded container never produces this; it is treated as fatal.
    #[error("Corrupt ciphertext: {0}")]
    CorruptCiphertext(String),

    /// A cryptographic primitive rejected its parameters.
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// The operating system random source failed.
    #[error("Random source error: {0}")]
    RandomSource(String),

    /// I/O error while writing container fields.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<&'static str> for RncryptorError {
    fn from(msg: &'static str) -> Self {
        RncryptorError::Crypto(msg.to_string())
    }
}
