//! src/builders/encrypt_builder.rs
//! Container encryption builder: version 3 and fresh randomness by default

use crate::aliases::{Iv16, PasswordBytes, PasswordString, Salt8};
use crate::consts::RNCRYPTOR_LATEST_VERSION;
use crate::crypto::rng::SecureRandomExt;
use crate::encryptor::encrypt::ensure_supported_version;
use crate::encryptor::encrypt_with_params;
use crate::error::RncryptorError;
use crate::utils::password_to_bytes;
use tracing::debug;

/// RNCryptor container encryption builder
///
/// Defaults: format version 3, salts and IV drawn from the OS RNG at encrypt time.
///
/// The `with_encryption_salt` / `with_hmac_salt` / `with_iv` setters exist for
/// reproducing known-answer vectors. Reusing a salt/IV pair under the same
/// password breaks the scheme, so leave them unset in production.
///
/// # Example
///
/// ```
/// use rncryptor_rs::aliases::PasswordString;
/// use rncryptor_rs::{decrypt, EncryptBuilder};
///
/// let password = PasswordString::new("correct horse".to_string());
/// let container = EncryptBuilder::new().with_version(2).encrypt(b"hello world", &password)?;
/// assert_eq!(container[0], 2);
/// assert_eq!(decrypt(&container, &password)?, b"hello world");
/// # Ok::<(), rncryptor_rs::RncryptorError>(())
/// ```
pub struct EncryptBuilder {
    version: u8,
    encryption_salt: Option<Salt8>,
    hmac_salt: Option<Salt8>,
    iv: Option<Iv16>,
}

impl EncryptBuilder {
    /// Create builder with defaults (version 3, random salts and IV)
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: RNCRYPTOR_LATEST_VERSION,
            encryption_salt: None,
            hmac_salt: None,
            iv: None,
        }
    }

    /// Select the format version. Validated when encrypting.
    #[must_use]
    pub fn with_version(mut self, version: u8) -> Self {
        self.version = version;
        self
    }

    /// Pin the encryption-key salt
    #[must_use]
    pub fn with_encryption_salt(mut self, salt: impl Into<[u8; 8]>) -> Self {
        self.encryption_salt = Some(Salt8::new(salt.into()));
        self
    }

    /// Pin the HMAC-key salt
    #[must_use]
    pub fn with_hmac_salt(mut self, salt: impl Into<[u8; 8]>) -> Self {
        self.hmac_salt = Some(Salt8::new(salt.into()));
        self
    }

    /// Pin the CBC IV
    #[must_use]
    pub fn with_iv(mut self, iv: impl Into<[u8; 16]>) -> Self {
        self.iv = Some(Iv16::new(iv.into()));
        self
    }

    /// Current format version
    #[must_use]
    pub const fn version(&self) -> u8 {
        self.version
    }

    /// Encrypt with a UTF-8 password
    pub fn encrypt(
        self,
        plaintext: &[u8],
        password: &PasswordString,
    ) -> Result<Vec<u8>, RncryptorError> {
        self.encrypt_bytes(plaintext, &password_to_bytes(password))
    }

    /// Encrypt with a raw byte password
    pub fn encrypt_bytes(
        self,
        plaintext: &[u8],
        password: &PasswordBytes,
    ) -> Result<Vec<u8>, RncryptorError> {
        ensure_supported_version(self.version)?;

        if self.encryption_salt.is_some() || self.hmac_salt.is_some() || self.iv.is_some() {
            debug!(version = self.version, "encrypting with caller-pinned salt/IV");
        }

        let encryption_salt = match self.encryption_salt {
            Some(salt) => salt,
            None => Salt8::try_random()?,
        };
        let hmac_salt = match self.hmac_salt {
            Some(salt) => salt,
            None => Salt8::try_random()?,
        };
        let iv = match self.iv {
            Some(iv) => iv,
            None => Iv16::try_random()?,
        };

        encrypt_with_params(
            plaintext,
            password,
            self.version,
            &encryption_salt,
            &hmac_salt,
            &iv,
        )
    }
}

impl Default for EncryptBuilder {
    fn default() -> Self {
        Self::new()
    }
}
