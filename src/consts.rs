//! # Constants
//!
//! Wire-format sizes, version bytes and KDF parameters for RNCryptor v2/v3.

/// Legacy format version whose decoder retries with a truncated password.
pub const RNCRYPTOR_V2: u8 = 2;

/// Current RNCryptor format version, and the default for encryption.
pub const RNCRYPTOR_V3: u8 = 3;

/// The version produced when the caller does not choose one.
pub const RNCRYPTOR_LATEST_VERSION: u8 = RNCRYPTOR_V3;

/// Options byte bit 0: keys are derived from a password.
pub const OPTION_USES_PASSWORD: u8 = 0x01;

/// PBKDF2-HMAC-SHA1 iteration count fixed by the format.
pub const PBKDF2_ITERATIONS: u32 = 10_000;

/// Derived key length (32 bytes = AES-256 / HMAC-SHA256 key).
pub const KEY_LENGTH: usize = 32;

/// Encryption and HMAC salt size.
pub const SALT_SIZE: usize = 8;

/// CBC initialization vector size.
pub const IV_SIZE: usize = 16;

/// AES block size.
pub const AES_BLOCK_SIZE: usize = 16;

/// HMAC-SHA256 tag size.
pub const HMAC_SIZE: usize = 32;

/// version + options + encryption salt + HMAC salt + IV.
pub const HEADER_SIZE: usize = 1 + 1 + SALT_SIZE + SALT_SIZE + IV_SIZE;

/// Smallest byte length a container can have (header + HMAC, empty ciphertext).
pub const MIN_CONTAINER_SIZE: usize = HEADER_SIZE + HMAC_SIZE;
