//! # Key Derivation
//!
//! RNCryptor derives both the AES key and the HMAC key with PBKDF2-HMAC-SHA1
//! at a fixed 10,000 iterations, each from its own 8-byte salt.
//!
//! For most use cases, use the high-level [`encrypt`](crate::encrypt) and
//! [`decrypt`](crate::decrypt) functions, which handle key derivation.

pub mod pbkdf2;
