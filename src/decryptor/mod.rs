// src/decryptor/mod.rs

//! High-level decryption facade.
//!
//! Core API: `decrypt(container, &password)?` returns verified plaintext.
//! Helpers: `verify_container`, `decrypt_cbc_pkcs7` for custom flows.

pub(crate) mod decrypt;
pub(crate) mod stream;
pub(crate) mod verify;

pub use decrypt::{decrypt, decrypt_bytes};
pub use stream::decrypt_cbc_pkcs7;
pub use verify::{verify_container, VerifiedPassword};
