// src/encryptor/mod.rs

//! High-level encryption facade.
//!
//! Core API: `encrypt(plaintext, &password, version)?` returns a complete container.
//! Helpers: `encrypt_cbc_pkcs7` and the `write_*` functions for custom flows.

pub(crate) mod encrypt;
pub(crate) mod stream;
pub(crate) mod write;

pub(crate) use encrypt::encrypt_with_params;
pub use encrypt::{encrypt, encrypt_bytes};
pub use stream::encrypt_cbc_pkcs7;
pub use write::{write_header, write_hmac, write_octets};
