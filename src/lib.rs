// src/lib.rs

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod builders;
pub mod consts;
pub mod convert;
pub mod crypto;
pub mod decryptor;
pub mod encryptor;
pub mod error;
pub mod header;
pub mod utils;

// High-level API
pub use builders::EncryptBuilder;
pub use decryptor::{decrypt, decrypt_bytes};
pub use encryptor::{encrypt, encrypt_bytes};
pub use error::RncryptorError;

// Low-level KDF for custom flows
pub use crypto::kdf::pbkdf2::{derive_pbkdf2_key, derive_secure_pbkdf2_key};

#[cfg(feature = "batch-ops")]
pub use batch_ops::{decrypt_batch, encrypt_batch};

pub use convert::convert_to_v3;

pub use header::{read_version, Container}; // Quick version check + full parse

// Compile and run the README snippets as doctests
#[cfg(doctest)]
#[doc = include_str!("../README.md")]
pub struct ReadmeDoctests;
