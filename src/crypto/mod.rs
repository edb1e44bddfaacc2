// src/crypto/mod.rs

//! Low-level crypto primitives: KDF, HMAC tagging, randomness.
//!
//! Sub-modules for primitives; see crate root for re-exports.
//! HMAC types are defined in `aliases.rs`.

pub mod hmac;
pub mod kdf;
pub mod rng;
