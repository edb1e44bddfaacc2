//! # Builders
//!
//! Builder patterns for configuring container encryption.
//!
//! ## Modules
//!
//! - [`encrypt_builder`] - version selection and (test-only) pinned salts/IV

pub mod encrypt_builder;

pub use encrypt_builder::EncryptBuilder;
