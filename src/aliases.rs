//! # Secure-Gate Type Aliases
//!
//! Type aliases for secure memory management using [`secure-gate`](https://github.com/Slurp9187/secure-gate).
//! Every secret-bearing buffer in the crate is one of these types, so it is
//! zeroized on drop and only readable through `.expose_secret()`.
//!
//! ## Type Categories
//!
//! ### HMAC Primitives
//! - [`HmacSha1`] - PRF for PBKDF2 key derivation
//! - [`HmacSha256`] - container authentication tag
//!
//! ### Dynamic Secrets
//! - [`PasswordString`] - UTF-8 password accepted by the high-level API
//! - [`PasswordBytes`] - raw byte password (also holds the legacy-truncated variant)
//! - [`PlaintextBuffer`] - decrypted data awaiting re-encryption
//!
//! ### Fixed-Size Secrets
//! - [`Aes256Key32`] - derived encryption or HMAC key
//! - [`Block16`] - one AES block of scratch space
//! - [`HmacTag32`] - computed HMAC-SHA256 tag
//! - [`Iv16`] - CBC initialization vector
//! - [`Salt8`] - PBKDF2 salt

use hmac::Hmac;
use sha1::Sha1;
use sha2::Sha256;

// ─────────────────────────────────────────────────────────────────────────────
// HMAC primitives
// ─────────────────────────────────────────────────────────────────────────────
pub type HmacSha1 = Hmac<Sha1>;
pub type HmacSha256 = Hmac<Sha256>;

// ─────────────────────────────────────────────────────────────────────────────
// SpanBuffer: generic secure stack buffer (direct alias to secure-gate's Fixed)
// ─────────────────────────────────────────────────────────────────────────────
pub type SpanBuffer<const N: usize> = secure_gate::Fixed<[u8; N]>;

pub type Block16 = SpanBuffer<16>; // one AES block

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
pub type PasswordString = secure_gate::Dynamic<String>;
pub type PasswordBytes = secure_gate::Dynamic<Vec<u8>>;
pub type PlaintextBuffer = secure_gate::Dynamic<Vec<u8>>; // decrypted data held between steps

// ─────────────────────────────────────────────────────────────────────────────
// Fixed-size concrete secrets: alphabetical order
// ─────────────────────────────────────────────────────────────────────────────
pub type Aes256Key32 = SpanBuffer<32>; // encryption key, HMAC key
pub type HmacTag32 = SpanBuffer<32>; // container trailer
pub type Iv16 = SpanBuffer<16>;
pub type Salt8 = SpanBuffer<8>; // encryption salt, HMAC salt
