//! src/batch_ops.rs
//! Parallel encrypt/decrypt over many in-memory messages (feature `batch-ops`).
//!
//! Each call is independent and stateless, so the batch is a plain `rayon`
//! map. The first error aborts the batch; no partial results are returned.

use rayon::prelude::*;

use crate::aliases::PasswordString;
use crate::{decrypt, encrypt, RncryptorError};

pub fn encrypt_batch(
    plaintexts: &[&[u8]],
    password: &PasswordString,
    version: u8,
) -> Result<Vec<Vec<u8>>, RncryptorError> {
    plaintexts
        .par_iter()
        .map(|plaintext| encrypt(plaintext, password, version))
        .collect()
}

pub fn decrypt_batch(
    containers: &[&[u8]],
    password: &PasswordString,
) -> Result<Vec<Vec<u8>>, RncryptorError> {
    containers
        .par_iter()
        .map(|container| decrypt(container, password))
        .collect()
}
