//! src/encryptor/stream.rs
//! AES-256-CBC encryption with PKCS#7 padding over a whole in-memory message.

use secure_gate::{RevealSecret, RevealSecretMut};
use crate::aliases::{Aes256Key32, Block16, Iv16};
use crate::consts::AES_BLOCK_SIZE;
use crate::utils::xor_blocks;
use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes256Enc, Block as AesBlock};

/// Encrypt `plaintext` in CBC mode, always appending 1–16 bytes of PKCS#7 padding.
///
/// Output length is `(plaintext.len() / 16 + 1) * 16`.
#[inline]
pub fn encrypt_cbc_pkcs7(plaintext: &[u8], key: &Aes256Key32, iv: &Iv16) -> Vec<u8> {
    let cipher = Aes256Enc::new(key.expose_secret().into());
    let mut ciphertext = Vec::with_capacity((plaintext.len() / AES_BLOCK_SIZE + 1) * AES_BLOCK_SIZE);

    // previous ciphertext block – starts as the IV
    let mut prev_block: [u8; 16] = *iv.expose_secret();
    let mut xor_output = Block16::new([0u8; 16]);

    let mut chunks = plaintext.chunks_exact(AES_BLOCK_SIZE);
    for chunk in &mut chunks {
        encrypt_block(&cipher, chunk, &mut prev_block, &mut xor_output, &mut ciphertext);
    }

    // Final block: remainder + padding (a full padding block when the input is aligned)
    let remainder = chunks.remainder();
    let pad = (AES_BLOCK_SIZE - remainder.len()) as u8;
    let mut final_block = Block16::new([pad; 16]);
    final_block.expose_secret_mut()[..remainder.len()].copy_from_slice(remainder);
    encrypt_block(
        &cipher,
        final_block.expose_secret(),
        &mut prev_block,
        &mut xor_output,
        &mut ciphertext,
    );

    ciphertext
}

#[inline(always)]
fn encrypt_block(
    cipher: &Aes256Enc,
    plaintext_block: &[u8],
    prev_block: &mut [u8; 16],
    xor_output: &mut Block16,
    ciphertext: &mut Vec<u8>,
) {
    xor_blocks(plaintext_block, prev_block, xor_output.expose_secret_mut());

    let mut aes_block = AesBlock::from(*xor_output.expose_secret());
    cipher.encrypt_block(&mut aes_block);

    prev_block.copy_from_slice(aes_block.as_slice());
    ciphertext.extend_from_slice(aes_block.as_slice());
}
