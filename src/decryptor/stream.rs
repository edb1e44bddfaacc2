//! src/decryptor/stream.rs
//! AES-256-CBC decryption and PKCS#7 unpadding: run only after the HMAC verified

use secure_gate::{RevealSecret, RevealSecretMut};
use crate::aliases::{Aes256Key32, Block16, Iv16};
use crate::consts::AES_BLOCK_SIZE;
use crate::error::RncryptorError;
use crate::utils::{constant_time_eq, xor_blocks};
use aes::cipher::{BlockDecrypt, KeyInit};
use aes::{Aes256Dec, Block as AesBlock};

/// Decrypt CBC `ciphertext` and strip its PKCS#7 padding.
///
/// # Errors
///
/// - [`RncryptorError::CorruptCiphertext`] if the length is not a positive
///   multiple of 16 or the padding is malformed
#[inline]
pub fn decrypt_cbc_pkcs7(
    ciphertext: &[u8],
    key: &Aes256Key32,
    iv: &Iv16,
) -> Result<Vec<u8>, RncryptorError> {
    if ciphertext.is_empty() || ciphertext.len() % AES_BLOCK_SIZE != 0 {
        return Err(RncryptorError::CorruptCiphertext(format!(
            "ciphertext length {} is not a positive multiple of {AES_BLOCK_SIZE}",
            ciphertext.len()
        )));
    }

    let cipher = Aes256Dec::new(key.expose_secret().into());
    let mut plaintext = Vec::with_capacity(ciphertext.len());

    let mut prev_block: [u8; 16] = *iv.expose_secret();
    let mut plaintext_block = Block16::new([0u8; 16]);

    for chunk in ciphertext.chunks_exact(AES_BLOCK_SIZE) {
        let mut aes_block = *AesBlock::from_slice(chunk);
        cipher.decrypt_block(&mut aes_block);

        xor_blocks(
            aes_block.as_slice(),
            &prev_block,
            plaintext_block.expose_secret_mut(),
        );
        plaintext.extend_from_slice(plaintext_block.expose_secret());

        prev_block.copy_from_slice(chunk);
    }

    let unpadded_len = pkcs7_unpadded_len(&plaintext)?;
    plaintext.truncate(unpadded_len);
    Ok(plaintext)
}

/// Validate PKCS#7 padding on a non-empty, block-aligned buffer and return the
/// length of the data in front of it.
#[inline(always)]
fn pkcs7_unpadded_len(padded: &[u8]) -> Result<usize, RncryptorError> {
    let last_block = &padded[padded.len() - AES_BLOCK_SIZE..];
    let padding = last_block[AES_BLOCK_SIZE - 1];

    if padding == 0 || padding as usize > AES_BLOCK_SIZE {
        return Err(RncryptorError::CorruptCiphertext(
            "invalid PKCS#7 padding".into(),
        ));
    }

    let padding_start = AES_BLOCK_SIZE - padding as usize;
    let expected_padding = [padding; AES_BLOCK_SIZE];
    if !constant_time_eq(&last_block[padding_start..], &expected_padding[padding_start..]) {
        return Err(RncryptorError::CorruptCiphertext(
            "corrupt PKCS#7 padding".into(),
        ));
    }

    Ok(padded.len() - padding as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encryptor::encrypt_cbc_pkcs7;

    fn key_iv() -> (Aes256Key32, Iv16) {
        (Aes256Key32::new([0x42; 32]), Iv16::new([0x24; 16]))
    }

    #[test]
    fn reverses_encrypt_for_block_boundaries() {
        let (key, iv) = key_iv();
        for len in [0usize, 1, 15, 16, 17, 31, 32, 33, 1000] {
            let plaintext: Vec<u8> = (0..len).map(|i| i as u8).collect();
            let ciphertext = encrypt_cbc_pkcs7(&plaintext, &key, &iv);
            let decrypted = decrypt_cbc_pkcs7(&ciphertext, &key, &iv).unwrap();
            assert_eq!(decrypted, plaintext, "length {len}");
        }
    }

    #[test]
    fn rejects_unaligned_or_empty_ciphertext() {
        let (key, iv) = key_iv();
        for len in [0usize, 1, 15, 17, 47] {
            let err = decrypt_cbc_pkcs7(&vec![0u8; len], &key, &iv).unwrap_err();
            assert!(matches!(err, RncryptorError::CorruptCiphertext(_)), "length {len}");
        }
    }

    #[test]
    fn rejects_bad_padding() {
        let (key, iv) = key_iv();
        let mut ciphertext = encrypt_cbc_pkcs7(b"sixteen byte msg", &key, &iv);
        // A bit flip in the previous ciphertext block lands on the padding byte: 0x10 -> 0x11
        let n = ciphertext.len();
        ciphertext[n - 17] ^= 0x01;
        let err = decrypt_cbc_pkcs7(&ciphertext, &key, &iv).unwrap_err();
        assert!(matches!(err, RncryptorError::CorruptCiphertext(_)));
    }

    #[test]
    fn padding_validation() {
        let mut block = [0u8; 16];
        block[15] = 0;
        assert!(pkcs7_unpadded_len(&block).is_err());
        block[15] = 17;
        assert!(pkcs7_unpadded_len(&block).is_err());
        block[14] = 2;
        block[15] = 2;
        assert_eq!(pkcs7_unpadded_len(&block).unwrap(), 14);
        block[13] = 3;
        block[14] = 2;
        block[15] = 3;
        assert!(pkcs7_unpadded_len(&block).is_err());
    }
}
