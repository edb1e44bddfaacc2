//! tests/convert_tests.rs
//! v2 → v3 container upgrade

mod common;

use common::{load_json, TEST_DATA, TEST_PASSWORD};
use rncryptor_rs::aliases::PasswordString;
use rncryptor_rs::{convert_to_v3, decrypt, encrypt, read_version, RncryptorError};
use serde::Deserialize;

#[test]
fn convert_v2_same_password() {
    let password = PasswordString::new(TEST_PASSWORD.to_string());
    let v2 = encrypt(TEST_DATA, &password, 2).unwrap();

    let v3 = convert_to_v3(&v2, &password, None).unwrap();

    assert_eq!(read_version(&v3).unwrap(), 3);
    assert_ne!(&v2[2..34], &v3[2..34], "salts/IV must be regenerated");
    assert_eq!(decrypt(&v3, &password).unwrap(), TEST_DATA);
}

#[test]
fn convert_with_new_password() {
    let old_password = PasswordString::new("old secret".to_string());
    let new_password = PasswordString::new("new secret".to_string());
    let v2 = encrypt(TEST_DATA, &old_password, 2).unwrap();

    let v3 = convert_to_v3(&v2, &old_password, Some(&new_password)).unwrap();

    assert_eq!(decrypt(&v3, &new_password).unwrap(), TEST_DATA);
    let err = decrypt(&v3, &old_password).unwrap_err();
    assert!(matches!(err, RncryptorError::AuthenticationFailed));
}

#[test]
fn convert_wrong_old_password_fails() {
    let password = PasswordString::new(TEST_PASSWORD.to_string());
    let v2 = encrypt(TEST_DATA, &password, 2).unwrap();

    let wrong = PasswordString::new("nope".to_string());
    let err = convert_to_v3(&v2, &wrong, None).unwrap_err();
    assert!(matches!(err, RncryptorError::AuthenticationFailed));
}

#[test]
fn convert_v3_input_is_reencrypted() {
    let password = PasswordString::new(TEST_PASSWORD.to_string());
    let v3 = encrypt(TEST_DATA, &password, 3).unwrap();

    let converted = convert_to_v3(&v3, &password, None).unwrap();
    assert_ne!(converted, v3);
    assert_eq!(decrypt(&converted, &password).unwrap(), TEST_DATA);
}

#[derive(Debug, Deserialize)]
struct LegacyVector {
    version: u8,
    password: String,
    plaintext: String,
    ciphertext_hex: String,
}

#[test]
fn convert_legacy_truncated_container_drops_truncation() {
    let vectors: Vec<LegacyVector> = load_json("legacy_truncation_vectors.json");

    for v in vectors.iter().filter(|v| v.version == 2) {
        let legacy = hex::decode(&v.ciphertext_hex).unwrap();
        let password = PasswordString::new(v.password.clone());

        let upgraded = convert_to_v3(&legacy, &password, None).unwrap();

        // v3 has no fallback, so this only works because the full password was used
        assert_eq!(upgraded[0], 3);
        assert_eq!(decrypt(&upgraded, &password).unwrap(), v.plaintext.as_bytes());
    }
}
