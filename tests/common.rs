//! tests/common.rs
//! Common constants and utilities shared across test files

use serde::Deserialize;

/// Standard test password, matching the documented example
#[allow(dead_code)] // Used across multiple test files
pub const TEST_PASSWORD: &str = "correct horse";

#[allow(dead_code)]
pub const WRONG_PASSWORD: &str = "wrong horse";

/// Common test data used across multiple tests
#[allow(dead_code)]
pub const TEST_DATA: &[u8] = b"hello world";

/// Both supported format versions
#[allow(dead_code)]
pub const VERSIONS: [u8; 2] = [2, 3];

/// Shared JSON loader for tests/vector/data/
#[allow(dead_code)]
pub fn load_json<T>(filename: &str) -> Vec<T>
where
    T: for<'de> Deserialize<'de>,
{
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("vector")
        .join("data")
        .join(filename);

    let content =
        std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {filename}: {e}"));

    serde_json::from_str(&content).unwrap_or_else(|e| panic!("Failed to parse {filename}: {e}"))
}

/// Decode a hex string into a fixed-size array
#[allow(dead_code)]
pub fn hex_array<const N: usize>(hex_str: &str) -> [u8; N] {
    let bytes = hex::decode(hex_str).unwrap_or_else(|e| panic!("invalid hex {hex_str}: {e}"));
    bytes
        .as_slice()
        .try_into()
        .unwrap_or_else(|_| panic!("expected {N} bytes, got {}", bytes.len()))
}

/// Full-container vector (tests/vector/data/test_vectors_v*.json)
#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct ContainerVector {
    pub title: String,
    pub version: u8,
    pub password: String,
    pub enc_salt_hex: String,
    pub hmac_salt_hex: String,
    pub iv_hex: String,
    pub plaintext_hex: String,
    pub ciphertext_hex: String,
}

#[allow(dead_code)]
pub const VECTOR_FILES: [&str; 2] = ["test_vectors_v2.json", "test_vectors_v3.json"];
