//! # Container Parsing
//!
//! RNCryptor v2/v3 containers have a fixed layout:
//!
//! | Offset   | Size | Field           |
//! |----------|------|-----------------|
//! | 0        | 1    | version         |
//! | 1        | 1    | options         |
//! | 2        | 8    | encryption salt |
//! | 10       | 8    | HMAC salt       |
//! | 18       | 16   | IV              |
//! | 34       | n    | ciphertext      |
//! | 34 + n   | 32   | HMAC-SHA256     |
//!
//! [`Container`] borrows the fields straight out of the input buffer; nothing is copied.

use crate::consts::{
    HMAC_SIZE, IV_SIZE, MIN_CONTAINER_SIZE, RNCRYPTOR_V2, RNCRYPTOR_V3, SALT_SIZE,
};
use crate::error::RncryptorError;

/// Read and validate the container version byte.
///
/// Only the first byte is inspected, so this works on truncated input and is
/// cheap enough for sniffing blobs before a full [`decrypt`](crate::decrypt).
///
/// # Errors
///
/// - [`RncryptorError::MalformedInput`] if `data` is empty or the version is not 2 or 3
///
/// # Example
///
/// ```
/// use rncryptor_rs::read_version;
///
/// assert_eq!(read_version(&[0x03, 0x01])?, 3);
/// assert_eq!(read_version(&[0x02])?, 2);
/// assert!(read_version(&[0x01]).is_err());
/// # Ok::<(), rncryptor_rs::RncryptorError>(())
/// ```
pub fn read_version(data: &[u8]) -> Result<u8, RncryptorError> {
    let version = *data
        .first()
        .ok_or_else(|| RncryptorError::MalformedInput("empty input".into()))?;
    check_version(version)?;
    Ok(version)
}

#[inline(always)]
fn check_version(version: u8) -> Result<(), RncryptorError> {
    match version {
        RNCRYPTOR_V2 | RNCRYPTOR_V3 => Ok(()),
        other => Err(RncryptorError::MalformedInput(format!(
            "unsupported version byte 0x{other:02x}"
        ))),
    }
}

/// Split `N` bytes off the front of `cursor`.
#[inline(always)]
fn take_span<'a, const N: usize>(cursor: &mut &'a [u8]) -> Result<&'a [u8; N], RncryptorError> {
    let (head, tail) = cursor
        .split_first_chunk::<N>()
        .ok_or_else(|| RncryptorError::MalformedInput("container truncated".into()))?;
    *cursor = tail;
    Ok(head)
}

/// A parsed, borrowed view of an RNCryptor container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Container<'a> {
    pub version: u8,
    pub options: u8,
    pub encryption_salt: &'a [u8; SALT_SIZE],
    pub hmac_salt: &'a [u8; SALT_SIZE],
    pub iv: &'a [u8; IV_SIZE],
    pub ciphertext: &'a [u8],
    pub hmac: &'a [u8; HMAC_SIZE],
    raw: &'a [u8],
}

impl<'a> Container<'a> {
    /// Slice `data` into its seven fields.
    ///
    /// The options byte is returned as-is; it is covered by the HMAC, so a
    /// modified value fails authentication rather than parsing.
    ///
    /// # Errors
    ///
    /// - [`RncryptorError::MalformedInput`] if `data` is shorter than 66 bytes
    ///   or the version byte is not `0x02`/`0x03`
    pub fn parse(data: &'a [u8]) -> Result<Self, RncryptorError> {
        if data.len() < MIN_CONTAINER_SIZE {
            return Err(RncryptorError::MalformedInput(format!(
                "container is {} bytes, minimum is {MIN_CONTAINER_SIZE}",
                data.len()
            )));
        }

        let (body, hmac) = data
            .split_last_chunk::<HMAC_SIZE>()
            .ok_or_else(|| RncryptorError::MalformedInput("missing HMAC trailer".into()))?;

        let mut cursor = body;
        let [version, options] = *take_span::<2>(&mut cursor)?;
        check_version(version)?;

        let encryption_salt = take_span::<SALT_SIZE>(&mut cursor)?;
        let hmac_salt = take_span::<SALT_SIZE>(&mut cursor)?;
        let iv = take_span::<IV_SIZE>(&mut cursor)?;

        Ok(Self {
            version,
            options,
            encryption_salt,
            hmac_salt,
            iv,
            ciphertext: cursor,
            hmac,
            raw: data,
        })
    }

    /// Every container byte except the trailing HMAC: the input to HMAC-SHA256.
    #[inline]
    pub fn authenticated_message(&self) -> &'a [u8] {
        &self.raw[..self.raw.len() - HMAC_SIZE]
    }

    /// Re-serialize the container (exact inverse of [`Container::parse`]).
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(MIN_CONTAINER_SIZE + self.ciphertext.len());
        out.push(self.version);
        out.push(self.options);
        out.extend_from_slice(self.encryption_salt);
        out.extend_from_slice(self.hmac_salt);
        out.extend_from_slice(self.iv);
        out.extend_from_slice(self.ciphertext);
        out.extend_from_slice(self.hmac);
        out
    }
}
