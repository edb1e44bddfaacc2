//! src/encryptor/write.rs
//! RNCryptor container write helpers

use secure_gate::RevealSecret;
use crate::aliases::{HmacTag32, Iv16, Salt8};
use crate::consts::OPTION_USES_PASSWORD;
use crate::error::RncryptorError;
use std::io::Write;

#[inline]
pub fn write_octets<W: Write>(writer: &mut W, data: &[u8]) -> Result<(), RncryptorError> {
    writer.write_all(data).map_err(RncryptorError::Io)
}

/// Write the 34-byte header: version, options, encryption salt, HMAC salt, IV.
///
/// `version` is written as given; [`encrypt`](crate::encrypt) and
/// [`EncryptBuilder`](crate::EncryptBuilder) validate it before calling this.
#[inline]
pub fn write_header<W: Write>(
    writer: &mut W,
    version: u8,
    encryption_salt: &Salt8,
    hmac_salt: &Salt8,
    iv: &Iv16,
) -> Result<(), RncryptorError> {
    write_octets(writer, &[version, OPTION_USES_PASSWORD])?;
    write_octets(writer, encryption_salt.expose_secret())?;
    write_octets(writer, hmac_salt.expose_secret())?;
    write_octets(writer, iv.expose_secret())
}

#[inline]
pub fn write_hmac<W: Write>(writer: &mut W, tag: &HmacTag32) -> Result<(), RncryptorError> {
    write_octets(writer, tag.expose_secret())
}
