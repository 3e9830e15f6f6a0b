//! Conversion of text into the bytes that get hashed.

use alloc::string::ToString;
use alloc::vec::Vec;
use core::str;

use crate::Error;

/// How text is turned into bytes.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Encoding {
    /// UTF-8, the canonical form.
    #[default]
    Utf8,
    /// One byte per UTF-16 code unit; every unit must be at most `0xFF`.
    Binary,
}

impl Encoding {
    /// Encode UTF-16 code units.
    pub fn encode(self, units: &[u16]) -> Result<Vec<u8>, Error> {
        match self {
            Encoding::Utf8 => utf16(units),
            Encoding::Binary => binary(units),
        }
    }
}

impl str::FromStr for Encoding {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "utf8" | "utf-8" => Ok(Encoding::Utf8),
            "binary" | "latin1" => Ok(Encoding::Binary),
            _ => Err(Error::UnknownEncoding(name.to_string())),
        }
    }
}

/// The UTF-8 bytes of text. No normalization, case folding or trimming.
#[inline]
pub fn utf8(text: &str) -> &[u8] {
    text.as_bytes()
}

/// Transcode UTF-16 code units to UTF-8.
///
/// An unpaired surrogate is an error rather than being replaced with
/// `U+FFFD`.
pub fn utf16(units: &[u16]) -> Result<Vec<u8>, Error> {
    let mut bytes = Vec::with_capacity(units.len());
    let mut offset = 0;
    for decoded in char::decode_utf16(units.iter().copied()) {
        let value = decoded.map_err(|_| Error::InvalidText { offset })?;
        let mut buffer = [0; 4];
        bytes.extend_from_slice(value.encode_utf8(&mut buffer).as_bytes());
        offset += value.len_utf16();
    }
    Ok(bytes)
}

/// Take every code unit as one byte.
pub fn binary(units: &[u16]) -> Result<Vec<u8>, Error> {
    units
        .iter()
        .enumerate()
        .map(|(offset, &unit)| {
            u8::try_from(unit).map_err(|_| Error::UnrepresentableByte { offset, unit })
        })
        .collect()
}
