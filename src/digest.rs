use alloc::string::String;
use core::convert;
use core::fmt;
use core::ops;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// A digest.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Digest(pub [u8; 16]);

impl Digest {
    /// Render the digest as 32 lowercase hexadecimal characters.
    pub fn to_hex(&self) -> String {
        let mut output = String::with_capacity(2 * self.0.len());
        for &value in &self.0 {
            output.push(char::from(HEX_DIGITS[usize::from(value >> 4)]));
            output.push(char::from(HEX_DIGITS[usize::from(value & 0x0f)]));
        }
        output
    }

    /// Render the digest as a binary string, one character per byte
    /// (`U+0000` to `U+00FF`).
    pub fn to_binary_string(&self) -> String {
        self.0.iter().copied().map(char::from).collect()
    }
}

impl convert::From<Digest> for [u8; 16] {
    #[inline]
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl fmt::Debug for Digest {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(self, formatter)
    }
}

impl fmt::Display for Digest {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(self, formatter)
    }
}

impl ops::Deref for Digest {
    type Target = [u8; 16];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl ops::DerefMut for Digest {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

macro_rules! implement {
    ($kind:ident, $format:expr) => {
        impl fmt::$kind for Digest {
            fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                for value in &self.0 {
                    write!(formatter, $format, value)?;
                }
                Ok(())
            }
        }
    };
}

implement!(LowerHex, "{:02x}");
implement!(UpperHex, "{:02X}");

#[cfg(test)]
mod tests {
    use super::Digest;

    const SAMPLE: Digest = Digest([
        0x90, 0x01, 0x50, 0x98, 0x3c, 0xd2, 0x4f, 0xb0, 0xd6, 0x96, 0x3f, 0x7d, 0x28, 0xe1, 0x7f,
        0x72,
    ]);

    #[test]
    fn hex() {
        assert_eq!(SAMPLE.to_hex(), "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(format!("{:x}", SAMPLE), SAMPLE.to_hex());
        assert_eq!(format!("{}", SAMPLE), SAMPLE.to_hex());
        assert_eq!(format!("{:?}", SAMPLE), SAMPLE.to_hex());
        assert_eq!(format!("{:X}", SAMPLE), "900150983CD24FB0D6963F7D28E17F72");
    }

    #[test]
    fn hex_shape() {
        for fill in [0x00, 0x0f, 0xa5, 0xff] {
            let hex = Digest([fill; 16]).to_hex();
            assert_eq!(hex.len(), 32);
            assert!(hex.bytes().all(|c| matches!(c, b'0'..=b'9' | b'a'..=b'f')));
        }
    }

    #[test]
    fn binary_string() {
        let binary = SAMPLE.to_binary_string();
        assert_eq!(binary.chars().count(), 16);
        let bytes: Vec<u8> = binary.chars().map(|c| c as u32 as u8).collect();
        assert_eq!(bytes, SAMPLE.0);
        assert!(binary.chars().all(|c| (c as u32) <= 0xff));
    }

    #[test]
    fn index() {
        let mut digest = SAMPLE;
        assert_eq!(digest[0], 0x90);
        assert_eq!(&digest[0], &0x90);
        assert_eq!(&mut digest[0], &mut 0x90);
        assert_eq!(<[u8; 16]>::from(digest), SAMPLE.0);
    }
}
