use alloc::string::String;

use thiserror::Error;

/// Errors raised while turning a caller's input into bytes.
///
/// The digest computation itself never fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The text contains an unpaired UTF-16 surrogate.
    #[error("invalid text encoding: unpaired surrogate at offset {offset}")]
    InvalidText {
        /// Offset of the offending code unit.
        offset: usize,
    },

    /// A code unit does not fit into a single byte under the binary encoding.
    #[error("invalid text encoding: code unit {unit:#06x} at offset {offset} is not a byte")]
    UnrepresentableByte {
        /// Offset of the offending code unit.
        offset: usize,
        /// The code unit.
        unit: u16,
    },

    /// The requested encoding is not supported.
    #[error("unknown encoding {0:?}")]
    UnknownEncoding(String),

    /// The caller passed a value that cannot be hashed.
    #[error("Illegal argument {0}")]
    InvalidArgument(String),
}
