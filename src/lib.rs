//! The [MD5] hash function, compiled for JavaScript hosts.
//!
//! The crate is built once with `wasm-pack` for browsers, bundlers, Node.js and
//! plain script tags. Every flavor exports the same `md5` function, backed by
//! [`digest()`] and [`compute()`].
//!
//! ## Example
//!
//! ```
//! assert_eq!(md5_wasm::digest("hello"), "5d41402abc4b2a76b9719d911017c592");
//!
//! let digest = md5_wasm::compute(b"abcdefghijklmnopqrstuvwxyz");
//! assert_eq!(format!("{:x}", digest), "c3fcd3d76192e4007dfb496cca67e13b");
//! ```
//!
//! ## Security Warning
//!
//! The package is provided for the purposes of interoperability with protocols
//! and systems that mandate the use of MD5. However, MD5 should be considered
//! [cryptographically broken and unsuitable for further use][VU836068].
//! Collision attacks against MD5 are both practical and trivial, and
//! [theoretical attacks against MD5 have been found][ACM1724151].
//!
//! [RFC6151] advises no new protocols to be designed with any MD5-based
//! constructions, including HMAC-MD5.
//!
//! [MD5]: https://en.wikipedia.org/wiki/MD5
//!
//! [ACM1724151]: https://dl.acm.org/citation.cfm?id=1724151
//! [RFC6151]: https://tools.ietf.org/html/rfc6151
//! [VU836068]: https://www.kb.cert.org/vuls/id/836068

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::string::String;

mod digest;
mod engine;
mod error;

pub mod encoding;

#[cfg(all(target_arch = "wasm32", feature = "std"))]
mod wasm;

pub use digest::Digest;
pub use encoding::Encoding;
pub use error::Error;

#[cfg(all(target_arch = "wasm32", feature = "std"))]
pub use wasm::md5;

/// Compute the digest of data.
#[inline]
pub fn compute<T: AsRef<[u8]>>(data: T) -> Digest {
    let data = data.as_ref();
    #[cfg(feature = "tracing")]
    tracing::trace!(bytes = data.len(), "computing md5 digest");
    Digest(engine::compute(data))
}

/// Compute the digest of the UTF-8 encoding of text as 32 lowercase
/// hexadecimal characters.
#[inline]
pub fn digest(text: &str) -> String {
    compute(encoding::utf8(text)).to_hex()
}
