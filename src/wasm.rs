//! JavaScript bindings.
//!
//! Every `wasm-pack` target (`web`, `nodejs`, `bundler`, `no-modules`) wraps
//! this one export. Build with:
//!
//! ```sh
//! wasm-pack build --target web
//! ```
//!
//! # Examples (JavaScript)
//!
//! ```js
//! import { md5 } from '@gogors/md5-wasm';
//!
//! md5('hello');                          // '5d41402abc4b2a76b9719d911017c592'
//! md5(new Uint8Array([1, 2, 3]));        // hashes the bytes as-is
//! md5('hello', { asBytes: true });       // Uint8Array(16)
//! md5('\xe9', { encoding: 'binary' });   // hashes the single byte 0xe9
//! ```

use js_sys::{JsString, Reflect, Uint8Array};
use wasm_bindgen::prelude::*;

use crate::{compute, Digest, Encoding, Error};

#[wasm_bindgen(typescript_custom_section)]
const TS_APPEND_CONTENT: &str = r#"
export interface MD5Options {
    encoding?: 'utf8' | 'binary';
    asBytes?: boolean;
    asString?: boolean;
    as_bytes?: boolean;
    as_string?: boolean;
}

export function md5(message: string | Uint8Array, options?: MD5Options): string | Uint8Array;
"#;

/// Shape of the returned digest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Output {
    #[default]
    Hex,
    Bytes,
    BinaryString,
}

#[derive(Clone, Copy, Debug, Default)]
struct Options {
    encoding: Encoding,
    output: Output,
}

impl Options {
    fn from_js(value: &JsValue) -> Result<Options, Error> {
        if value.is_undefined() || value.is_null() {
            return Ok(Options::default());
        }
        if !value.is_object() {
            return Err(Error::InvalidArgument(format!("options {value:?}")));
        }

        let encoding = match property(value, "encoding").as_string() {
            Some(name) => name.parse()?,
            None => Encoding::default(),
        };
        let output = if flag(value, "asBytes", "as_bytes") {
            Output::Bytes
        } else if flag(value, "asString", "as_string") {
            Output::BinaryString
        } else {
            Output::Hex
        };

        Ok(Options { encoding, output })
    }
}

fn property(target: &JsValue, key: &str) -> JsValue {
    Reflect::get(target, &JsValue::from_str(key)).unwrap_or(JsValue::UNDEFINED)
}

fn flag(target: &JsValue, camel: &str, snake: &str) -> bool {
    property(target, camel).is_truthy() || property(target, snake).is_truthy()
}

fn message_bytes(message: &JsValue, encoding: Encoding) -> Result<Vec<u8>, Error> {
    if let Some(text) = message.dyn_ref::<JsString>() {
        return match encoding {
            // Well-formed strings take the fast path through the host's UTF-8 encoder.
            Encoding::Utf8 if text.is_valid_utf16() => message
                .as_string()
                .map(String::into_bytes)
                .ok_or_else(|| Error::InvalidArgument(format!("{message:?}"))),
            _ => encoding.encode(&text.iter().collect::<Vec<u16>>()),
        };
    }
    if let Some(array) = message.dyn_ref::<Uint8Array>() {
        return Ok(array.to_vec());
    }
    Err(Error::InvalidArgument(format!("{message:?}")))
}

fn render(digest: Digest, output: Output) -> JsValue {
    match output {
        Output::Hex => JsValue::from_str(&digest.to_hex()),
        Output::Bytes => Uint8Array::from(&digest[..]).into(),
        Output::BinaryString => JsValue::from_str(&digest.to_binary_string()),
    }
}

/// Compute the MD5 digest of a string or `Uint8Array`.
///
/// Returns the 32-character lowercase hexadecimal digest unless `options`
/// asks for raw bytes or a binary string. Throws on a non-string,
/// non-`Uint8Array` message and on strings with unpaired surrogates.
#[wasm_bindgen(js_name = "md5", skip_typescript)]
pub fn md5(message: &JsValue, options: &JsValue) -> Result<JsValue, JsError> {
    let options = Options::from_js(options)?;
    let bytes = message_bytes(message, options.encoding)?;
    Ok(render(compute(bytes), options.output))
}
