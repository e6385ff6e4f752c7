//! Power-of-two codecs: base-64 (standard and URL-safe), base-32,
//! base-16/hex and binary.

use crate::core::alphabet::{BASE16, BASE32, BASE64, BINARY, HEX, is_space};
use crate::encoders::algorithms::chunked::{decode_chunked, encode_chunked};

pub use crate::encoders::algorithms::errors::Result;

const PAD: u8 = b'=';

/// Standard base-64 with `=` padding.
pub fn base64_encode(data: &[u8]) -> String {
    encode_chunked(data, &BASE64, Some(PAD))
}

/// Standard base-64. Whitespace is skipped and missing padding tolerated.
pub fn base64_decode(encoded: &str) -> Result<Vec<u8>> {
    decode_chunked(encoded, &BASE64, Some(PAD))
}

/// URL-safe base-64: `-_` instead of `+/`, no trailing `=`.
pub fn base64_urlsafe_encode(data: &[u8]) -> String {
    let mut encoded = base64_encode(data);
    let trimmed = encoded.trim_end_matches(PAD as char).len();
    encoded.truncate(trimmed);
    encoded
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            c => c,
        })
        .collect()
}

/// Decodes URL-safe base-64, padded or not. Canonical base-64 (`+`, `/`,
/// `=`) is accepted too.
pub fn base64_urlsafe_decode(encoded: &str) -> Result<Vec<u8>> {
    let mut canonical: String = encoded
        .chars()
        .filter(|&c| !is_space(c))
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            c => c,
        })
        .collect();
    let padded_len = canonical.len().div_ceil(4) * 4;
    while canonical.len() < padded_len {
        canonical.push(PAD as char);
    }
    base64_decode(&canonical)
}

/// RFC 4648 base-32, upper-case with `=` padding.
pub fn base32_encode(data: &[u8]) -> String {
    encode_chunked(data, &BASE32, Some(PAD))
}

pub fn base32_decode(encoded: &str) -> Result<Vec<u8>> {
    decode_chunked(encoded, &BASE32, Some(PAD))
}

/// Upper-case base-16.
pub fn base16_encode(data: &[u8]) -> String {
    encode_chunked(data, &BASE16, None)
}

/// Case-insensitive. An odd digit count fails with `Length`.
pub fn base16_decode(encoded: &str) -> Result<Vec<u8>> {
    decode_chunked(encoded, &BASE16, None)
}

/// Lower-case hex.
pub fn hex_encode(data: &[u8]) -> String {
    encode_chunked(data, &HEX, None)
}

pub fn hex_decode(encoded: &str) -> Result<Vec<u8>> {
    decode_chunked(encoded, &HEX, None)
}

/// Eight `0`/`1` digits per byte.
pub fn bin_encode(data: &[u8]) -> String {
    encode_chunked(data, &BINARY, None)
}

pub fn bin_decode(encoded: &str) -> Result<Vec<u8>> {
    decode_chunked(encoded, &BINARY, None)
}
