//! Base-36, base-58, base-62 and decimal text.
//!
//! All four are thin wrappers over the radix codec. Every leading `0x00`
//! byte is written as one zero symbol (`'0'`, or `'1'` for base-58) and read
//! back the same way, so `decode(encode(b)) == b` for any input. Decoders
//! skip ASCII whitespace.

use crate::core::alphabet::{BASE36, BASE58, BASE62, DECIMAL};
use crate::encoders::algorithms::radix;

pub use crate::encoders::algorithms::errors::Result;

/// Upper-case base-36.
pub fn base36_encode(data: &[u8]) -> String {
    radix::encode(data, &BASE36)
}

/// Base-36 decoding is case-insensitive.
pub fn base36_decode(encoded: &str) -> Result<Vec<u8>> {
    radix::decode(encoded, &BASE36)
}

pub fn base58_encode(data: &[u8]) -> String {
    radix::encode(data, &BASE58)
}

pub fn base58_decode(encoded: &str) -> Result<Vec<u8>> {
    radix::decode(encoded, &BASE58)
}

pub fn base62_encode(data: &[u8]) -> String {
    radix::encode(data, &BASE62)
}

pub fn base62_decode(encoded: &str) -> Result<Vec<u8>> {
    radix::decode(encoded, &BASE62)
}

pub fn decimal_encode(data: &[u8]) -> String {
    radix::encode(data, &DECIMAL)
}

pub fn decimal_decode(encoded: &str) -> Result<Vec<u8>> {
    radix::decode(encoded, &DECIMAL)
}
