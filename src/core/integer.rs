//! Unsigned integer to big-endian byte conversion.

use crate::encoders::algorithms::errors::{CodecError, Result};
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

/// Output shaping for [`uint_to_bytes`].
///
/// `fill_size` and `chunk_size` are mutually exclusive; zero means unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UintBytes {
    /// Left-pad with zero bytes to exactly this many bytes.
    pub fill_size: usize,
    /// Left-pad with zero bytes to a multiple of this many bytes.
    pub chunk_size: usize,
    /// With `fill_size`, return the unpadded bytes instead of failing when they don't fit.
    pub overflow: bool,
}

impl UintBytes {
    pub fn fill(fill_size: usize) -> Self {
        UintBytes {
            fill_size,
            ..Default::default()
        }
    }

    pub fn chunk(chunk_size: usize) -> Self {
        UintBytes {
            chunk_size,
            ..Default::default()
        }
    }

    pub fn overflow(mut self, overflow: bool) -> Self {
        self.overflow = overflow;
        self
    }
}

/// Interprets `bytes` as a big-endian unsigned integer. Empty input is 0.
pub fn bytes_to_uint(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Converts `n` to big-endian bytes shaped by `options`.
///
/// With no options the result is the minimal representation, and zero maps
/// to the single byte `0x00`.
///
/// # Errors
///
/// * `Arg` if both `fill_size` and `chunk_size` are set.
/// * `Overflow` if the minimal representation exceeds `fill_size` and
///   `overflow` is false.
pub fn uint_to_bytes(n: &BigUint, options: UintBytes) -> Result<Vec<u8>> {
    let UintBytes {
        fill_size,
        chunk_size,
        overflow,
    } = options;

    if fill_size > 0 && chunk_size > 0 {
        return Err(CodecError::InvalidArgument(
            "fill_size and chunk_size are mutually exclusive".to_string(),
        ));
    }

    if n.is_zero() {
        let len = if fill_size > 0 {
            fill_size
        } else if chunk_size > 0 {
            chunk_size
        } else {
            1
        };
        return Ok(vec![0u8; len]);
    }

    let raw = n.to_bytes_be();

    if fill_size > 0 {
        if raw.len() > fill_size {
            if overflow {
                return Ok(raw);
            }
            return Err(CodecError::overflow(
                format!("{}-byte integer", raw.len()),
                format!("fill size of {} bytes", fill_size),
            ));
        }
        return Ok(left_pad(raw, fill_size));
    }

    if chunk_size > 0 {
        let len = raw.len().div_ceil(chunk_size) * chunk_size;
        return Ok(left_pad(raw, len));
    }

    Ok(raw)
}

/// Signed front end to [`uint_to_bytes`].
///
/// # Errors
///
/// `Range` if `n` is negative, otherwise as [`uint_to_bytes`].
pub fn int_to_bytes(n: &BigInt, options: UintBytes) -> Result<Vec<u8>> {
    match n.to_biguint() {
        Some(u) => uint_to_bytes(&u, options),
        None => Err(CodecError::out_of_range(
            n.to_string(),
            "a non-negative integer",
        )),
    }
}

fn left_pad(raw: Vec<u8>, len: usize) -> Vec<u8> {
    if raw.len() >= len {
        return raw;
    }
    let mut out = vec![0u8; len - raw.len()];
    out.extend_from_slice(&raw);
    out
}
