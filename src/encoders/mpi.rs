//! OpenSSL MPI framing: a 4-byte big-endian length followed by the
//! magnitude, with a `0x00` prepended when the top bit would read as a sign.

use crate::core::integer::{UintBytes, bytes_to_uint, uint_to_bytes};
use crate::encoders::algorithms::errors::{CodecError, Result};
use num_bigint::BigUint;

const HEADER_LEN: usize = 4;

/// Encodes a non-negative integer as an MPI.
///
/// # Errors
///
/// `Overflow` if the payload is longer than `u32::MAX` bytes.
pub fn mpi_encode(n: &BigUint) -> Result<Vec<u8>> {
    let mut payload = uint_to_bytes(n, UintBytes::default())?;
    if payload[0] & 0x80 != 0 {
        payload.insert(0, 0x00);
    }

    let len = u32::try_from(payload.len())
        .map_err(|_| CodecError::overflow("MPI payload", "a 32-bit length field"))?;

    let mut out = Vec::with_capacity(HEADER_LEN + payload.len());
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(&payload);
    Ok(out)
}

/// Decodes a non-negative MPI.
///
/// # Errors
///
/// * `Length` if the header is short or disagrees with the payload size.
/// * `Range` if the sign bit is set.
pub fn mpi_decode(data: &[u8]) -> Result<BigUint> {
    let Some((header, payload)) = data.split_first_chunk::<HEADER_LEN>() else {
        return Err(CodecError::invalid_length(
            data.len(),
            "at least 4 bytes",
            "an MPI starts with a 4-byte big-endian length",
        ));
    };

    let len = u32::from_be_bytes(*header) as usize;
    if len != payload.len() {
        return Err(CodecError::invalid_length(
            payload.len(),
            format!("{} payload bytes", len),
            "the length field does not match the data that follows",
        ));
    }

    if payload.first().is_some_and(|&b| b & 0x80 != 0) {
        return Err(CodecError::out_of_range(
            "negative MPI",
            "a non-negative integer",
        ));
    }

    Ok(bytes_to_uint(payload))
}
