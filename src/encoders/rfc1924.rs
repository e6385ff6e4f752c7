//! RFC 1924 base-85.
//!
//! The bulk codec shares the Ascii85 group structure but uses the RFC 1924
//! alphabet, with no `z` compaction and no framing (the form Git and
//! Mercurial use for binary patches). The IPv6 codec maps a 128-bit
//! integer to exactly 20 characters.

use crate::core::alphabet::{RFC1924, is_space};
use crate::encoders::algorithms::base85::{self, Base85Variant};
use crate::encoders::algorithms::errors::CodecError;
use num_bigint::BigUint;
use num_traits::ToPrimitive;

pub use crate::encoders::algorithms::errors::Result;

const VARIANT: Base85Variant = Base85Variant {
    alphabet: &RFC1924,
    compact_zero: false,
};

/// Characters in an encoded IPv6 address.
pub const IPV6_LEN: usize = 20;

pub fn encode(data: &[u8]) -> String {
    base85::encode_base85(data, VARIANT, false)
}

/// Like [`encode`] but keeps the characters produced by padding the last group.
pub fn encode_padded(data: &[u8]) -> String {
    base85::encode_base85(data, VARIANT, true)
}

pub fn decode(encoded: &str) -> Result<Vec<u8>> {
    base85::decode_base85(encoded, VARIANT)
}

/// Encodes a 128-bit value as 20 base-85 digits, most significant first.
pub fn ipv6_encode(value: u128) -> String {
    let mut digits = [0u8; IPV6_LEN];
    let mut n = value;
    for slot in digits.iter_mut().rev() {
        *slot = RFC1924.encode_digit((n % 85) as usize);
        n /= 85;
    }
    digits.iter().map(|&b| b as char).collect()
}

/// Arbitrary-precision front end to [`ipv6_encode`].
///
/// # Errors
///
/// `Range` if `value` exceeds `2^128 - 1`.
pub fn ipv6_encode_uint(value: &BigUint) -> Result<String> {
    value
        .to_u128()
        .map(ipv6_encode)
        .ok_or_else(|| CodecError::out_of_range(value.to_string(), "a value below 2^128"))
}

/// Decodes a 20-character RFC 1924 address, ignoring whitespace.
///
/// # Errors
///
/// * `Length` unless exactly 20 non-whitespace characters remain.
/// * `Char` for a character outside the alphabet.
/// * `Overflow` if the value exceeds `2^128 - 1`.
pub fn ipv6_decode(encoded: &str) -> Result<u128> {
    let symbols: Vec<(usize, char)> = encoded
        .chars()
        .enumerate()
        .filter(|&(_, c)| !is_space(c))
        .collect();

    if symbols.len() != IPV6_LEN {
        return Err(CodecError::invalid_length(
            symbols.len(),
            format!("exactly {}", IPV6_LEN),
            "an RFC 1924 address is always 20 characters",
        ));
    }

    let mut value: u128 = 0;
    for (position, c) in symbols {
        let digit = RFC1924.decode_char(c).ok_or_else(|| {
            CodecError::invalid_character(c, position, encoded, &RFC1924.describe())
        })?;
        value = value
            .checked_mul(85)
            .and_then(|v| v.checked_add(digit as u128))
            .ok_or_else(|| CodecError::overflow("RFC 1924 address", "128 bits"))?;
    }
    Ok(value)
}

/// [`ipv6_decode`] returning an arbitrary-precision integer.
pub fn ipv6_decode_uint(encoded: &str) -> Result<BigUint> {
    ipv6_decode(encoded).map(BigUint::from)
}
