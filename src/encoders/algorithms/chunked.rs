use crate::core::alphabet::{Alphabet, is_space};
use num_integer::lcm;

pub use super::errors::{CodecError, Result};

/// Bit-packing codec for power-of-two alphabets (RFC 4648 style).
///
/// Each symbol carries `log2(base)` bits. With a padding symbol the output
/// is padded to a whole group of `lcm(bits, 8) / bits` symbols.
pub fn encode_chunked(data: &[u8], alphabet: &Alphabet, padding: Option<u8>) -> String {
    let bits_per_char = bits_per_char(alphabet);
    let mask = (1u32 << bits_per_char) - 1;

    let output_chars = (data.len() * 8).div_ceil(bits_per_char);
    let capacity = if padding.is_some() {
        output_chars.div_ceil(group_size(bits_per_char)) * group_size(bits_per_char)
    } else {
        output_chars
    };
    let mut result = String::with_capacity(capacity);

    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0usize;

    for &byte in data {
        bit_buffer = (bit_buffer << 8) | (byte as u32);
        bits_in_buffer += 8;

        while bits_in_buffer >= bits_per_char {
            bits_in_buffer -= bits_per_char;
            let index = ((bit_buffer >> bits_in_buffer) & mask) as usize;
            result.push(alphabet.encode_digit(index) as char);
        }
    }

    // Remaining bits, zero-filled on the right
    if bits_in_buffer > 0 {
        let index = ((bit_buffer << (bits_per_char - bits_in_buffer)) & mask) as usize;
        result.push(alphabet.encode_digit(index) as char);
    }

    if let Some(pad_char) = padding {
        // Base64: lcm(6,8)=24, group=4. Base32: lcm(5,8)=40, group=8.
        let group = group_size(bits_per_char);
        let padded_chars = result.len().div_ceil(group) * group;
        while result.len() < padded_chars {
            result.push(pad_char as char);
        }
    }

    result
}

/// Decodes bit-packed text, skipping whitespace and stopping at padding.
///
/// # Errors
///
/// * `Char` for a symbol outside the alphabet, or data after padding.
/// * `Length` if trailing symbols cannot form a whole byte.
pub fn decode_chunked(encoded: &str, alphabet: &Alphabet, padding: Option<u8>) -> Result<Vec<u8>> {
    let bits_per_char = bits_per_char(alphabet);
    let padding = padding.map(char::from);

    let mut result = Vec::with_capacity((encoded.len() * bits_per_char) / 8);
    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0usize;
    let mut symbols = 0usize;
    let mut padded = false;

    for (position, c) in encoded.chars().enumerate() {
        if is_space(c) {
            continue;
        }
        if Some(c) == padding {
            padded = true;
            continue;
        }

        let digit = alphabet.decode_char(c).filter(|_| !padded).ok_or_else(|| {
            CodecError::invalid_character(c, position, encoded, &alphabet.describe())
        })?;

        bit_buffer = (bit_buffer << bits_per_char) | (digit as u32);
        bits_in_buffer += bits_per_char;
        symbols += 1;

        if bits_in_buffer >= 8 {
            bits_in_buffer -= 8;
            result.push(((bit_buffer >> bits_in_buffer) & 0xFF) as u8);
        }
    }

    // A whole symbol left over means a truncated final group
    if bits_in_buffer >= bits_per_char {
        return Err(CodecError::invalid_length(
            symbols,
            format!(
                "a symbol count that encodes whole bytes ({} bits per symbol)",
                bits_per_char
            ),
            "the input looks truncated; check for missing characters",
        ));
    }

    Ok(result)
}

fn bits_per_char(alphabet: &Alphabet) -> usize {
    alphabet.base().trailing_zeros() as usize
}

fn group_size(bits_per_char: usize) -> usize {
    lcm(bits_per_char, 8) / bits_per_char
}
