use crate::core::alphabet::{Alphabet, is_space};

pub use super::errors::{CodecError, Result};

const POWERS: [u32; 5] = [85 * 85 * 85 * 85, 85 * 85 * 85, 85 * 85, 85, 1];

/// A 4-byte to 5-symbol base-85 flavour.
#[derive(Debug, Clone, Copy)]
pub struct Base85Variant {
    pub alphabet: &'static Alphabet,
    /// Emit and accept `z` for an all-zero group.
    pub compact_zero: bool,
}

/// Encodes `data` in 4-byte groups.
///
/// The input is right-padded with zero bytes to a multiple of four. Unless
/// `keep_padding` is set, the symbols produced by that padding are dropped.
pub fn encode_base85(data: &[u8], variant: Base85Variant, keep_padding: bool) -> String {
    let alphabet = variant.alphabet;
    let pad_n = (4 - data.len() % 4) % 4;
    let groups = data.len().div_ceil(4);
    let mut result = String::with_capacity(groups * 5);

    for (i, chunk) in data.chunks(4).enumerate() {
        let mut quad = [0u8; 4];
        quad[..chunk.len()].copy_from_slice(chunk);
        let value = u32::from_be_bytes(quad);

        let padded_group = i + 1 == groups && pad_n > 0;
        if value == 0 && variant.compact_zero && !padded_group {
            result.push('z');
            continue;
        }

        for power in POWERS {
            let digit = (value / power) % 85;
            result.push(alphabet.encode_digit(digit as usize) as char);
        }
    }

    if !keep_padding {
        result.truncate(result.len() - pad_n);
    }
    result
}

/// Decodes base-85 text, skipping whitespace.
///
/// A trailing partial group of `r` symbols is completed with the maximum
/// symbol and yields `r - 1` bytes.
///
/// # Errors
///
/// * `Char` for a symbol outside the alphabet or a `z` inside a group.
/// * `Overflow` if a group exceeds `2^32 - 1`.
pub fn decode_base85(encoded: &str, variant: Base85Variant) -> Result<Vec<u8>> {
    decode_base85_at(encoded, 0, variant)
}

/// As [`decode_base85`], reporting positions shifted by `offset` characters.
pub(crate) fn decode_base85_at(
    encoded: &str,
    offset: usize,
    variant: Base85Variant,
) -> Result<Vec<u8>> {
    let alphabet = variant.alphabet;
    let mut result = Vec::with_capacity(encoded.len() / 5 * 4 + 4);
    let mut group = [0u8; 5];
    let mut filled = 0usize;

    for (i, c) in encoded.chars().enumerate() {
        if is_space(c) {
            continue;
        }
        let position = i + offset;

        if variant.compact_zero && c == 'z' {
            if filled != 0 {
                return Err(CodecError::MisplacedZero { position });
            }
            result.extend_from_slice(&[0u8; 4]);
            continue;
        }

        group[filled] = alphabet.decode_char(c).ok_or_else(|| {
            CodecError::invalid_character(c, position, encoded, &valid_chars(variant))
        })?;
        filled += 1;

        if filled == 5 {
            result.extend_from_slice(&group_value(&group)?.to_be_bytes());
            filled = 0;
        }
    }

    if filled > 0 {
        group[filled..].fill(84);
        let bytes = group_value(&group)?.to_be_bytes();
        result.extend_from_slice(&bytes[..filled - 1]);
    }

    Ok(result)
}

fn group_value(group: &[u8; 5]) -> Result<u32> {
    let value = group
        .iter()
        .fold(0u64, |acc, &digit| acc * 85 + digit as u64);
    u32::try_from(value).map_err(|_| {
        CodecError::overflow(format!("base-85 group value {}", value), "32 bits")
    })
}

fn valid_chars(variant: Base85Variant) -> String {
    let mut chars = variant.alphabet.describe();
    if variant.compact_zero {
        chars.push('z');
    }
    chars
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use crate::core::alphabet::{ASCII85, RFC1924};

    const ADOBE: Base85Variant = Base85Variant {
        alphabet: &ASCII85,
        compact_zero: true,
    };
    const PLAIN: Base85Variant = Base85Variant {
        alphabet: &RFC1924,
        compact_zero: false,
    };

    #[test]
    fn test_group_encoding() {
        assert_eq!(encode_base85(b"Man ", ADOBE, false), "9jqo^");
        assert_eq!(encode_base85(b"sure", ADOBE, false), "F*2M7");
    }

    #[test]
    fn test_padding_kept_or_dropped() {
        assert_eq!(encode_base85(b".", ADOBE, false), "/c");
        assert_eq!(encode_base85(b".", ADOBE, true), "/cYkO");
    }

    #[test]
    fn test_zero_compaction() {
        assert_eq!(encode_base85(&[0; 4], ADOBE, false), "z");
        assert_eq!(encode_base85(&[0; 8], ADOBE, false), "zz");
        assert_eq!(encode_base85(&[0; 4], PLAIN, false), "00000");
    }

    #[test]
    fn test_padded_zero_group_not_compacted() {
        assert_eq!(encode_base85(&[0; 2], ADOBE, false), "!!!");
        assert_eq!(decode_base85("!!!", ADOBE).unwrap(), vec![0, 0]);
        assert_eq!(encode_base85(&[0; 5], ADOBE, false), "z!!");
    }

    #[test]
    fn test_decode_max_group() {
        assert_eq!(decode_base85("s8W-!", ADOBE).unwrap(), vec![0xff; 4]);
    }

    #[test]
    fn test_decode_overflow() {
        let err = decode_base85("s8W-\"", ADOBE).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Overflow);
        let err = decode_base85("uuuuu", ADOBE).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Overflow);
    }

    #[test]
    fn test_misplaced_zero() {
        let err = decode_base85("9jz", ADOBE).unwrap_err();
        assert_eq!(err, CodecError::MisplacedZero { position: 2 });
        assert_eq!(decode_base85("9jqo^z", ADOBE).unwrap(), b"Man \0\0\0\0");
    }

    #[test]
    fn test_z_is_a_digit_without_compaction() {
        let encoded = encode_base85(b"zzzz", PLAIN, false);
        assert_eq!(decode_base85(&encoded, PLAIN).unwrap(), b"zzzz");
        assert!(RFC1924.decode_char('z').is_some());
    }

    #[test]
    fn test_invalid_character() {
        let err = decode_base85("9jqo\"v", ADOBE).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Char);
    }
}
