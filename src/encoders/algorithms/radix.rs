use crate::core::alphabet::{Alphabet, is_space};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

pub use super::errors::{CodecError, Result};

/// Encodes `data` as base-N digits, one zero symbol per leading zero byte.
pub fn encode(data: &[u8], alphabet: &Alphabet) -> String {
    encode_with(data, alphabet, true)
}

/// Like [`encode`] but leading zero bytes are dropped rather than kept as zero symbols.
pub fn encode_unpadded(data: &[u8], alphabet: &Alphabet) -> String {
    encode_with(data, alphabet, false)
}

fn encode_with(data: &[u8], alphabet: &Alphabet, pad: bool) -> String {
    let leading_zeros = data.iter().take_while(|&&b| b == 0).count();
    let zero = alphabet.zero_symbol();

    let mut result: Vec<u8> = Vec::new();
    if leading_zeros < data.len() {
        let base = alphabet.base() as u64;
        let (group, group_base) = digit_group(base);
        let divisor = BigUint::from(group_base);
        let mut num = BigUint::from_bytes_be(&data[leading_zeros..]);

        // Estimated digit count: bits / log2(base), rounded up
        let bits = (data.len() - leading_zeros) * 8;
        let max_digits = (bits as f64 / (base as f64).log2()) as usize + 1;
        result.reserve(max_digits + leading_zeros);

        // Peel off `group` digits per big division
        while !num.is_zero() {
            let (quotient, remainder) = num.div_rem(&divisor);
            let mut rem = remainder.to_u64().unwrap_or(0);
            num = quotient;

            if num.is_zero() {
                while rem > 0 {
                    result.push(alphabet.encode_digit((rem % base) as usize));
                    rem /= base;
                }
            } else {
                for _ in 0..group {
                    result.push(alphabet.encode_digit((rem % base) as usize));
                    rem /= base;
                }
            }
        }
    }

    if pad {
        result.extend(std::iter::repeat_n(zero, leading_zeros));
    }

    result.reverse();
    result.into_iter().map(char::from).collect()
}

/// Decodes base-N text. Whitespace is skipped; each leading zero symbol
/// becomes one `0x00` byte.
///
/// # Errors
///
/// `Char` if a character is not in the alphabet.
pub fn decode(encoded: &str, alphabet: &Alphabet) -> Result<Vec<u8>> {
    let digits = collect_digits(encoded, alphabet)?;

    let leading_zeros = digits.iter().take_while(|&&d| d == 0).count();
    let num = digits_to_uint(&digits[leading_zeros..], alphabet.base() as u64);

    let mut result = vec![0u8; leading_zeros];
    if !num.is_zero() {
        result.extend_from_slice(&num.to_bytes_be());
    }
    Ok(result)
}

/// Maps every non-whitespace character of `encoded` to its digit value.
pub(crate) fn collect_digits(encoded: &str, alphabet: &Alphabet) -> Result<Vec<u8>> {
    let mut digits = Vec::with_capacity(encoded.len());
    for (position, c) in encoded.chars().enumerate() {
        if is_space(c) {
            continue;
        }
        let digit = alphabet.decode_char(c).ok_or_else(|| {
            CodecError::invalid_character(c, position, encoded, &valid_chars(alphabet))
        })?;
        digits.push(digit);
    }
    Ok(digits)
}

/// Horner evaluation, folding as many digits into a machine word as fit
/// before each big multiply.
pub(crate) fn digits_to_uint(digits: &[u8], base: u64) -> BigUint {
    let mut num = BigUint::zero();
    let mut acc: u64 = 0;
    let mut scale: u64 = 1;

    for &d in digits {
        if scale > u64::MAX / base {
            num = num * scale + acc;
            acc = 0;
            scale = 1;
        }
        acc = acc * base + d as u64;
        scale *= base;
    }
    if scale > 1 {
        num = num * scale + acc;
    }
    num
}

/// Largest `k` with `base^k` fitting in a u64, and that power.
fn digit_group(base: u64) -> (usize, u64) {
    let mut k = 1;
    let mut power = base;
    while let Some(next) = power.checked_mul(base) {
        power = next;
        k += 1;
    }
    (k, power)
}

fn valid_chars(alphabet: &Alphabet) -> String {
    if alphabet.base() <= 64 {
        alphabet.describe()
    } else {
        format!("{} characters in alphabet", alphabet.base())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use crate::core::alphabet::{BASE36, BASE58, BASE62, DECIMAL};

    #[test]
    fn test_empty() {
        assert_eq!(encode(b"", &BASE58), "");
        assert_eq!(decode("", &BASE58).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_all_zeros() {
        assert_eq!(encode(&[0, 0, 0], &BASE58), "111");
        assert_eq!(decode("111", &BASE58).unwrap(), vec![0, 0, 0]);
        assert_eq!(encode_unpadded(&[0, 0, 0], &BASE58), "");
    }

    #[test]
    fn test_decimal_digits() {
        assert_eq!(encode(&[0x01, 0x00], &DECIMAL), "256");
        assert_eq!(encode(&[0x00, 0xff], &DECIMAL), "0255");
        assert_eq!(decode("0255", &DECIMAL).unwrap(), vec![0x00, 0xff]);
    }

    #[test]
    fn test_unpadded_drops_leading_zeros() {
        assert_eq!(encode_unpadded(&[0, 0, 1, 0], &DECIMAL), "256");
        assert_eq!(encode(&[0, 0, 1, 0], &DECIMAL), "00256");
    }

    #[test]
    fn test_large_round_trip() {
        let data: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
        for alphabet in [&BASE36, &BASE58, &BASE62, &DECIMAL] {
            let encoded = encode(&data, alphabet);
            assert_eq!(decode(&encoded, alphabet).unwrap(), data);
        }
    }

    #[test]
    fn test_group_boundaries() {
        // Values straddling the per-division digit group
        for v in [u64::MAX, u64::MAX - 1, 1 << 63, 58u64.pow(10), 58u64.pow(10) - 1] {
            let data = v.to_be_bytes();
            let encoded = encode(&data, &BASE58);
            assert_eq!(decode(&encoded, &BASE58).unwrap(), data.to_vec());
        }
    }

    #[test]
    fn test_whitespace_ignored() {
        let encoded = encode(b"hello world", &BASE62);
        let spaced: String = encoded
            .chars()
            .flat_map(|c| [c, ' ', '\n'])
            .collect();
        assert_eq!(decode(&spaced, &BASE62).unwrap(), b"hello world");
    }

    #[test]
    fn test_invalid_character_position() {
        let err = decode("12 3O4", &BASE58).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Char);
        match err {
            CodecError::InvalidCharacter { char, position, .. } => {
                assert_eq!(char, 'O');
                assert_eq!(position, 4);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_non_ascii_rejected() {
        assert_eq!(decode("1é", &BASE58).unwrap_err().kind(), ErrorKind::Char);
    }

    #[test]
    fn test_case_insensitive_base36() {
        let encoded = encode(b"\x00Rust", &BASE36);
        assert_eq!(decode(&encoded.to_lowercase(), &BASE36).unwrap(), b"\x00Rust");
    }

    #[test]
    fn test_digit_group() {
        assert_eq!(digit_group(10), (19, 10u64.pow(19)));
        assert_eq!(digit_group(2), (63, 1 << 63));
    }
}
