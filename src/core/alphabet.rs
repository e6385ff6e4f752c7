use crate::encoders::algorithms::errors::{CodecError, Result};
use std::borrow::Cow;

const INVALID: u8 = 0xFF;

/// An ordered set of distinct 7-bit ASCII symbols.
///
/// The index of a symbol is its digit value; element 0 is the zero symbol.
/// A 128-entry reverse table makes symbol lookup a single index operation.
/// The fixed alphabets below are built at compile time.
#[derive(Debug, Clone)]
pub struct Alphabet {
    symbols: Cow<'static, [u8]>,
    lookup: [u8; 128],
    case_insensitive: bool,
}

impl Alphabet {
    /// Builds an alphabet from a static table. Invalid tables fail const evaluation.
    pub const fn from_static(symbols: &'static [u8], case_insensitive: bool) -> Self {
        assert!(
            symbols.len() >= 2 && symbols.len() <= 128,
            "alphabet size must be between 2 and 128"
        );
        let lookup = build_lookup(symbols, case_insensitive);
        Alphabet {
            symbols: Cow::Borrowed(symbols),
            lookup,
            case_insensitive,
        }
    }

    /// Builds an alphabet at run time, e.g. from a registry entry.
    ///
    /// # Errors
    ///
    /// Returns an `Arg` error if the alphabet has fewer than two symbols,
    /// contains non-ASCII characters or whitespace, or repeats a symbol.
    /// Decoders skip whitespace, so a whitespace symbol could never decode.
    pub fn new(symbols: &str, case_insensitive: bool) -> Result<Self> {
        if !symbols.is_ascii() {
            return Err(CodecError::InvalidArgument(format!(
                "alphabet {:?} contains non-ASCII characters",
                symbols
            )));
        }
        if let Some(c) = symbols.chars().find(|&c| is_space(c)) {
            return Err(CodecError::InvalidArgument(format!(
                "alphabet may not contain whitespace ({:?})",
                c
            )));
        }
        let bytes = symbols.as_bytes();
        if bytes.len() < 2 {
            return Err(CodecError::InvalidArgument(
                "alphabet needs at least two symbols".to_string(),
            ));
        }

        let mut lookup = [INVALID; 128];
        for (i, &b) in bytes.iter().enumerate() {
            if lookup[b as usize] != INVALID {
                return Err(CodecError::InvalidArgument(format!(
                    "duplicate symbol {:?} in alphabet",
                    b as char
                )));
            }
            lookup[b as usize] = i as u8;
        }
        if case_insensitive {
            for (i, &b) in bytes.iter().enumerate() {
                let other = swap_case(b);
                if other != b && lookup[other as usize] == INVALID {
                    lookup[other as usize] = i as u8;
                }
            }
        }

        Ok(Alphabet {
            symbols: Cow::Owned(bytes.to_vec()),
            lookup,
            case_insensitive,
        })
    }

    /// Number of symbols, i.e. the radix.
    pub fn base(&self) -> usize {
        self.symbols.len()
    }

    /// The symbol standing for digit 0 and for a leading zero byte.
    pub fn zero_symbol(&self) -> u8 {
        self.symbols[0]
    }

    /// Symbol for `digit`; `digit` must be below [`base`](Self::base).
    #[inline]
    pub fn encode_digit(&self, digit: usize) -> u8 {
        self.symbols[digit]
    }

    /// Digit value of `symbol`, or `None` if it is not in the alphabet.
    #[inline]
    pub fn decode_byte(&self, symbol: u8) -> Option<u8> {
        match self.lookup.get(symbol as usize) {
            Some(&d) if d != INVALID => Some(d),
            _ => None,
        }
    }

    /// Digit value of `c`, or `None` if it is not in the alphabet.
    #[inline]
    pub fn decode_char(&self, c: char) -> Option<u8> {
        if c.is_ascii() {
            self.decode_byte(c as u8)
        } else {
            None
        }
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// The symbols as a printable string, for hints in error messages.
    pub fn describe(&self) -> String {
        self.symbols.iter().map(|&b| b as char).collect()
    }
}

const fn swap_case(b: u8) -> u8 {
    if b.is_ascii_uppercase() {
        b.to_ascii_lowercase()
    } else if b.is_ascii_lowercase() {
        b.to_ascii_uppercase()
    } else {
        b
    }
}

const fn build_lookup(symbols: &[u8], case_insensitive: bool) -> [u8; 128] {
    let mut lookup = [INVALID; 128];
    let mut i = 0;
    while i < symbols.len() {
        let b = symbols[i];
        assert!(b < 128, "alphabet symbols must be ASCII");
        assert!(
            !matches!(b, b' ' | b'\t' | b'\r' | b'\n' | 0x0b | 0x0c),
            "alphabet symbols must not be whitespace"
        );
        assert!(lookup[b as usize] == INVALID, "duplicate symbol in alphabet");
        lookup[b as usize] = i as u8;
        i += 1;
    }
    if case_insensitive {
        let mut i = 0;
        while i < symbols.len() {
            let other = swap_case(symbols[i]);
            if other != symbols[i] && lookup[other as usize] == INVALID {
                lookup[other as usize] = i as u8;
            }
            i += 1;
        }
    }
    lookup
}

/// ASCII whitespace skipped by every decoder: space, tab, CR, LF, VT, FF.
#[inline]
pub(crate) fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0b' | '\x0c')
}

/// `0-9 A-Z`, decoded case-insensitively.
pub static BASE36: Alphabet =
    Alphabet::from_static(b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ", true);

/// Bitcoin alphabet: `0 O I l` omitted.
pub static BASE58: Alphabet = Alphabet::from_static(
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz",
    false,
);

pub static BASE62: Alphabet = Alphabet::from_static(
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz",
    false,
);

pub static DECIMAL: Alphabet = Alphabet::from_static(b"0123456789", false);

/// Adobe Ascii85: `!` (0x21) through `u` (0x75).
pub static ASCII85: Alphabet = Alphabet::from_static(
    b"!\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstu",
    false,
);

/// RFC 1924 ordering.
pub static RFC1924: Alphabet = Alphabet::from_static(
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!#$%&()*+-;<=>?@^_`{|}~",
    false,
);

pub static BASE64: Alphabet = Alphabet::from_static(
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/",
    false,
);

pub static BASE32: Alphabet = Alphabet::from_static(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567", false);

pub static BASE16: Alphabet = Alphabet::from_static(b"0123456789ABCDEF", true);

/// Lower-case hex; upper-case digits decode too.
pub static HEX: Alphabet = Alphabet::from_static(b"0123456789abcdef", true);

pub static BINARY: Alphabet = Alphabet::from_static(b"01", false);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_static_sizes() {
        assert_eq!(BASE36.base(), 36);
        assert_eq!(BASE58.base(), 58);
        assert_eq!(BASE62.base(), 62);
        assert_eq!(ASCII85.base(), 85);
        assert_eq!(RFC1924.base(), 85);
        assert_eq!(BASE64.base(), 64);
        assert_eq!(BASE32.base(), 32);
    }

    #[test]
    fn test_zero_symbols() {
        assert_eq!(BASE36.zero_symbol(), b'0');
        assert_eq!(BASE58.zero_symbol(), b'1');
        assert_eq!(BASE62.zero_symbol(), b'0');
        assert_eq!(ASCII85.zero_symbol(), b'!');
    }

    #[test]
    fn test_base58_omits_ambiguous() {
        for c in ['0', 'O', 'I', 'l'] {
            assert_eq!(BASE58.decode_char(c), None);
        }
    }

    #[test]
    fn test_ascii85_digit_values() {
        assert_eq!(ASCII85.decode_byte(b'!'), Some(0));
        assert_eq!(ASCII85.decode_byte(b'u'), Some(84));
        assert_eq!(ASCII85.decode_byte(b'v'), None);
        assert_eq!(ASCII85.decode_byte(b'z'), None);
    }

    #[test]
    fn test_case_insensitive_lookup() {
        assert_eq!(BASE36.decode_char('a'), BASE36.decode_char('A'));
        assert_eq!(HEX.decode_char('F'), Some(15));
        assert_eq!(BASE62.decode_char('a'), Some(36));
        assert_eq!(BASE62.decode_char('A'), Some(10));
    }

    #[test]
    fn test_non_ascii_lookup() {
        assert_eq!(BASE62.decode_char('é'), None);
        assert_eq!(BASE62.decode_byte(0xC3), None);
    }

    #[test]
    fn test_runtime_alphabet() {
        let abc = Alphabet::new("abc", false).unwrap();
        assert_eq!(abc.base(), 3);
        assert_eq!(abc.decode_char('c'), Some(2));
        assert_eq!(abc.describe(), "abc");
    }

    #[test]
    fn test_runtime_alphabet_rejects_duplicates() {
        let err = Alphabet::new("abca", false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Arg);
    }

    #[test]
    fn test_runtime_alphabet_rejects_whitespace() {
        for chars in [" abcdefg", "ab\tc", "01\n", "ab\x0bc", "ab\x0cc", "a\rb"] {
            let err = Alphabet::new(chars, false).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Arg, "{:?}", chars);
        }
    }

    #[test]
    fn test_runtime_alphabet_rejects_non_ascii() {
        let err = Alphabet::new("aé", false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Arg);
        assert!(Alphabet::new("a", false).is_err());
    }

    #[test]
    fn test_whitespace_set() {
        for c in [' ', '\t', '\r', '\n', '\x0b', '\x0c'] {
            assert!(is_space(c));
        }
        assert!(!is_space('_'));
    }
}
