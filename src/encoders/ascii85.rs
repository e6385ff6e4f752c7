//! Adobe Ascii85.
//!
//! Four bytes become five characters from `!` to `u`; an all-zero group
//! that is not the padded tail is written as `z`. Output may be framed as
//! `<~...~>`.

use crate::core::alphabet::{ASCII85, is_space};
use crate::encoders::algorithms::base85::{self, Base85Variant};

pub use crate::encoders::algorithms::errors::Result;

const ADOBE: Base85Variant = Base85Variant {
    alphabet: &ASCII85,
    compact_zero: true,
};

const PREFIX: &str = "<~";
const SUFFIX: &str = "~>";

/// Output options for [`encode_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ascii85Options {
    /// Wrap the output in `<~` and `~>`.
    pub framing: bool,
    /// Keep the characters produced by zero-padding the last group.
    pub padding: bool,
}

/// Encodes without framing or padding.
pub fn encode(data: &[u8]) -> String {
    encode_with(data, Ascii85Options::default())
}

pub fn encode_with(data: &[u8], options: Ascii85Options) -> String {
    let body = base85::encode_base85(data, ADOBE, options.padding);
    if options.framing {
        format!("{}{}{}", PREFIX, body, SUFFIX)
    } else {
        body
    }
}

/// Decodes Ascii85, with or without `<~`/`~>` framing.
///
/// # Errors
///
/// * `Char` for a character outside `!`..`u`, or a `z` that does not start a group.
/// * `Overflow` if a group exceeds `2^32 - 1`.
pub fn decode(encoded: &str) -> Result<Vec<u8>> {
    let leading = encoded.chars().take_while(|&c| is_space(c)).count();
    let mut body = encoded.trim_matches(is_space);
    let mut offset = leading;

    if let Some(rest) = body.strip_prefix(PREFIX) {
        body = rest;
        offset += PREFIX.len();
    }
    if let Some(rest) = body.strip_suffix(SUFFIX) {
        body = rest;
    }

    base85::decode_base85_at(body, offset, ADOBE)
}
