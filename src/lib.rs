//! Binary-to-text codecs and the integer/byte conversions under them.
//!
//! All functions are pure: inputs are borrowed, outputs freshly allocated,
//! and nothing is shared between calls. Decoders skip ASCII whitespace;
//! encoders never emit it.
//!
//! ```
//! use octext::{base58_decode, base58_encode};
//!
//! let encoded = base58_encode(b"\x00\x00hello");
//! assert!(encoded.starts_with("11"));
//! assert_eq!(base58_decode(&encoded).unwrap(), b"\x00\x00hello");
//! ```

mod core;
mod encoders;
mod net;
pub mod prelude;

pub use crate::core::alphabet::{self, Alphabet};
pub use crate::core::codec::Codec;
pub use crate::core::config::{CodecConfig, CodecMode, CodecRegistry, DataUriSettings, Settings};
pub use crate::core::integer::{UintBytes, bytes_to_uint, int_to_bytes, uint_to_bytes};

pub use crate::encoders::algorithms::{
    CodecError, CodecNotFoundError, ErrorKind, Result, find_closest_codec, set_color_enabled,
};
pub use crate::encoders::algorithms::{base85, chunked, radix};
pub use crate::encoders::ascii85::{self, Ascii85Options};
pub use crate::encoders::bases::{
    base36_decode, base36_encode, base58_decode, base58_encode, base62_decode, base62_encode,
    decimal_decode, decimal_encode,
};
pub use crate::encoders::mpi::{mpi_decode, mpi_encode};
pub use crate::encoders::rfc1924;
pub use crate::encoders::rfc4648::{
    base16_decode, base16_encode, base32_decode, base32_encode, base64_decode, base64_encode,
    base64_urlsafe_decode, base64_urlsafe_encode, bin_decode, bin_encode, hex_decode, hex_encode,
};

pub use crate::net::data_uri::{DataUriBuilder, PayloadEncoding, data_uri_parse, data_urlencode};
pub use crate::net::mimeparse::{
    self, MimeType, best_match, fitness, fitness_and_quality_parsed, parse_media_range,
    parse_mime_type, quality, quality_parsed,
};

/// Adobe Ascii85 without framing or padding.
pub fn ascii85_encode(data: &[u8]) -> String {
    ascii85::encode(data)
}

/// Adobe Ascii85, framed or not.
pub fn ascii85_decode(encoded: &str) -> Result<Vec<u8>> {
    ascii85::decode(encoded)
}

/// RFC 1924 base-85.
pub fn rfc1924_encode(data: &[u8]) -> String {
    rfc1924::encode(data)
}

pub fn rfc1924_decode(encoded: &str) -> Result<Vec<u8>> {
    rfc1924::decode(encoded)
}
