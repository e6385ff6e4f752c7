//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use octext::prelude::*;
//!
//! let encoded = base62_encode(b"Hello");
//! assert_eq!(base62_decode(&encoded).unwrap(), b"Hello");
//! ```

pub use crate::{
    // Core encoding/decoding
    ascii85_decode,
    ascii85_encode,
    base36_decode,
    base36_encode,
    base58_decode,
    base58_encode,
    base62_decode,
    base62_encode,
    base64_decode,
    base64_encode,
    base64_urlsafe_decode,
    base64_urlsafe_encode,
    // Integers
    bytes_to_uint,
    uint_to_bytes,
    UintBytes,

    // Web helpers
    best_match,
    data_uri_parse,
    DataUriBuilder,
    PayloadEncoding,

    // Errors
    CodecError,
    ErrorKind,

    // Registry
    Codec,
    CodecRegistry,
};
