pub mod base85;
pub mod chunked;
pub mod errors;
pub mod radix;

// Re-export error types for public API
pub use errors::{
    CodecError, CodecNotFoundError, ErrorKind, Result, find_closest_codec, set_color_enabled,
};
