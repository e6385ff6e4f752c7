use crate::core::alphabet::Alphabet;
use crate::core::config::{CodecConfig, CodecMode};
use crate::encoders::algorithms::errors::{CodecError, Result};
use crate::encoders::algorithms::{chunked, radix};
use crate::encoders::ascii85::{self, Ascii85Options};
use crate::encoders::{rfc1924, rfc4648};

/// A codec resolved from a registry entry.
///
/// Library callers normally use the per-base functions directly; this type
/// exists for callers that pick a codec by name at run time.
#[derive(Debug, Clone)]
pub enum Codec {
    Radix(Alphabet),
    Chunked {
        alphabet: Alphabet,
        padding: Option<u8>,
    },
    Ascii85(Ascii85Options),
    Rfc1924,
    Base64Url,
}

impl Codec {
    pub fn from_config(config: &CodecConfig) -> Result<Self> {
        match config.mode {
            CodecMode::Radix => Ok(Codec::Radix(config_alphabet(config)?)),
            CodecMode::Chunked => {
                let alphabet = config_alphabet(config)?;
                if !alphabet.base().is_power_of_two() || alphabet.base() > 64 {
                    return Err(CodecError::InvalidArgument(format!(
                        "chunked mode requires a power-of-two alphabet of at most 64 symbols, got {}",
                        alphabet.base()
                    )));
                }
                let padding = config.padding_byte()?;
                if let Some(pad) = padding
                    && alphabet.decode_byte(pad).is_some()
                {
                    return Err(CodecError::InvalidArgument(format!(
                        "padding {:?} is also an alphabet symbol",
                        pad as char
                    )));
                }
                Ok(Codec::Chunked { alphabet, padding })
            }
            CodecMode::Ascii85 => Ok(Codec::Ascii85(Ascii85Options {
                framing: config.framing,
                padding: false,
            })),
            CodecMode::Rfc1924 => Ok(Codec::Rfc1924),
            CodecMode::Base64Url => Ok(Codec::Base64Url),
        }
    }

    pub fn encode(&self, data: &[u8]) -> String {
        match self {
            Codec::Radix(alphabet) => radix::encode(data, alphabet),
            Codec::Chunked { alphabet, padding } => chunked::encode_chunked(data, alphabet, *padding),
            Codec::Ascii85(options) => ascii85::encode_with(data, *options),
            Codec::Rfc1924 => rfc1924::encode(data),
            Codec::Base64Url => rfc4648::base64_urlsafe_encode(data),
        }
    }

    pub fn decode(&self, encoded: &str) -> Result<Vec<u8>> {
        match self {
            Codec::Radix(alphabet) => radix::decode(encoded, alphabet),
            Codec::Chunked { alphabet, padding } => {
                chunked::decode_chunked(encoded, alphabet, *padding)
            }
            Codec::Ascii85(_) => ascii85::decode(encoded),
            Codec::Rfc1924 => rfc1924::decode(encoded),
            Codec::Base64Url => rfc4648::base64_urlsafe_decode(encoded),
        }
    }
}

fn config_alphabet(config: &CodecConfig) -> Result<Alphabet> {
    if config.chars.is_empty() {
        return Err(CodecError::InvalidArgument(format!(
            "{} mode requires 'chars'",
            config.mode.as_str()
        )));
    }
    Alphabet::new(&config.chars, config.case_insensitive)
}
