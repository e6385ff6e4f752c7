use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Arguments for encoding data
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Codec to encode with (see `octext list`); defaults to `default_codec`
    pub codec: Option<String>,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for decoding data
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Codec to decode from; defaults to `default_codec`
    pub codec: Option<String>,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for inspecting the registry
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Print codec names, comma separated
    #[arg(long, conflicts_with = "settings")]
    pub codecs: bool,

    /// Print global settings
    #[arg(long)]
    pub settings: bool,
}

#[derive(Subcommand, Debug)]
pub enum DataUriAction {
    /// Wrap bytes in a data URI
    Encode {
        /// Input file (reads from stdin if not provided)
        file: Option<PathBuf>,

        /// MIME type (empty string omits it)
        #[arg(short = 't', long = "type", value_name = "MIME")]
        mime_type: Option<String>,

        /// Charset parameter (empty string omits it)
        #[arg(long)]
        charset: Option<String>,

        /// Percent-encode the payload instead of base-64
        #[arg(long)]
        percent: bool,
    },

    /// Extract the payload of a data URI
    Decode {
        /// The URI (reads from stdin if not provided)
        uri: Option<String>,

        /// Print the MIME type instead of the payload
        #[arg(long = "type")]
        show_type: bool,

        /// Output file (writes to stdout if not provided)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum MimeAction {
    /// Pick the supported type that best fits an Accept header
    BestMatch {
        /// Supported MIME types, most preferred last
        #[arg(long, required = true, value_delimiter = ',', num_args = 1..)]
        supported: Vec<String>,

        /// Accept header value
        #[arg(long)]
        accept: String,
    },

    /// Show the parts of a MIME type or media range
    Parse {
        mime_type: String,

        /// Treat the value as a media range (normalises `q`)
        #[arg(long)]
        range: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum Ipv6Action {
    /// Encode an IPv6 address or a 128-bit integer as 20 base-85 characters
    Encode {
        /// Textual IPv6 address or decimal integer
        address: String,
    },

    /// Decode a 20-character RFC 1924 address
    Decode {
        encoded: String,

        /// Print a decimal integer instead of an IPv6 address
        #[arg(long)]
        int: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum IntAction {
    /// Big-endian bytes of a non-negative integer
    ToBytes {
        /// Decimal integer, or hexadecimal with a `0x` prefix
        value: String,

        /// Left-pad to exactly this many bytes
        #[arg(long, conflicts_with = "chunk")]
        fill: Option<usize>,

        /// Left-pad to a multiple of this many bytes
        #[arg(long)]
        chunk: Option<usize>,

        /// Let --fill grow instead of failing when the value is too large
        #[arg(long, requires = "fill")]
        overflow: bool,

        /// Codec used to print the bytes
        #[arg(short = 'c', long, default_value = "hex")]
        codec: String,
    },

    /// Read bytes as a big-endian unsigned integer
    FromBytes {
        /// Input file (reads from stdin if not provided)
        file: Option<PathBuf>,

        /// Decode the input with this codec first (raw bytes if not provided)
        #[arg(short = 'c', long)]
        codec: Option<String>,
    },
}
