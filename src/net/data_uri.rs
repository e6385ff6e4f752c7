//! `data:` URIs.

use crate::encoders::algorithms::errors::{CodecError, Result};
use crate::encoders::rfc4648::{base64_decode, base64_encode};
use crate::net::mimeparse::{MimeType, parse_mime_type};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, percent_encode};
use serde::Deserialize;

/// Everything except the RFC 3986 unreserved characters.
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const SCHEME: &str = "data:";
const DEFAULT_MIME: &str = "text/plain;charset=US-ASCII";

/// How the payload of a data URI is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadEncoding {
    #[default]
    Base64,
    Percent,
}

/// Assembles `data:` URIs.
///
/// Defaults to `text/plain`, `US-ASCII` and base-64. Empty strings leave
/// the corresponding part out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUriBuilder {
    mime_type: String,
    charset: String,
    encoding: PayloadEncoding,
}

impl Default for DataUriBuilder {
    fn default() -> Self {
        DataUriBuilder {
            mime_type: "text/plain".to_string(),
            charset: "US-ASCII".to_string(),
            encoding: PayloadEncoding::Base64,
        }
    }
}

impl DataUriBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    pub fn charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = charset.into();
        self
    }

    pub fn encoding(mut self, encoding: PayloadEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn build(&self, data: &[u8]) -> String {
        let charset = (!self.charset.is_empty()).then_some(self.charset.as_str());
        data_urlencode(data, &self.mime_type, charset, self.encoding)
    }
}

/// `data:` ‖ mime ‖ `;charset=` charset ‖ (`;base64,` | `,`) ‖ payload
pub fn data_urlencode(
    data: &[u8],
    mime_type: &str,
    charset: Option<&str>,
    encoding: PayloadEncoding,
) -> String {
    let mut uri = String::from(SCHEME);
    uri.push_str(mime_type);
    if let Some(charset) = charset.filter(|c| !c.is_empty()) {
        uri.push_str(";charset=");
        uri.push_str(charset);
    }
    match encoding {
        PayloadEncoding::Base64 => {
            uri.push_str(";base64,");
            uri.push_str(&base64_encode(data));
        }
        PayloadEncoding::Percent => {
            uri.push(',');
            uri.extend(percent_encode(data, UNRESERVED));
        }
    }
    uri
}

/// Splits a data URI into its payload and MIME type.
///
/// A URI with no MIME type reads as `text/plain;charset=US-ASCII`.
///
/// # Errors
///
/// * `Format` if the input is not ASCII, lacks the `data:` prefix or a `,`,
///   or carries a malformed MIME type.
/// * Any error of the base-64 decoder for a `;base64` payload.
pub fn data_uri_parse(uri: impl AsRef<[u8]>) -> Result<(Vec<u8>, MimeType)> {
    let raw = uri.as_ref();
    if !raw.is_ascii() {
        return Err(CodecError::malformed(
            String::from_utf8_lossy(raw),
            "data URIs must be ASCII",
        ));
    }
    let uri = std::str::from_utf8(raw)
        .map_err(|_| CodecError::malformed(String::from_utf8_lossy(raw), "invalid UTF-8"))?;

    let rest = uri
        .strip_prefix(SCHEME)
        .ok_or_else(|| CodecError::malformed(uri, "missing 'data:' prefix"))?;
    let (metadata, payload) = rest
        .rsplit_once(',')
        .ok_or_else(|| CodecError::malformed(uri, "missing ',' before the payload"))?;

    let (metadata, is_base64) = match metadata.rsplit_once(';') {
        Some((head, "base64")) => (head, true),
        None if metadata == "base64" => ("", true),
        _ => (metadata, false),
    };

    let data = if is_base64 {
        base64_decode(payload)?
    } else {
        percent_decode_str(payload).collect()
    };

    let metadata = if metadata.is_empty() {
        DEFAULT_MIME
    } else {
        metadata
    };
    Ok((data, parse_mime_type(metadata)?))
}
