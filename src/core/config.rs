use crate::core::alphabet::is_space;
use crate::core::codec::Codec;
use crate::encoders::algorithms::errors::{CodecError, Result};
use crate::net::data_uri::{DataUriBuilder, PayloadEncoding};
use serde::Deserialize;
use std::collections::HashMap;

/// How a registry entry turns bytes into text.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CodecMode {
    /// Whole input treated as one big number, leading zero bytes kept.
    Radix,
    /// Fixed-size bit groups (RFC 4648). Requires a power-of-two alphabet.
    Chunked,
    /// Adobe Ascii85.
    Ascii85,
    /// RFC 1924 base-85.
    Rfc1924,
    /// URL-safe base-64 without padding.
    #[serde(rename = "base64url", alias = "base64_url")]
    Base64Url,
}

impl CodecMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CodecMode::Radix => "radix",
            CodecMode::Chunked => "chunked",
            CodecMode::Ascii85 => "ascii85",
            CodecMode::Rfc1924 => "rfc1924",
            CodecMode::Base64Url => "base64url",
        }
    }
}

/// A single codec entry loaded from TOML.
#[derive(Debug, Deserialize, Clone)]
pub struct CodecConfig {
    pub mode: CodecMode,
    /// Alphabet for `radix` and `chunked` modes
    #[serde(default)]
    pub chars: String,
    /// Padding character for `chunked` mode (e.g. "=" for base64)
    #[serde(default)]
    pub padding: Option<String>,
    /// Decode letters regardless of case
    #[serde(default)]
    pub case_insensitive: bool,
    /// Wrap Ascii85 output in `<~ ~>`
    #[serde(default)]
    pub framing: bool,
    #[serde(default)]
    pub description: String,
}

impl CodecConfig {
    /// The padding character as a byte.
    ///
    /// # Errors
    ///
    /// `Type` if `padding` is not a single ASCII character or is whitespace.
    pub fn padding_byte(&self) -> Result<Option<u8>> {
        match self.padding.as_deref() {
            None | Some("") => Ok(None),
            Some(p) if p.len() == 1 && p.is_ascii() && !p.chars().any(is_space) => {
                Ok(Some(p.as_bytes()[0]))
            }
            Some(p) => Err(CodecError::invalid_type(p, "a single ASCII padding character")),
        }
    }

    /// Builds the codec this entry describes.
    ///
    /// # Errors
    ///
    /// `Arg` for a missing or invalid alphabet, `Type` for a bad padding value.
    pub fn build(&self) -> Result<Codec> {
        Codec::from_config(self)
    }
}

/// Defaults for `data-uri encode`.
#[derive(Debug, Deserialize, Clone)]
pub struct DataUriSettings {
    #[serde(default = "default_mime_type")]
    pub mime_type: String,
    #[serde(default = "default_charset")]
    pub charset: String,
    #[serde(default)]
    pub encoding: PayloadEncoding,
}

impl Default for DataUriSettings {
    fn default() -> Self {
        DataUriSettings {
            mime_type: default_mime_type(),
            charset: default_charset(),
            encoding: PayloadEncoding::Base64,
        }
    }
}

impl DataUriSettings {
    pub fn builder(&self) -> DataUriBuilder {
        DataUriBuilder::new()
            .mime_type(self.mime_type.clone())
            .charset(self.charset.clone())
            .encoding(self.encoding)
    }
}

fn default_mime_type() -> String {
    "text/plain".to_string()
}

fn default_charset() -> String {
    "US-ASCII".to_string()
}

/// Global settings.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    /// Codec used when none is named on the command line
    #[serde(default)]
    pub default_codec: Option<String>,
    #[serde(default)]
    pub data_uri: Option<DataUriSettings>,
}

/// Named codecs loaded from TOML files.
#[derive(Debug, Deserialize)]
pub struct CodecRegistry {
    pub codecs: HashMap<String, CodecConfig>,
    #[serde(default)]
    pub settings: Settings,
}

impl CodecRegistry {
    /// Parses a registry from TOML content.
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in codecs bundled with the library.
    pub fn load_default() -> std::result::Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../codecs.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(
        path: &std::path::Path,
    ) -> std::result::Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads the built-in codecs, then user and project overrides.
    ///
    /// Searches in priority order:
    /// 1. Built-in codecs
    /// 2. `~/.config/octext/codecs.toml`
    /// 3. `./codecs.toml`
    ///
    /// Later files replace same-named entries. An unreadable override is
    /// skipped with a warning.
    pub fn load_with_overrides() -> std::result::Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("octext").join("codecs.toml");
            config.merge_file(&user_config_path);
        }

        config.merge_file(std::path::Path::new("codecs.toml"));

        Ok(config)
    }

    fn merge_file(&mut self, path: &std::path::Path) {
        if !path.exists() {
            return;
        }
        match Self::load_from_file(path) {
            Ok(overrides) => {
                tracing::debug!(path = %path.display(), codecs = overrides.codecs.len(), "merging codec overrides");
                self.merge(overrides);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load codec config");
            }
        }
    }

    /// Merges another registry into this one.
    ///
    /// Codecs from `other` replace codecs with the same name in `self`;
    /// settings present in `other` win.
    pub fn merge(&mut self, other: CodecRegistry) {
        self.codecs.extend(other.codecs);
        if other.settings.default_codec.is_some() {
            self.settings.default_codec = other.settings.default_codec;
        }
        if other.settings.data_uri.is_some() {
            self.settings.data_uri = other.settings.data_uri;
        }
    }

    /// Retrieves a codec configuration by name.
    pub fn get_codec(&self, name: &str) -> Option<&CodecConfig> {
        self.codecs.get(name)
    }

    /// All codec names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.codecs.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn data_uri_settings(&self) -> DataUriSettings {
        self.settings.data_uri.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_load_default_config() {
        let config = CodecRegistry::load_default().unwrap();
        for name in ["base36", "base58", "base62", "base64", "base64url", "ascii85", "base85"] {
            assert!(config.codecs.contains_key(name), "missing {}", name);
        }
        assert_eq!(config.settings.default_codec.as_deref(), Some("base64"));
    }

    #[test]
    fn test_builtin_modes() {
        let config = CodecRegistry::load_default().unwrap();
        assert_eq!(config.get_codec("base58").unwrap().mode, CodecMode::Radix);
        assert_eq!(config.get_codec("base64").unwrap().mode, CodecMode::Chunked);
        assert_eq!(config.get_codec("base85").unwrap().mode, CodecMode::Rfc1924);
        assert_eq!(config.get_codec("base64url").unwrap().mode, CodecMode::Base64Url);
        assert!(config.get_codec("ascii85_framed").unwrap().framing);
    }

    #[test]
    fn test_base64url_mode_names() {
        for spelling in ["base64url", "base64_url"] {
            let config =
                CodecRegistry::from_toml(&format!("[codecs.x]\nmode = \"{}\"\n", spelling))
                    .unwrap();
            let entry = config.get_codec("x").unwrap();
            assert_eq!(entry.mode, CodecMode::Base64Url, "{}", spelling);
            assert_eq!(entry.mode.as_str(), "base64url");
            assert!(entry.build().is_ok());
        }
        assert!(CodecRegistry::from_toml("[codecs.x]\nmode = \"mpi\"\n").is_err());
    }

    #[test]
    fn test_every_builtin_builds() {
        let config = CodecRegistry::load_default().unwrap();
        for name in config.names() {
            assert!(config.get_codec(&name).unwrap().build().is_ok(), "{}", name);
        }
    }

    #[test]
    fn test_load_from_toml_string() {
        let toml_content = r#"
[codecs.base32hex]
mode = "chunked"
chars = "0123456789ABCDEFGHIJKLMNOPQRSTUV"
padding = "="
"#;
        let config = CodecRegistry::from_toml(toml_content).unwrap();
        let entry = config.get_codec("base32hex").unwrap();
        assert_eq!(entry.padding_byte().unwrap(), Some(b'='));
        assert_eq!(entry.mode, CodecMode::Chunked);
    }

    #[test]
    fn test_merge_configs() {
        let mut base = CodecRegistry::load_default().unwrap();
        let overrides = CodecRegistry::from_toml(
            r#"
[settings]
default_codec = "base58"

[codecs.base62]
mode = "radix"
chars = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ"

[codecs.octal]
mode = "radix"
chars = "01234567"
"#,
        )
        .unwrap();

        let before = base.codecs.len();
        base.merge(overrides);

        assert_eq!(base.codecs.len(), before + 1);
        assert!(base.get_codec("base62").unwrap().chars.starts_with("0123456789abc"));
        assert_eq!(base.settings.default_codec.as_deref(), Some("base58"));
    }

    #[test]
    fn test_bad_padding_is_type_error() {
        let config = CodecRegistry::from_toml(
            r#"
[codecs.weird]
mode = "chunked"
chars = "0123456789abcdef"
padding = "=="
"#,
        )
        .unwrap();
        let err = config.get_codec("weird").unwrap().padding_byte().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn test_whitespace_padding_is_type_error() {
        for padding in [" ", "\t", "\n"] {
            let entry = CodecConfig {
                mode: CodecMode::Chunked,
                chars: "0123456789abcdef".to_string(),
                padding: Some(padding.to_string()),
                case_insensitive: false,
                framing: false,
                description: String::new(),
            };
            assert_eq!(entry.padding_byte().unwrap_err().kind(), ErrorKind::Type);
            assert_eq!(entry.build().unwrap_err().kind(), ErrorKind::Type);
        }
    }

    #[test]
    fn test_whitespace_alphabet_fails_to_build() {
        let config = CodecRegistry::from_toml(
            r#"
[codecs.spaced]
mode = "radix"
chars = " abcdefg"
"#,
        )
        .unwrap();
        let err = config.get_codec("spaced").unwrap().build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Arg);
    }

    #[test]
    fn test_data_uri_settings_default() {
        let config = CodecRegistry::from_toml("[codecs]\n").unwrap();
        let settings = config.data_uri_settings();
        assert_eq!(settings.mime_type, "text/plain");
        assert_eq!(settings.encoding, PayloadEncoding::Base64);
    }
}
