use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

static COLOR_ENABLED: AtomicBool = AtomicBool::new(true);

/// Domain tag for a [`CodecError`].
///
/// Every failing call reports exactly one of these kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Argument is not the required kind of value.
    Type,
    /// Character outside the alphabet, or an Ascii85 `z` inside a chunk.
    Char,
    /// Value does not fit the requested space.
    Overflow,
    /// Value outside its declared domain.
    Range,
    /// Input length inconsistent with the codec.
    Length,
    /// Structural mismatch in a composite format.
    Format,
    /// Mutually exclusive or invalid options.
    Arg,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Type => "type",
            ErrorKind::Char => "char",
            ErrorKind::Overflow => "overflow",
            ErrorKind::Range => "range",
            ErrorKind::Length => "length",
            ErrorKind::Format => "format",
            ErrorKind::Arg => "arg",
        }
    }
}

/// Errors returned by every codec in this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The input contains a character not in the alphabet
    InvalidCharacter {
        char: char,
        position: usize,
        input: String,
        valid_chars: String,
    },
    /// An Ascii85 `z` appeared somewhere other than the start of a chunk
    MisplacedZero { position: usize },
    /// A value needs more room than the caller allowed
    Overflow { what: String, limit: String },
    /// A value lies outside the domain of the operation
    OutOfRange { value: String, expected: String },
    /// Invalid length for the encoding format
    InvalidLength {
        actual: usize,
        expected: String,
        hint: String,
    },
    /// Structural problem in a data URI or MIME type
    Malformed { input: String, reason: String },
    /// Mutually exclusive options or a bad codec definition
    InvalidArgument(String),
    /// A dynamically supplied value was not of the required kind
    InvalidType { value: String, expected: String },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, CodecError>;

impl CodecError {
    /// Create an InvalidCharacter error with context
    pub fn invalid_character(c: char, position: usize, input: &str, valid_chars: &str) -> Self {
        // Truncate long inputs on a char boundary
        let display_input = if input.chars().count() > 60 {
            format!("{}...", input.chars().take(60).collect::<String>())
        } else {
            input.to_string()
        };

        CodecError::InvalidCharacter {
            char: c,
            position,
            input: display_input,
            valid_chars: valid_chars.to_string(),
        }
    }

    /// Create an InvalidLength error
    pub fn invalid_length(
        actual: usize,
        expected: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        CodecError::InvalidLength {
            actual,
            expected: expected.into(),
            hint: hint.into(),
        }
    }

    pub fn overflow(what: impl Into<String>, limit: impl Into<String>) -> Self {
        CodecError::Overflow {
            what: what.into(),
            limit: limit.into(),
        }
    }

    pub fn out_of_range(value: impl Into<String>, expected: impl Into<String>) -> Self {
        CodecError::OutOfRange {
            value: value.into(),
            expected: expected.into(),
        }
    }

    pub fn malformed(input: impl Into<String>, reason: impl Into<String>) -> Self {
        CodecError::Malformed {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_type(value: impl Into<String>, expected: impl Into<String>) -> Self {
        CodecError::InvalidType {
            value: value.into(),
            expected: expected.into(),
        }
    }

    /// The domain tag of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::InvalidCharacter { .. } | CodecError::MisplacedZero { .. } => {
                ErrorKind::Char
            }
            CodecError::Overflow { .. } => ErrorKind::Overflow,
            CodecError::OutOfRange { .. } => ErrorKind::Range,
            CodecError::InvalidLength { .. } => ErrorKind::Length,
            CodecError::Malformed { .. } => ErrorKind::Format,
            CodecError::InvalidArgument(_) => ErrorKind::Arg,
            CodecError::InvalidType { .. } => ErrorKind::Type,
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();
        let (err, hint) = if use_color {
            ("\x1b[1;31merror:\x1b[0m", "\x1b[1;36mhint:\x1b[0m")
        } else {
            ("error:", "hint:")
        };

        match self {
            CodecError::InvalidCharacter {
                char: c,
                position,
                input,
                valid_chars,
            } => {
                writeln!(
                    f,
                    "{} invalid character {:?} at position {}",
                    err, c, position
                )?;
                writeln!(f)?;

                // Caret under the offending character
                writeln!(f, "  {}", input)?;
                write!(f, "  {}", " ".repeat(*position))?;
                if use_color {
                    writeln!(f, "\x1b[1;31m^\x1b[0m")?;
                } else {
                    writeln!(f, "^")?;
                }
                writeln!(f)?;

                let hint_chars = if valid_chars.len() > 80 {
                    format!("{}...", &valid_chars[..80])
                } else {
                    valid_chars.clone()
                };
                write!(f, "{} valid characters: {}", hint, hint_chars)
            }
            CodecError::MisplacedZero { position } => {
                writeln!(
                    f,
                    "{} 'z' at position {} does not start a 5-character group",
                    err, position
                )?;
                write!(
                    f,
                    "\n{} 'z' abbreviates four zero bytes and is only valid between groups",
                    hint
                )
            }
            CodecError::Overflow { what, limit } => {
                write!(f, "{} {} does not fit in {}", err, what, limit)
            }
            CodecError::OutOfRange { value, expected } => {
                write!(f, "{} value {} out of range, expected {}", err, value, expected)
            }
            CodecError::InvalidLength {
                actual,
                expected,
                hint: h,
            } => {
                writeln!(f, "{} invalid length for decode", err)?;
                writeln!(f)?;
                writeln!(f, "  input is {} characters, expected {}", actual, expected)?;
                writeln!(f)?;
                write!(f, "{} {}", hint, h)
            }
            CodecError::Malformed { input, reason } => {
                let display_input = if input.chars().count() > 60 {
                    format!("{}...", input.chars().take(60).collect::<String>())
                } else {
                    input.clone()
                };
                write!(f, "{} malformed input {:?}: {}", err, display_input, reason)
            }
            CodecError::InvalidArgument(msg) => write!(f, "{} {}", err, msg),
            CodecError::InvalidType { value, expected } => {
                write!(f, "{} expected {}, got {:?}", err, expected, value)
            }
        }
    }
}

impl std::error::Error for CodecError {}

/// Allows or forbids ANSI colour in error messages for this process.
///
/// Even when allowed, colour is only used on a terminal with `NO_COLOR` unset.
pub fn set_color_enabled(enabled: bool) {
    COLOR_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    if !COLOR_ENABLED.load(Ordering::Relaxed) {
        return false;
    }

    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Error when a codec name is not in the registry
#[derive(Debug)]
pub struct CodecNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl CodecNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

impl fmt::Display for CodecNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        if use_color {
            writeln!(f, "\x1b[1;31merror:\x1b[0m codec '{}' not found", self.name)?;
        } else {
            writeln!(f, "error: codec '{}' not found", self.name)?;
        }
        writeln!(f)?;

        if let Some(suggestion) = &self.suggestion {
            if use_color {
                writeln!(f, "\x1b[1;36mhint:\x1b[0m did you mean '{}'?", suggestion)?;
            } else {
                writeln!(f, "hint: did you mean '{}'?", suggestion)?;
            }
        }

        if use_color {
            write!(
                f,
                "      run \x1b[1m`octext list`\x1b[0m to see all codecs"
            )
        } else {
            write!(f, "      run `octext list` to see all codecs")
        }
    }
}

impl std::error::Error for CodecNotFoundError {}

/// Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len2 = s2.chars().count();
    if s1.is_empty() {
        return len2;
    }
    if len2 == 0 {
        return s1.chars().count();
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = usize::from(c1 != c2);
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching codec name
pub fn find_closest_codec(name: &str, available: &[String]) -> Option<String> {
    // 1-2 edits for short names, up to 3 for longer ones
    let threshold = if name.len() < 5 { 2 } else { 3 };

    let mut best_match = None;
    let mut best_distance = usize::MAX;

    for codec_name in available {
        let distance = levenshtein_distance(name, codec_name);
        if distance < best_distance && distance <= threshold {
            best_distance = distance;
            best_match = Some(codec_name.clone());
        }
    }

    best_match
}
