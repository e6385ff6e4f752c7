//! MIME type parsing and HTTP `Accept` negotiation.
//!
//! Parameter values are taken literally: RFC 2045 quoted strings are not
//! unquoted, and a `;` or `,` inside quotes still splits. Empty parameter
//! segments (`a/b;` or `a/b;;c=d`) are skipped rather than rejected.

use crate::encoders::algorithms::errors::{CodecError, Result};
use std::collections::BTreeMap;

/// A parsed `type/subtype;param=value` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MimeType {
    pub media_type: String,
    pub subtype: String,
    pub params: BTreeMap<String, String>,
}

impl MimeType {
    /// `type/subtype` without parameters.
    pub fn essence(&self) -> String {
        format!("{}/{}", self.media_type, self.subtype)
    }

    /// The `q` parameter as a number, or 1.0 when absent or unparseable.
    pub fn quality(&self) -> f64 {
        self.params
            .get("q")
            .and_then(|q| q.trim().parse::<f64>().ok())
            .unwrap_or(1.0)
    }

    pub fn into_parts(self) -> (String, String, BTreeMap<String, String>) {
        (self.media_type, self.subtype, self.params)
    }
}

/// Splits a MIME type into type, subtype and parameters.
///
/// A bare `*` is read as `*/*`. Empty parameter segments are skipped.
///
/// # Errors
///
/// `Format` if there is not exactly one `/`, or a parameter lacks `=`.
pub fn parse_mime_type(mime_type: &str) -> Result<MimeType> {
    let mut parts = mime_type.split(';');
    let full_type = parts.next().unwrap_or_default().trim();
    let full_type = if full_type == "*" { "*/*" } else { full_type };

    let (media_type, subtype) = full_type
        .split_once('/')
        .filter(|(_, subtype)| !subtype.contains('/'))
        .ok_or_else(|| CodecError::malformed(mime_type, "expected exactly one '/'"))?;

    let mut params = BTreeMap::new();
    for param in parts {
        if param.trim().is_empty() {
            continue;
        }
        let (key, value) = param.split_once('=').ok_or_else(|| {
            CodecError::malformed(mime_type, format!("parameter {:?} has no '='", param.trim()))
        })?;
        params.insert(key.trim().to_string(), value.trim().to_string());
    }

    Ok(MimeType {
        media_type: media_type.trim().to_string(),
        subtype: subtype.trim().to_string(),
        params,
    })
}

/// Parses an `Accept` element, forcing `q` to `"1"` when it is missing,
/// unparseable, zero, or outside `[0, 1]`.
pub fn parse_media_range(range: &str) -> Result<MimeType> {
    let mut parsed = parse_mime_type(range)?;
    let valid = parsed
        .params
        .get("q")
        .and_then(|q| q.parse::<f64>().ok())
        .is_some_and(|q| q > 0.0 && q <= 1.0);
    if !valid {
        parsed.params.insert("q".to_string(), "1".to_string());
    }
    Ok(parsed)
}

/// Scores `target` against a single media range.
///
/// Returns `(fitness, q)`: 100 for an exact type, 10 for an exact subtype,
/// plus one per matching non-`q` parameter. `(-1, 0.0)` when the range
/// does not cover the target.
pub fn fitness(target: &MimeType, range: &MimeType) -> (i32, f64) {
    let type_match = range.media_type == target.media_type
        || range.media_type == "*"
        || target.media_type == "*";
    let subtype_match =
        range.subtype == target.subtype || range.subtype == "*" || target.subtype == "*";

    if !(type_match && subtype_match) {
        return (-1, 0.0);
    }

    let param_matches = target
        .params
        .iter()
        .filter(|&(key, value)| key != "q" && range.params.get(key) == Some(value))
        .count() as i32;

    let fitness = 100 * i32::from(range.media_type == target.media_type)
        + 10 * i32::from(range.subtype == target.subtype)
        + param_matches;
    (fitness, range.quality())
}

/// Best `(fitness, q)` of `mime_type` over already-parsed ranges.
///
/// Ties in fitness keep the earliest range.
pub fn fitness_and_quality_parsed(mime_type: &str, parsed_ranges: &[MimeType]) -> Result<(i32, f64)> {
    let target = parse_media_range(mime_type)?;
    let mut best = (-1, 0.0);
    for range in parsed_ranges {
        let (fit, q) = fitness(&target, range);
        if fit > best.0 {
            best = (fit, q);
        }
    }
    Ok(best)
}

/// Quality of `mime_type` under already-parsed ranges.
pub fn quality_parsed(mime_type: &str, parsed_ranges: &[MimeType]) -> Result<f64> {
    fitness_and_quality_parsed(mime_type, parsed_ranges).map(|(_, q)| q)
}

/// Quality of `mime_type` under an `Accept` header.
pub fn quality(mime_type: &str, header: &str) -> Result<f64> {
    quality_parsed(mime_type, &parse_header(header)?)
}

/// Picks the entry of `supported` that best fits `header`.
///
/// `supported` is ordered by increasing preference: on equal fitness and
/// quality the later entry wins. Entries whose quality is zero never win.
/// Returns an empty string when nothing in `supported` is acceptable.
pub fn best_match<S: AsRef<str>>(supported: &[S], header: &str) -> Result<String> {
    let parsed = parse_header(header)?;

    let mut best: Option<((i32, f64), usize)> = None;
    for (pos, mime_type) in supported.iter().enumerate() {
        let score = fitness_and_quality_parsed(mime_type.as_ref(), &parsed)?;
        if score.1 <= 0.0 {
            continue;
        }
        let better = match best {
            None => true,
            Some(((fit, q), _)) => (score.0, score.1) >= (fit, q),
        };
        if better {
            best = Some((score, pos));
        }
    }

    Ok(best
        .map(|(_, pos)| supported[pos].as_ref().to_string())
        .unwrap_or_default())
}

fn parse_header(header: &str) -> Result<Vec<MimeType>> {
    header
        .split(',')
        .filter(|r| !r.trim().is_empty())
        .map(parse_media_range)
        .collect()
}
