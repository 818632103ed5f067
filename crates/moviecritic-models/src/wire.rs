//! Lenient JSON shapes accepted from the remote service.
//!
//! Identifiers and ratings come back as numbers from some backends and as
//! strings from others (form fields are posted verbatim), so both are accepted.

use serde::de::{Error as _, IgnoredAny};
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StringOrNumber {
    Int(i64),
    Float(f64),
    String(String),
}

impl StringOrNumber {
    pub fn into_text(self) -> String {
        match self {
            StringOrNumber::Int(n) => n.to_string(),
            StringOrNumber::Float(n) => n.to_string(),
            StringOrNumber::String(s) => s,
        }
    }

    pub fn to_number(&self) -> Result<f64, String> {
        match self {
            StringOrNumber::Int(n) => Ok(*n as f64),
            StringOrNumber::Float(n) => Ok(*n),
            StringOrNumber::String(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| format!("expected a number, got {:?}", s)),
        }
    }
}

/// Deserialize a numeric field that is free text on some backends.
/// Anything that is not a number (blank, `null`, missing, or words) maps to
/// `None` so one odd record cannot reject the list it arrived in.
pub fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Known(StringOrNumber),
        Other(IgnoredAny),
    }

    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Known(value)) => value.to_number().ok(),
        Some(Loose::Other(_)) | None => None,
    })
}

/// Deserialize an optional numeric field. `null`, an empty string, and a
/// missing field all map to `None`.
pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StringOrNumber>::deserialize(deserializer)? {
        None => Ok(None),
        Some(StringOrNumber::String(s)) if s.trim().is_empty() => Ok(None),
        Some(value) => value.to_number().map(Some).map_err(D::Error::custom),
    }
}

/// Format a rating without trailing zeros, rounded to one decimal place.
pub fn format_rating(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    format!("{}", rounded)
}
