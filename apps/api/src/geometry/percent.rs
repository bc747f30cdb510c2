//! Percent arithmetic helpers and legacy `"12.5%"` parsing.
//!
//! Every coordinate that leaves the core is rounded to two decimal places so that
//! repeated incremental updates (drag ticks, resize ticks) cannot accumulate float drift.

use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Smallest width or height (in percent) a box may be resized to.
pub const MIN_BOX_SIZE_PCT: f64 = 5.0;

#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("canvas dimensions must be positive and finite, got {width}x{height}")]
    InvalidCanvas { width: f64, height: f64 },

    #[error("invalid percentage value '{0}'")]
    InvalidPercent(String),
}

/// Rounds to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    // Normalise -0.0 so serialized output never shows "-0.0".
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Parses a percentage from its legacy rendering form.
///
/// Accepts `"12.5%"`, `" 12.5 % "` and bare numbers (`"12.5"`).
pub fn parse_percent(raw: &str) -> Result<f64, GeometryError> {
    let trimmed = raw.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    let value: f64 = number
        .parse()
        .map_err(|_| GeometryError::InvalidPercent(raw.to_string()))?;
    if !value.is_finite() {
        return Err(GeometryError::InvalidPercent(raw.to_string()));
    }
    Ok(value)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PercentRepr {
    Number(f64),
    Text(String),
}

/// Serde helper: accepts either a JSON number or a legacy `"NN%"` string.
pub fn de_percent<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match PercentRepr::deserialize(deserializer)? {
        PercentRepr::Number(value) => Ok(value),
        PercentRepr::Text(raw) => parse_percent(&raw).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_rounds_half_away() {
        assert_eq!(round2(12.345_6), 12.35);
        assert_eq!(round2(0.004), 0.0);
        assert_eq!(round2(-0.001), 0.0);
        assert!(round2(-0.001).is_sign_positive());
    }

    #[test]
    fn test_parse_percent_forms() {
        assert_eq!(parse_percent("12.5%"), Ok(12.5));
        assert_eq!(parse_percent(" 40 % "), Ok(40.0));
        assert_eq!(parse_percent("7"), Ok(7.0));
    }

    #[test]
    fn test_parse_percent_rejects_garbage() {
        assert!(matches!(
            parse_percent("abc%"),
            Err(GeometryError::InvalidPercent(_))
        ));
        assert!(parse_percent("").is_err());
        assert!(parse_percent("NaN%").is_err());
    }

    #[derive(Deserialize)]
    struct Holder {
        #[serde(deserialize_with = "de_percent")]
        x: f64,
    }

    #[test]
    fn test_de_percent_accepts_number_and_string() {
        let a: Holder = serde_json::from_str(r#"{"x": 33}"#).unwrap();
        let b: Holder = serde_json::from_str(r#"{"x": "33.5%"}"#).unwrap();
        assert_eq!(a.x, 33.0);
        assert_eq!(b.x, 33.5);
        assert!(serde_json::from_str::<Holder>(r#"{"x": "wide"}"#).is_err());
    }
}
