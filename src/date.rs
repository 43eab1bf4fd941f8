use chrono::{DateTime, NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::error::EvaluationError;

/// Offset date-time shapes with a numeric offset, most common first.
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M%:z"];

/// The same shapes with `Z` standing for UTC.
const ZULU_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.fZ", "%Y-%m-%dT%H:%MZ"];

/// Why a timestamp could not be resolved.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DateError {
    #[error(transparent)]
    Parse(#[from] chrono::ParseError),

    #[error("offset must be `Z` or `+HH:MM` directly after the time")]
    Offset,
}

/// Resolve an ISO 8601 offset date-time into the calendar date it names.
///
/// Only full `date T time offset` strings are accepted, e.g.
/// `1995-05-20T00:00:00+03:00`. Seconds and fractional seconds are
/// optional, `Z` stands for UTC. The date is taken in the timestamp's own
/// offset and never shifted to another zone. Bare dates are rejected.
pub fn resolve(text: &str) -> Result<NaiveDate, DateError> {
    // chrono skips whitespace before numbers and offsets, and `%:z` takes
    // `+0300` too, so the written shape is checked before parsing.
    if !has_strict_offset(text) {
        return Err(DateError::Offset);
    }

    let first = match DateTime::parse_from_str(text, OFFSET_FORMATS[0]) {
        Ok(dt) => return Ok(dt.date_naive()),
        Err(err) => err,
    };

    if let Ok(dt) = DateTime::parse_from_str(text, OFFSET_FORMATS[1]) {
        return Ok(dt.date_naive());
    }

    ZULU_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|dt| dt.date())
        .ok_or(DateError::Parse(first))
}

/// True when the text has no whitespace and ends in `Z` or `[+-]HH:MM`
/// right after a digit of the time.
fn has_strict_offset(text: &str) -> bool {
    if text.contains(char::is_whitespace) {
        return false;
    }
    if let Some(rest) = text.strip_suffix('Z') {
        return rest.ends_with(|c: char| c.is_ascii_digit());
    }

    let bytes = text.as_bytes();
    match bytes.len().checked_sub(7).map(|at| &bytes[at..]) {
        Some([last, sign, h1, h2, b':', m1, m2]) => {
            last.is_ascii_digit()
                && matches!(*sign, b'+' | b'-')
                && [h1, h2, m1, m2].iter().all(|b| b.is_ascii_digit())
        }
        _ => false,
    }
}

/// Resolve the value of a named document field.
pub fn resolve_field(field: &str, text: &str) -> Result<NaiveDate, EvaluationError> {
    resolve(text).map_err(|source| EvaluationError::MalformedDate {
        field: field.to_string(),
        value: text.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_offset_date_time() {
        assert_eq!(resolve("1995-05-20T00:00:00+03:00").unwrap(), date(1995, 5, 20));
    }

    #[test]
    fn test_date_taken_in_own_offset() {
        // 04:30 UTC on Jan 2, but still Jan 1 in New York
        assert_eq!(resolve("2000-01-01T23:30:00-05:00").unwrap(), date(2000, 1, 1));
        assert_eq!(resolve("2000-01-02T01:30:00+03:00").unwrap(), date(2000, 1, 2));
    }

    #[test]
    fn test_zulu_and_fraction() {
        assert_eq!(resolve("2010-07-01T12:00:00.250Z").unwrap(), date(2010, 7, 1));
    }

    #[test]
    fn test_seconds_optional() {
        assert_eq!(resolve("1995-05-20T10:15+03:00").unwrap(), date(1995, 5, 20));
        assert_eq!(resolve("1995-05-20T10:15Z").unwrap(), date(1995, 5, 20));
    }

    #[test]
    fn test_rejects_bare_date() {
        assert!(resolve("1995-05-20").is_err());
    }

    #[test]
    fn test_rejects_missing_offset() {
        assert!(resolve("1995-05-20T00:00:00").is_err());
    }

    #[test]
    fn test_rejects_space_before_offset() {
        assert_eq!(resolve("1995-05-20T00:00:00 +03:00"), Err(DateError::Offset));
        assert_eq!(resolve("1995-05-20T00:00:00 Z"), Err(DateError::Offset));
    }

    #[test]
    fn test_rejects_offset_without_colon() {
        assert_eq!(resolve("1995-05-20T00:00:00+0300"), Err(DateError::Offset));
        assert_eq!(resolve("1995-05-20T00:00:00+03"), Err(DateError::Offset));
    }

    #[test]
    fn test_rejects_space_inside_time() {
        assert!(resolve("1995-05-20T 00:00:00+03:00").is_err());
    }

    #[test]
    fn test_rejects_space_separator() {
        assert!(resolve("1995-05-20 00:00:00+03:00").is_err());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(resolve("").is_err());
        assert!(matches!(
            resolve("1995-02-30T00:00:00+03:00"),
            Err(DateError::Parse(_))
        ));
        assert!(resolve("twentieth of May").is_err());
        assert!(resolve("1995-13-40T00:00:00+03:00").is_err());
    }

    #[test]
    fn test_resolve_field_reports_malformed_date() {
        let err = resolve_field("birthDate", "20.05.1995").unwrap_err();
        match err {
            EvaluationError::MalformedDate { field, value, .. } => {
                assert_eq!(field, "birthDate");
                assert_eq!(value, "20.05.1995");
            }
            other => panic!("expected malformed date, got {other:?}"),
        }
    }
}
