//! Timestamp normalization
//!
//! The record store has a single timestamp representation, so every
//! date-valued field is widened to a `NaiveDateTime` before it is persisted.
//! A bare date (`2024-05-01`) becomes midnight of that day.
//!
//! Accepted inputs:
//! - `YYYY-MM-DD`
//! - `YYYY-MM-DDTHH:MM:SS[.fff]` and the same with a space separator
//! - RFC 3339 with an offset (converted to UTC)
//!
//! Values are written back as `YYYY-MM-DDTHH:MM:SS`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const OUTPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a date or timestamp, normalizing date-only input to midnight.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN));
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.naive_utc());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

/// Render a timestamp in the wire format.
pub fn format_timestamp(value: &NaiveDateTime) -> String {
    value.format(OUTPUT_FORMAT).to_string()
}

/// Serde adapter for required timestamp fields.
pub mod midnight {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_timestamp(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_timestamp(&raw).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid date or timestamp: {}", raw))
        })
    }
}

/// Serde adapter for optional timestamp fields. Pair with `#[serde(default)]`.
pub mod midnight_option {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => serializer.serialize_some(&super::format_timestamp(value)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => super::parse_timestamp(&raw).map(Some).ok_or_else(|| {
                serde::de::Error::custom(format!("invalid date or timestamp: {}", raw))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_date_only_becomes_midnight() {
        let parsed = parse_timestamp("2024-05-01").unwrap();
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(parsed.hour(), 0);
        assert_eq!(parsed.minute(), 0);
        assert_eq!(format_timestamp(&parsed), "2024-05-01T00:00:00");
    }

    #[test]
    fn test_full_timestamps_are_kept() {
        let parsed = parse_timestamp("2024-05-01T14:30:05").unwrap();
        assert_eq!(format_timestamp(&parsed), "2024-05-01T14:30:05");

        let spaced = parse_timestamp("2024-05-01 14:30:05.250").unwrap();
        assert_eq!(spaced.hour(), 14);
    }

    #[test]
    fn test_offsets_are_converted_to_utc() {
        let parsed = parse_timestamp("2024-05-01T10:00:00+02:00").unwrap();
        assert_eq!(format_timestamp(&parsed), "2024-05-01T08:00:00");
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(parse_timestamp("next tuesday").is_none());
        assert!(parse_timestamp("2024-13-01").is_none());
    }
}
