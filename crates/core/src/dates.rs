//! Lenient parsing for dates and timestamps sent by clients.
//!
//! Browser clients send either a bare `YYYY-MM-DD` (date inputs) or a full
//! RFC 3339 timestamp (`Date.toISOString()`). Both forms are accepted
//! wherever the API takes a date or a timestamp. Blank strings count as
//! absent.

use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use serde::de::{Error, Unexpected};
use serde::{Deserialize, Deserializer};

use crate::types::{Date, Timestamp};

/// Parse a calendar date. A timestamp contributes its UTC date.
pub fn parse_date(value: &str) -> Option<Date> {
    let value = value.trim();
    Date::parse_from_str(value, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(value)
            .ok()
            .map(|dt| dt.with_timezone(&Utc).date_naive())
    })
}

/// Parse a timestamp. A bare date means midnight UTC.
pub fn parse_timestamp(value: &str) -> Option<Timestamp> {
    let value = value.trim();
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|| {
            Date::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .map(|d| Utc.from_utc_datetime(&d.and_time(NaiveTime::MIN)))
        })
}

fn optional_with<'de, D, T>(
    deserializer: D,
    parse: fn(&str) -> Option<T>,
    expected: &'static str,
) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => parse(&raw)
            .map(Some)
            .ok_or_else(|| D::Error::invalid_value(Unexpected::Str(&raw), &expected)),
    }
}

/// `deserialize_with` target for `Option<Date>` fields.
///
/// Pair with `#[serde(default)]` so a missing field stays `None`.
pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
where
    D: Deserializer<'de>,
{
    optional_with(
        deserializer,
        parse_date,
        "a YYYY-MM-DD date or an RFC 3339 timestamp",
    )
}

/// `deserialize_with` target for `Option<Timestamp>` fields.
pub fn deserialize_optional_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    optional_with(
        deserializer,
        parse_timestamp,
        "an RFC 3339 timestamp or a YYYY-MM-DD date",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd_opt(y, m, day).unwrap()
    }

    #[derive(Debug, Deserialize)]
    struct Body {
        #[serde(default, deserialize_with = "deserialize_optional_date")]
        visit_date: Option<Date>,
        #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
        release_date: Option<Timestamp>,
    }

    #[test]
    fn date_from_plain_and_iso_forms() {
        assert_eq!(parse_date("2024-06-01"), Some(d(2024, 6, 1)));
        assert_eq!(parse_date("2024-06-01T08:30:00.000Z"), Some(d(2024, 6, 1)));
        assert_eq!(parse_date("2024-06-01T23:30:00-02:00"), Some(d(2024, 6, 2)));
        assert_eq!(parse_date("June 1st"), None);
    }

    #[test]
    fn timestamp_from_plain_date_is_midnight_utc() {
        let ts = parse_timestamp("2024-06-01").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-06-01T00:00:00+00:00");
        let ts = parse_timestamp("2024-06-01T08:30:00Z").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-06-01T08:30:00+00:00");
    }

    #[test]
    fn body_fields_accept_both_forms() {
        let body: Body = serde_json::from_str(
            r#"{"visit_date":"2024-06-01T08:30:00.000Z","release_date":"2024-06-01"}"#,
        )
        .unwrap();
        assert_eq!(body.visit_date, Some(d(2024, 6, 1)));
        assert_eq!(
            body.release_date.map(|t| t.date_naive()),
            Some(d(2024, 6, 1))
        );
    }

    #[test]
    fn missing_null_and_blank_are_none() {
        let body: Body = serde_json::from_str(r#"{"visit_date":null,"release_date":""}"#).unwrap();
        assert_eq!(body.visit_date, None);
        assert_eq!(body.release_date, None);
        let body: Body = serde_json::from_str("{}").unwrap();
        assert_eq!(body.visit_date, None);
    }

    #[test]
    fn garbage_is_rejected() {
        let err = serde_json::from_str::<Body>(r#"{"visit_date":"tomorrow"}"#).unwrap_err();
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }
}
