//! Turns whatever the backend (or a user) calls a date into a `NaiveDate`.
//!
//! Transactions only care about the calendar day, so time-of-day and offsets
//! are folded into UTC and dropped.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use thiserror::Error;

/// Canonical wire format
pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// Short format the frontend displays, e.g. `24-03-05`
pub const SHORT_FORMAT: &str = "%y-%m-%d";

const NAIVE_DATE_TIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Unrecognised date: {0:?}")]
    Unrecognised(String),

    #[error("Timestamp out of range: {0}")]
    OutOfRange(i64),
}

/// Converts a raw textual date into its canonical calendar date.
pub fn normalize(raw: &str) -> Result<NaiveDate, DateError> {
    let raw = raw.trim();

    if is_short_form(raw) {
        return NaiveDate::parse_from_str(raw, SHORT_FORMAT)
            .map_err(|_| DateError::Unrecognised(raw.to_string()));
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, ISO_FORMAT) {
        return Ok(date);
    }

    if let Ok(date_time) = DateTime::parse_from_rfc3339(raw) {
        return Ok(date_time.with_timezone(&Utc).date_naive());
    }

    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|date_time| date_time.date())
        .ok_or_else(|| DateError::Unrecognised(raw.to_string()))
}

/// Converts epoch milliseconds (UTC) into a calendar date.
pub fn from_millis(millis: i64) -> Result<NaiveDate, DateError> {
    return DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|date_time| date_time.date_naive())
        .ok_or(DateError::OutOfRange(millis));
}

/// Formats a date the way the frontend shows it.
pub fn format_short(date: &NaiveDate) -> String {
    return date.format(SHORT_FORMAT).to_string();
}

// `YY-MM-DD` would otherwise be read as a four digit year in the first century
fn is_short_form(raw: &str) -> bool {
    return raw.len() == 8 && raw.find('-') == Some(2);
}

/// Serde adapter: writes `YYYY-MM-DD`, reads anything [`normalize`] or [`from_millis`] accepts.
pub mod serde_date {
    use super::{from_millis, normalize, ISO_FORMAT};

    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawDate {
        Text(String),
        Millis(i64),
    }

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format(ISO_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let date = match RawDate::deserialize(deserializer)? {
            RawDate::Text(raw) => normalize(&raw),
            RawDate::Millis(millis) => from_millis(millis),
        };

        date.map_err(de::Error::custom)
    }
}
