//! # Deadlines
//!
//! A deadline is either absent or a UTC timestamp. "No deadline" is a state of
//! its own and is never encoded as an empty string or the epoch.
//!
//! Two kinds of text turn into deadlines, and both go through an explicit parse
//! step that yields `Option<DateTime<Utc>>`:
//!
//! - **Stored** values ([`parse_stored`]): the RFC 3339 strings written to the
//!   `TodoApp` key, or `null`.
//! - **User input** ([`parse_input`]): what someone types on the command line.
//!   Accepts the `datetime-local` shapes (`2025-03-01T18:30`, `2025-03-01 18:30:00`),
//!   a bare date (`2025-03-01`, local midnight), or a full RFC 3339 timestamp.

use crate::error::{Result, TodoError};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Utc};

const LOCAL_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Parses a persisted deadline. `None` and the empty string both mean "no deadline".
pub fn parse_stored(raw: Option<&str>) -> Result<Option<DateTime<Utc>>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => DateTime::parse_from_rfc3339(s)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|e| TodoError::InvalidDeadline(format!("{} ({})", s, e))),
    }
}

/// Parses a deadline typed by the user. An empty string clears the deadline.
pub fn parse_input(raw: &str) -> Result<Option<DateTime<Utc>>> {
    let s = raw.trim();
    if s.is_empty() {
        return Ok(None);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(Some(dt.with_timezone(&Utc)));
    }

    for fmt in LOCAL_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return local_to_utc(naive, s).map(Some);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return local_to_utc(date.and_time(NaiveTime::MIN), s).map(Some);
    }

    Err(TodoError::InvalidDeadline(format!(
        "{} (expected YYYY-MM-DD, YYYY-MM-DDTHH:MM or RFC 3339)",
        s
    )))
}

/// Wire form of a deadline: RFC 3339 in UTC (`Z` suffix), with only as many
/// fractional digits as the value needs, so a save/load cycle is exact.
pub fn to_stored(deadline: &DateTime<Utc>) -> String {
    deadline.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn local_to_utc(naive: NaiveDateTime, original: &str) -> Result<DateTime<Utc>> {
    // DST gaps have no local instant; ambiguous times take the earlier one.
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| {
            TodoError::InvalidDeadline(format!("{} does not exist in local time", original))
        })
}

/// Serde adapter for `Option<DateTime<Utc>>` fields, used with
/// `#[serde(default, with = "crate::deadline::serde_option")]`.
pub mod serde_option {
    use super::{parse_stored, to_stored};
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&to_stored(dt)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        parse_stored(raw.as_deref()).map_err(serde::de::Error::custom)
    }
}
