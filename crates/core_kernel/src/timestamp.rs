//! ISO-8601 timestamps as exchanged with the core services
//!
//! Peers send either an offset date-time (`2024-01-01T10:00:00Z`) or a local
//! one without offset (`2024-01-01T10:00:00.123`). Local values are read as
//! UTC. Serialization always writes RFC 3339 in UTC.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Parses an offset or local ISO-8601 date-time
pub fn parse(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Some(date.with_timezone(&Utc));
    }
    value
        .parse::<NaiveDateTime>()
        .ok()
        .map(|local| Utc.from_utc_datetime(&local))
}

/// Deserializes a required timestamp; unreadable values are an error
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid ISO-8601 date-time: {}", raw)))
}

/// Deserializes an optional timestamp; absent or unreadable values become `None`
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(serde_json::Value::as_str).and_then(parse))
}
