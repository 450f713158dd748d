//! Integration events exchanged between the composite and the core services
//!
//! An event is immutable once built: fields are private and only exposed
//! through accessors. Consumers must tolerate redelivery of the same event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of change an event announces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    Create,
    Delete,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventType::Create => write!(f, "CREATE"),
            EventType::Delete => write!(f, "DELETE"),
        }
    }
}

/// An event keyed by a correlation id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event<K> {
    #[serde(rename = "type")]
    event_type: EventType,
    key: K,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    creation_date: DateTime<Utc>,
}

impl<K> Event<K> {
    pub fn new(event_type: EventType, key: K) -> Self {
        Self {
            event_type,
            key,
            creation_date: Utc::now(),
        }
    }

    /// Builds an event with an explicit creation date
    pub fn at(event_type: EventType, key: K, creation_date: DateTime<Utc>) -> Self {
        Self {
            event_type,
            key,
            creation_date,
        }
    }

    pub fn delete(key: K) -> Self {
        Self::new(EventType::Delete, key)
    }

    pub fn create(key: K) -> Self {
        Self::new(EventType::Create, key)
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn creation_date(&self) -> DateTime<Utc> {
        self.creation_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_wire_format() {
        let date = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        let event = Event::at(EventType::Delete, 42, date);
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["type"], "DELETE");
        assert_eq!(json["key"], 42);
        assert_eq!(json["creationDate"], "2024-03-01T10:00:00Z");
    }

    #[test]
    fn test_parse_incoming_event() {
        let event: Event<i32> = serde_json::from_str(
            r#"{"type":"CREATE","key":7,"creationDate":"2024-03-01T10:00:00.123+01:00"}"#,
        )
        .unwrap();

        assert_eq!(event.event_type(), EventType::Create);
        assert_eq!(*event.key(), 7);
    }

    #[test]
    fn test_parse_event_with_local_date_time() {
        let event: Event<i32> = serde_json::from_str(
            r#"{"type":"DELETE","key":42,"creationDate":"2024-01-01T10:00:00.123"}"#,
        )
        .unwrap();

        assert_eq!(event.event_type(), EventType::Delete);
        assert_eq!(event.creation_date().to_rfc3339(), "2024-01-01T10:00:00.123+00:00");
    }

    #[test]
    fn test_unreadable_creation_date_is_rejected() {
        let result: Result<Event<i32>, _> =
            serde_json::from_str(r#"{"type":"DELETE","key":42,"creationDate":"soon"}"#);
        assert!(result.is_err());
    }
}
