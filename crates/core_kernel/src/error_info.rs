//! Canonical HTTP error envelope
//!
//! Every core service answers failures with this body, and the composite
//! reuses it for its own error responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpErrorInfo {
    #[serde(default, deserialize_with = "crate::timestamp::deserialize_lenient")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub http_status: u16,
    pub message: String,
}

impl HttpErrorInfo {
    /// Builds an envelope stamped with the current time
    pub fn new(http_status: u16, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: Some(Utc::now()),
            path: path.into(),
            http_status,
            message: message.into(),
        }
    }

    /// Parses an envelope from a raw response body
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_envelope() {
        let info = HttpErrorInfo::parse(
            r#"{"timestamp":"2024-01-01T00:00:00Z","path":"/api/v1/product/1","httpStatus":404,"message":"No product found for productId: 1"}"#,
        )
        .unwrap();
        assert_eq!(info.http_status, 404);
        assert_eq!(info.message, "No product found for productId: 1");
    }

    #[test]
    fn test_parse_local_or_unreadable_timestamp() {
        let info = HttpErrorInfo::parse(
            r#"{"timestamp":"2024-01-01T10:00:00.123","path":"/api/v1/product/13","httpStatus":404,"message":"No product found for productId: 13"}"#,
        )
        .unwrap();
        assert!(info.timestamp.is_some());
        assert_eq!(info.message, "No product found for productId: 13");

        let info = HttpErrorInfo::parse(r#"{"timestamp":[2024,1,1],"message":"gone"}"#).unwrap();
        assert_eq!(info.timestamp, None);
        assert_eq!(info.message, "gone");
    }

    #[test]
    fn test_parse_requires_message() {
        assert!(HttpErrorInfo::parse(r#"{"path":"/x"}"#).is_err());
        assert!(HttpErrorInfo::parse("<html>oops</html>").is_err());
    }
}
