//! Ports and Adapters Infrastructure
//!
//! Foundational types shared by the port traits of the core-service domains.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Composite Service Layer                      │
//! │        (read path, write path, event consumer)               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Port Traits                             │
//! │     (ProductPort, RecommendationPort, ReviewPort)            │
//! │   Defined in each domain, depend only on core_kernel         │
//! └─────────────────────────────────────────────────────────────┘
//!                    ▲                         ▲
//!                    │                         │
//!         ┌─────────┴─────────┐     ┌────────┴────────┐
//!         │  HTTP Adapter     │     │  Mock Adapter    │
//!         │  (infra_http)     │     │  (tests)         │
//!         └───────────────────┘     └──────────────────┘
//! ```
//!
//! Every adapter reports failures as a [`PortError`], so the composite layer
//! sees one classification whatever transport sits underneath.

use thiserror::Error;

/// Error type for port operations
///
/// The variants are the error classification applied to every downstream
/// call. The composite layer propagates them unchanged in kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortError {
    /// The downstream service reported the entity as absent
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// The downstream service rejected the payload as unprocessable
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Any other error status, passed through as received
    #[error("Upstream error {status}: {message}")]
    Upstream {
        status: u16,
        message: String,
        body: String,
    },

    /// The request could not be completed or its response could not be read
    #[error("Transport error: {message}")]
    Transport { message: String },
}

impl PortError {
    /// Creates a NotFound error
    pub fn not_found(message: impl Into<String>) -> Self {
        PortError::NotFound {
            message: message.into(),
        }
    }

    /// Creates an InvalidInput error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        PortError::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates an Upstream error for an unrecognised status
    pub fn upstream(status: u16, message: impl Into<String>, body: impl Into<String>) -> Self {
        PortError::Upstream {
            status,
            message: message.into(),
            body: body.into(),
        }
    }

    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        PortError::Transport {
            message: message.into(),
        }
    }

    /// Returns true if this error indicates the entity was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }

    /// Returns true if the payload was rejected downstream
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, PortError::InvalidInput { .. })
    }

    /// The message carried by the error, without the kind prefix
    pub fn message(&self) -> &str {
        match self {
            PortError::NotFound { message }
            | PortError::InvalidInput { message }
            | PortError::Upstream { message, .. }
            | PortError::Transport { message } => message,
        }
    }
}

/// Marker trait for all domain ports
///
/// All port traits extend this marker so they can be shared across tasks.
pub trait DomainPort: Send + Sync + 'static {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_error_not_found() {
        let error = PortError::not_found("No product found for productId: 123");
        assert!(error.is_not_found());
        assert!(!error.is_invalid_input());
        assert!(error.to_string().contains("123"));
        assert_eq!(error.message(), "No product found for productId: 123");
    }

    #[test]
    fn test_upstream_keeps_status_and_body() {
        let error = PortError::upstream(503, "unavailable", "{\"message\":\"unavailable\"}");
        match error {
            PortError::Upstream { status, ref body, .. } => {
                assert_eq!(status, 503);
                assert!(body.contains("unavailable"));
            }
            _ => panic!("Expected Upstream error"),
        }
    }
}
