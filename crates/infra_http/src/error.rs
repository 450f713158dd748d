//! Error classification for downstream calls
//!
//! Every non-success response is turned into a [`PortError`] here, so the
//! policy is the same for all three services.

use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, warn};

use core_kernel::{HttpErrorInfo, PortError};

/// Errors raised while setting up the integration layer
#[derive(Debug, Error)]
pub enum IntegrationError {
    /// The service addresses cannot be used as configured
    #[error("Invalid integration configuration: {0}")]
    InvalidConfig(String),

    /// The HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}

/// Classifies a non-success response
///
/// `404` and `422` become `NotFound` and `InvalidInput`. Any other status is
/// logged at warn level with its body and passed through as `Upstream`.
pub fn classify_response(status: StatusCode, body: &str) -> PortError {
    match status {
        StatusCode::NOT_FOUND => PortError::not_found(error_message(status, body)),
        StatusCode::UNPROCESSABLE_ENTITY => PortError::invalid_input(error_message(status, body)),
        _ => {
            warn!(status = status.as_u16(), "Got an unexpected http error");
            warn!(body, "Unexpected http error body");
            PortError::upstream(status.as_u16(), error_message(status, body), body)
        }
    }
}

/// Maps a failure to send a request or to read its response
pub fn transport_error(error: reqwest::Error) -> PortError {
    match error.status() {
        Some(status) => PortError::transport(format!("{}: {}", status, error)),
        None => PortError::transport(error.to_string()),
    }
}

/// Message of the error envelope, or the raw status and body when the
/// envelope cannot be parsed
fn error_message(status: StatusCode, body: &str) -> String {
    match HttpErrorInfo::parse(body) {
        Ok(info) => info.message,
        Err(e) => {
            debug!(error = %e, "Error body is not an HttpErrorInfo envelope");
            format!("{}: {}", status, body)
        }
    }
}
