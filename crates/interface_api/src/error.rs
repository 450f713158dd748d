//! API error handling
//!
//! Every failure leaves the API as an [`HttpErrorInfo`] envelope carrying the
//! request path. Downstream messages are passed through verbatim.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{debug, warn};
use validator::ValidationErrors;

use core_kernel::{HttpErrorInfo, PortError};
use domain_composite::CompositeError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Validation(String),

    /// A downstream error status other than 404 and 422
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// A downstream service could not be reached or answered garbage
    #[error("{0}")]
    BadGateway(String),

    /// The request could not be extracted
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    #[error("{0}")]
    Unavailable(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidInput(_) | ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Upstream { status, .. } => StatusCode::from_u16(*status)
                .ok()
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::Rejected { status, .. } => *status,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Binds the error to the path of the failed request
    pub fn at(self, path: impl Into<String>) -> ErrorResponse {
        ErrorResponse {
            error: self,
            path: path.into(),
        }
    }
}

/// An error ready to be rendered for one request path
#[derive(Debug)]
pub struct ErrorResponse {
    pub error: ApiError,
    pub path: String,
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status = self.error.status();
        let message = self.error.to_string();

        if status.is_server_error() {
            warn!(status = status.as_u16(), path = %self.path, %message, "Request failed");
        } else {
            debug!(status = status.as_u16(), path = %self.path, %message, "Request rejected");
        }

        let body = HttpErrorInfo::new(status.as_u16(), self.path, message);
        (status, Json(body)).into_response()
    }
}

impl From<PortError> for ApiError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::NotFound { message } => ApiError::NotFound(message),
            PortError::InvalidInput { message } => ApiError::InvalidInput(message),
            PortError::Upstream { status, message, .. } => ApiError::Upstream { status, message },
            PortError::Transport { message } => ApiError::BadGateway(message),
        }
    }
}

impl From<CompositeError> for ApiError {
    fn from(err: CompositeError) -> Self {
        match err {
            CompositeError::Port(port) => port.into(),
            CompositeError::Publish(publish) => ApiError::Unavailable(publish.to_string()),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(err: ValidationErrors) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}
