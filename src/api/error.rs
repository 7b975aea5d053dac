//! HTTP error mapping.
//!
//! Every failure is returned as `{"detail": "<message>"}`. Validation errors
//! and lookup misses are the caller's problem (400); reference data faults
//! are the server's (500).

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::{ErrorCategory, GrowthError};

/// Error returned by API handlers
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] GrowthError);

impl ApiError {
    /// HTTP status code for this error
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self.0.category() {
            ErrorCategory::Validation | ErrorCategory::NoMatch => StatusCode::BAD_REQUEST,
            ErrorCategory::Data => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The underlying domain error
    #[must_use]
    pub const fn inner(&self) -> &GrowthError {
        &self.0
    }
}

/// JSON error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("Reference data fault: {}", self.0);
        } else {
            log::warn!("Rejected request: {}", self.0);
        }

        let body = ErrorResponse {
            detail: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Result type for handlers
pub type ApiResult<T> = std::result::Result<T, ApiError>;
