//! HTTP error surface.
//!
//! DESIGN
//! ======
//! Every failure reaching a client is one of three categories: validation
//! (malformed request, 422), not found (404), or conflict (a roster rule
//! broken, 400). Bodies are `{"detail": ..., "code": ...}` where `detail`
//! is human-readable and `code` is a stable grepable identifier.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::services::activity::DirectoryError;

/// Grepable error code for any error surfaced to clients.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("missing query parameter: {0}")]
    MissingParameter(&'static str),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

impl ErrorCode for ApiError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingParameter(_) | Self::InvalidRequest(_) => "E_VALIDATION",
            Self::Directory(err) => err.error_code(),
        }
    }
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingParameter(_) | Self::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Directory(DirectoryError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Directory(DirectoryError::AlreadySignedUp { .. } | DirectoryError::NotSignedUp { .. }) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
    pub code: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { detail: self.to_string(), code: self.error_code() };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
