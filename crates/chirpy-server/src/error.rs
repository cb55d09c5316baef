//! Error types for the Chirpy API layer.
//!
//! [`ApiError`] covers every failure a handler can hit and converts into
//! an HTTP response via its [`IntoResponse`] implementation. Errors never
//! propagate past the request boundary.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chirpy_core::ValidationError;
use chirpy_db::DbError;

use crate::response::write_error;

/// Message sent to clients in place of any storage failure detail.
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong";

/// Errors that can occur in the Chirpy API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body was missing or was not the expected JSON.
    #[error("{0}")]
    Decode(String),

    /// The chirp failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The storage layer failed.
    #[error("persistence error: {0}")]
    Persistence(#[from] DbError),

    /// The operation is not permitted on this platform.
    #[error("{0}")]
    Forbidden(String),

    /// The requested resource does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A path parameter was not a valid UUID.
    #[error("invalid id: {0}")]
    InvalidId(String),
}

impl ApiError {
    /// HTTP status this error maps to.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Decode(_) | Self::Validation(_) | Self::InvalidId(_) => StatusCode::BAD_REQUEST,
            Self::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Decode(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::Persistence(e) => {
                tracing::error!(error = %e, "storage operation failed");
                INTERNAL_ERROR_MESSAGE.to_owned()
            }
            other => other.to_string(),
        };
        write_error(status, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(
            ApiError::Decode(String::from("bad json")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Validation(ValidationError::TooLong {
                length: 141,
                max: 140
            })
            .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Persistence(DbError::Config(String::from("x"))).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Forbidden(String::from("no")).status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::NotFound(String::from("gone")).status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn validation_message_is_exact() {
        let err = ApiError::from(ValidationError::TooLong {
            length: 200,
            max: 140,
        });
        assert_eq!(err.to_string(), "chirp too long");
    }
}
