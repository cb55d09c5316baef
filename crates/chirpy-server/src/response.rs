//! Uniform JSON response construction.
//!
//! Every API handler answers through exactly one of [`write_success`] or
//! [`write_error`], so status and body are always set together. The
//! health check and metrics page are the only routes that answer with
//! something other than JSON.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chirpy_types::ErrorBody;
use serde::Serialize;

/// Serialize `payload` as JSON with the given status.
pub fn write_success<T: Serialize>(status: StatusCode, payload: &T) -> Response {
    (status, Json(payload)).into_response()
}

/// Serialize `{"error": message}` with the given status.
pub fn write_error(status: StatusCode, message: impl Into<String>) -> Response {
    let body = ErrorBody {
        error: message.into(),
    };
    (status, Json(body)).into_response()
}
