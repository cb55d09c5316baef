//! JSON API endpoint handlers.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/healthz` | Plain-text liveness probe |
//! | `POST` | `/api/validate_chirp` | Validate and sanitize without storing |
//! | `POST` | `/api/chirps` | Validate, sanitize, and store a chirp |
//! | `GET` | `/api/chirps` | List all chirps, oldest first |
//! | `GET` | `/api/chirps/{chirp_id}` | Single chirp |
//! | `POST` | `/api/users` | Create a user |

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use chirpy_types::{
    ChirpId, CreateChirpRequest, CreateUserRequest, ValidateChirpRequest, ValidateChirpResponse,
};

use crate::error::ApiError;
use crate::response::write_success;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /api/healthz
// ---------------------------------------------------------------------------

/// Liveness probe. Always `200 OK` with a plain-text body.
pub async fn healthz() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "OK",
    )
}

// ---------------------------------------------------------------------------
// POST /api/validate_chirp
// ---------------------------------------------------------------------------

/// Check a chirp against the length limit and return its sanitized form.
pub async fn validate_chirp(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ValidateChirpRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;
    let cleaned = state.validator.validate(&request.body)?;

    Ok(write_success(
        StatusCode::OK,
        &ValidateChirpResponse {
            cleaned_body: cleaned.into_string(),
        },
    ))
}

// ---------------------------------------------------------------------------
// POST /api/chirps
// ---------------------------------------------------------------------------

/// Validate a chirp, store the sanitized body, and return the stored record.
pub async fn create_chirp(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateChirpRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;
    let cleaned = state.validator.validate(&request.body)?;

    let chirp = state
        .store
        .create_chirp(cleaned.as_str(), request.user_id)
        .await?;

    tracing::info!(chirp_id = %chirp.id, "chirp created");

    Ok(write_success(StatusCode::CREATED, &chirp))
}

// ---------------------------------------------------------------------------
// GET /api/chirps
// ---------------------------------------------------------------------------

/// List every stored chirp, oldest first.
pub async fn list_chirps(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let chirps = state.store.list_chirps().await?;
    Ok(write_success(StatusCode::OK, &chirps))
}

// ---------------------------------------------------------------------------
// GET /api/chirps/{chirp_id}
// ---------------------------------------------------------------------------

/// Return one chirp by ID.
pub async fn get_chirp(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<Response, ApiError> {
    let id: ChirpId = id_str
        .parse()
        .map_err(|e| ApiError::InvalidId(format!("{id_str}: {e}")))?;

    let chirp = state
        .store
        .get_chirp(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(String::from("chirp not found")))?;

    Ok(write_success(StatusCode::OK, &chirp))
}

// ---------------------------------------------------------------------------
// POST /api/users
// ---------------------------------------------------------------------------

/// Create a user from the supplied email.
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;
    let user = state.store.create_user(&request.email).await?;

    tracing::info!(user_id = %user.id, "user created");

    Ok(write_success(StatusCode::CREATED, &user))
}
