//! Admin handlers for visit metrics and the development reset.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/admin/metrics` | HTML page showing the visit count |
//! | `POST` | `/admin/reset` | Zero the counter and wipe users and chirps (dev only) |

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use chirpy_types::ResetSummary;

use crate::error::ApiError;
use crate::response::write_success;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /admin/metrics
// ---------------------------------------------------------------------------

/// Render the current visit count into the admin page.
pub async fn metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let hits = state.hits.load();

    (
        StatusCode::OK,
        Html(format!(
            r"<html>
  <body>
    <h1>Welcome, Chirpy Admin</h1>
    <p>Chirpy has been visited {hits} times!</p>
  </body>
</html>
"
        )),
    )
}

// ---------------------------------------------------------------------------
// POST /admin/reset
// ---------------------------------------------------------------------------

/// Zero the visit counter and delete all chirps and users.
///
/// Refused with `403` and no side effects unless the platform is `dev`.
/// Both tables are cleared as one unit before the counter is touched, so
/// a storage failure leaves the counter and all data as they were.
pub async fn reset(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    if !state.platform.allows_reset() {
        tracing::warn!(platform = ?state.platform, "reset refused outside dev platform");
        return Err(ApiError::Forbidden(String::from(
            "reset is only allowed in dev platform",
        )));
    }

    let cleared = state.store.clear_all().await?;
    state.hits.reset();

    tracing::info!(
        chirps_deleted = cleared.chirps,
        users_deleted = cleared.users,
        "state reset"
    );

    Ok(write_success(
        StatusCode::OK,
        &ResetSummary {
            hits: 0,
            chirps_deleted: cleared.chirps,
            users_deleted: cleared.users,
        },
    ))
}
