//! Axum router construction for the Chirpy server.

use std::sync::Arc;

use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::admin;
use crate::handlers;
use crate::middleware::count_visits;
use crate::state::AppState;

/// Build the complete Axum router for the Chirpy server.
///
/// The router includes:
/// - `GET /app/*` -- static files, counted by [`count_visits`]
/// - `GET /api/healthz` -- liveness probe (not counted)
/// - `POST /api/validate_chirp` -- validate without storing
/// - `POST /api/chirps`, `GET /api/chirps` -- create and list chirps
/// - `GET /api/chirps/{chirp_id}` -- single chirp
/// - `POST /api/users` -- create a user
/// - `GET /admin/metrics` -- visit count page
/// - `POST /admin/reset` -- dev-only reset
///
/// Only the static routes pass through the visit counter.
pub fn build_router(state: Arc<AppState>) -> Router {
    let static_files: Router<Arc<AppState>> = Router::new()
        .nest_service("/app", ServeDir::new(&state.filepath_root))
        .layer(from_fn_with_state(Arc::clone(&state), count_visits));

    Router::new()
        // API
        .route("/api/healthz", get(handlers::healthz))
        .route("/api/validate_chirp", post(handlers::validate_chirp))
        .route(
            "/api/chirps",
            post(handlers::create_chirp).get(handlers::list_chirps),
        )
        .route("/api/chirps/{chirp_id}", get(handlers::get_chirp))
        .route("/api/users", post(handlers::create_user))
        // Admin
        .route("/admin/metrics", get(admin::metrics))
        .route("/admin/reset", post(admin::reset))
        .merge(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
