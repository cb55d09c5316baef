//! Visit-counting middleware for the static asset routes.
//!
//! Increments the shared [`VisitCounter`](chirpy_core::VisitCounter) and
//! then hands the request on untouched. The count is recorded before the
//! inner service runs, so missing files and errors still count.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::state::AppState;

/// Record a visit, then run the wrapped service.
pub async fn count_visits(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    state.hits.increment();
    next.run(request).await
}
