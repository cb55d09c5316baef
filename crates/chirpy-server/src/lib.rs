//! HTTP request pipeline for the Chirpy message board.
//!
//! This crate provides an Axum server that exposes:
//!
//! - **Static assets** under `/app/`, counted by the visit middleware
//! - **JSON API** under `/api/` for users and chirps
//! - **Admin endpoints** under `/admin/` for the visit metrics page and
//!   the development-only reset
//!
//! # Architecture
//!
//! Every request runs as its own task. The only state shared between
//! them is the [`VisitCounter`](chirpy_core::VisitCounter), which is
//! atomic, and the storage port, which owns its own concurrency control.
//! Handlers decode into typed records, validate, optionally persist, and
//! answer through the helpers in [`response`] so the JSON envelope stays
//! uniform.

pub mod admin;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
