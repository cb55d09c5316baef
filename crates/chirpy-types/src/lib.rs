//! Shared type definitions for the Chirpy message board.
//!
//! This crate is the single source of truth for the records that cross
//! the HTTP boundary and the persistence boundary. Types flow downstream
//! to `TypeScript` via `ts-rs` for the web client.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for user and chirp identifiers
//! - [`structs`] -- Persisted entities ([`User`], [`Chirp`])
//! - [`api`] -- Request and response bodies for the JSON API

pub mod api;
pub mod ids;
pub mod structs;

pub use api::{
    CreateChirpRequest, CreateUserRequest, ErrorBody, ResetSummary, ValidateChirpRequest,
    ValidateChirpResponse,
};
pub use ids::{ChirpId, UserId};
pub use structs::{Chirp, User};

#[cfg(test)]
mod tests {
    #[test]
    fn export_bindings() {
        use ts_rs::TS;

        let _ = crate::ids::UserId::export_all();
        let _ = crate::ids::ChirpId::export_all();
        let _ = crate::structs::User::export_all();
        let _ = crate::structs::Chirp::export_all();
        let _ = crate::api::ValidateChirpResponse::export_all();
        let _ = crate::api::ErrorBody::export_all();
    }
}
