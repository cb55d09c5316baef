//! Request and response bodies for the JSON API.
//!
//! Each route decodes into its own typed request record; loosely-typed
//! JSON never reaches a handler.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::UserId;

/// Body of `POST /api/validate_chirp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ValidateChirpRequest {
    /// Raw chirp text.
    pub body: String,
}

/// Success body of `POST /api/validate_chirp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ValidateChirpResponse {
    /// The chirp text with forbidden words masked.
    pub cleaned_body: String,
}

/// Body of `POST /api/chirps`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CreateChirpRequest {
    /// Raw chirp text.
    pub body: String,
    /// Author of the chirp. `null` or absent posts anonymously.
    #[serde(default)]
    pub user_id: Option<UserId>,
}

/// Body of `POST /api/users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CreateUserRequest {
    /// Email address for the new user.
    pub email: String,
}

/// Error envelope. Every non-2xx JSON response has exactly this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ErrorBody {
    /// Human-readable message safe to show to the client.
    pub error: String,
}

/// Success body of `POST /admin/reset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ResetSummary {
    /// Visit counter value after the reset.
    pub hits: u64,
    /// Number of chirps removed.
    pub chirps_deleted: u64,
    /// Number of users removed.
    pub users_deleted: u64,
}
