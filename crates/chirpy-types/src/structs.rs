//! Persisted entities owned by the storage layer.
//!
//! The request pipeline never mutates these after creation. It only
//! produces the sanitized chirp body and forwards caller-supplied values
//! to the store, which assigns identity and timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::{ChirpId, UserId};

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct User {
    /// Store-assigned identity.
    pub id: UserId,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
    /// Email address exactly as supplied by the caller.
    pub email: String,
}

/// A short post whose body has already been sanitized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Chirp {
    /// Store-assigned identity.
    pub id: ChirpId,
    /// When the chirp was created.
    pub created_at: DateTime<Utc>,
    /// When the chirp was last updated.
    pub updated_at: DateTime<Utc>,
    /// Sanitized body. Never the raw client text.
    pub body: String,
    /// Owning user, if the chirp was posted with one.
    pub user_id: Option<UserId>,
}
