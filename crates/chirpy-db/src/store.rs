//! The storage port consumed by the request pipeline.

use async_trait::async_trait;
use chirpy_types::{Chirp, ChirpId, User, UserId};

use crate::error::DbError;

/// Create, read, and clear operations on users and chirps.
///
/// Implementations assign identity and timestamps. Handlers hold this as
/// `Arc<dyn ChirpyStore>` so tests can substitute an in-memory or failing
/// adapter.
#[async_trait]
pub trait ChirpyStore: Send + Sync {
    /// Insert a user with the given email.
    async fn create_user(&self, email: &str) -> Result<User, DbError>;

    /// Insert a chirp whose body has already been sanitized.
    async fn create_chirp(&self, body: &str, user_id: Option<UserId>) -> Result<Chirp, DbError>;

    /// All chirps, oldest first.
    async fn list_chirps(&self) -> Result<Vec<Chirp>, DbError>;

    /// A single chirp, or `None` if no chirp has that ID.
    async fn get_chirp(&self, id: ChirpId) -> Result<Option<Chirp>, DbError>;

    /// Delete every chirp. Returns the number removed.
    async fn clear_chirps(&self) -> Result<u64, DbError>;

    /// Delete every user. Returns the number removed.
    async fn clear_users(&self) -> Result<u64, DbError>;

    /// Delete every chirp and every user as one unit.
    ///
    /// Either both tables are emptied or, on error, neither changes.
    async fn clear_all(&self) -> Result<Cleared, DbError>;
}

/// Row counts removed by [`ChirpyStore::clear_all`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cleared {
    /// Chirps deleted.
    pub chirps: u64,
    /// Users deleted.
    pub users: u64,
}
