//! In-process [`ChirpyStore`] adapter.
//!
//! Enforces the same constraints as the `PostgreSQL` schema: unique
//! emails, chirp authors must exist, and deleting users cascades to
//! their chirps. Backed by a [`tokio::sync::RwLock`] so it can be shared
//! across request tasks.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chirpy_types::{Chirp, ChirpId, User, UserId};
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::DbError;
use crate::store::{ChirpyStore, Cleared};

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<UserId, User>,
    // Insertion order is creation order.
    chirps: Vec<Chirp>,
}

/// Volatile store holding users and chirps in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users currently stored.
    pub async fn user_count(&self) -> usize {
        self.tables.read().await.users.len()
    }

    /// Number of chirps currently stored.
    pub async fn chirp_count(&self) -> usize {
        self.tables.read().await.chirps.len()
    }
}

#[async_trait]
impl ChirpyStore for MemoryStore {
    async fn create_user(&self, email: &str) -> Result<User, DbError> {
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|u| u.email == email) {
            return Err(DbError::Constraint(format!(
                "duplicate key value violates unique constraint \"users_email_key\": {email}"
            )));
        }

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            created_at: now,
            updated_at: now,
            email: email.to_owned(),
        };
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn create_chirp(&self, body: &str, user_id: Option<UserId>) -> Result<Chirp, DbError> {
        let mut tables = self.tables.write().await;
        if let Some(owner) = user_id
            && !tables.users.contains_key(&owner)
        {
            return Err(DbError::Constraint(format!(
                "chirps.user_id references unknown user {owner}"
            )));
        }

        let now = Utc::now();
        let chirp = Chirp {
            id: ChirpId::new(),
            created_at: now,
            updated_at: now,
            body: body.to_owned(),
            user_id,
        };
        tables.chirps.push(chirp.clone());
        Ok(chirp)
    }

    async fn list_chirps(&self) -> Result<Vec<Chirp>, DbError> {
        Ok(self.tables.read().await.chirps.clone())
    }

    async fn get_chirp(&self, id: ChirpId) -> Result<Option<Chirp>, DbError> {
        Ok(self
            .tables
            .read()
            .await
            .chirps
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn clear_chirps(&self) -> Result<u64, DbError> {
        let mut tables = self.tables.write().await;
        let removed = std::mem::take(&mut tables.chirps).len();
        Ok(u64::try_from(removed).unwrap_or(u64::MAX))
    }

    async fn clear_users(&self) -> Result<u64, DbError> {
        let mut tables = self.tables.write().await;
        let removed = std::mem::take(&mut tables.users).len();
        tables.chirps.retain(|chirp| chirp.user_id.is_none());
        Ok(u64::try_from(removed).unwrap_or(u64::MAX))
    }

    async fn clear_all(&self) -> Result<Cleared, DbError> {
        let mut tables = self.tables.write().await;
        let chirps = std::mem::take(&mut tables.chirps).len();
        let users = std::mem::take(&mut tables.users).len();
        Ok(Cleared {
            chirps: u64::try_from(chirps).unwrap_or(u64::MAX),
            users: u64::try_from(users).unwrap_or(u64::MAX),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_and_list_in_order() {
        let store = MemoryStore::new();
        let user = store.create_user("a@example.com").await.unwrap();
        let first = store.create_chirp("one", Some(user.id)).await.unwrap();
        let second = store.create_chirp("two", None).await.unwrap();

        let all = store.list_chirps().await.unwrap();
        assert_eq!(all, vec![first.clone(), second]);
        assert_eq!(store.get_chirp(first.id).await.unwrap(), Some(first));
        assert_eq!(store.get_chirp(ChirpId::new()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn duplicate_email_is_a_constraint_error() {
        let store = MemoryStore::new();
        store.create_user("dup@example.com").await.unwrap();
        let err = store.create_user("dup@example.com").await.unwrap_err();
        assert!(matches!(err, DbError::Constraint(_)));
        assert_eq!(store.user_count().await, 1);
    }

    #[tokio::test]
    async fn unknown_author_is_a_constraint_error() {
        let store = MemoryStore::new();
        let err = store
            .create_chirp("hello", Some(UserId::new()))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::Constraint(_)));
        assert_eq!(store.chirp_count().await, 0);
    }

    #[tokio::test]
    async fn clearing_users_cascades_to_their_chirps() {
        let store = MemoryStore::new();
        let user = store.create_user("a@example.com").await.unwrap();
        store.create_chirp("owned", Some(user.id)).await.unwrap();
        store.create_chirp("anonymous", None).await.unwrap();

        assert_eq!(store.clear_users().await.unwrap(), 1);
        let left = store.list_chirps().await.unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].body, "anonymous");

        assert_eq!(store.clear_chirps().await.unwrap(), 1);
        assert_eq!(store.chirp_count().await, 0);
    }

    #[tokio::test]
    async fn clear_all_empties_both_tables() {
        let store = MemoryStore::new();
        let user = store.create_user("a@example.com").await.unwrap();
        store.create_chirp("owned", Some(user.id)).await.unwrap();
        store.create_chirp("anonymous", None).await.unwrap();

        let cleared = store.clear_all().await.unwrap();
        assert_eq!(cleared, Cleared { chirps: 2, users: 1 });
        assert_eq!(store.user_count().await, 0);
        assert_eq!(store.chirp_count().await, 0);
    }
}
