//! Queries against the `users` table.

use chirpy_types::{User, UserId};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DbError;
use crate::postgres::classify;

/// Operations on the `users` table.
pub struct UserStore<'a> {
    pool: &'a PgPool,
}

impl<'a> UserStore<'a> {
    /// Create a new user store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a user and return the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Constraint`] if the email is already taken, or
    /// [`DbError::Postgres`] for any other failure.
    pub async fn insert(&self, email: &str) -> Result<User, DbError> {
        let row = sqlx::query_as::<_, UserRow>(
            r"INSERT INTO users (id, created_at, updated_at, email)
              VALUES ($1, NOW(), NOW(), $2)
              RETURNING id, created_at, updated_at, email",
        )
        .bind(UserId::new().into_inner())
        .bind(email)
        .fetch_one(self.pool)
        .await
        .map_err(classify)?;

        tracing::debug!(user_id = %row.id, "Inserted user");

        Ok(row.into())
    }

    /// Delete every user. Chirps owned by them cascade.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the delete fails.
    pub async fn delete_all(&self) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM users").execute(self.pool).await?;
        Ok(result.rows_affected())
    }
}

/// A row from the `users` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRow {
    /// Primary key.
    pub id: Uuid,
    /// Insert timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Unique email address.
    pub email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::from(row.id),
            created_at: row.created_at,
            updated_at: row.updated_at,
            email: row.email,
        }
    }
}
