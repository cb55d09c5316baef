//! Queries against the `chirps` table.

use chirpy_types::{Chirp, ChirpId, UserId};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DbError;
use crate::postgres::classify;

/// Operations on the `chirps` table.
pub struct ChirpStore<'a> {
    pool: &'a PgPool,
}

impl<'a> ChirpStore<'a> {
    /// Create a new chirp store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a chirp and return the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Constraint`] if `user_id` names no user, or
    /// [`DbError::Postgres`] for any other failure.
    pub async fn insert(&self, body: &str, user_id: Option<UserId>) -> Result<Chirp, DbError> {
        let row = sqlx::query_as::<_, ChirpRow>(
            r"INSERT INTO chirps (id, created_at, updated_at, body, user_id)
              VALUES ($1, NOW(), NOW(), $2, $3)
              RETURNING id, created_at, updated_at, body, user_id",
        )
        .bind(ChirpId::new().into_inner())
        .bind(body)
        .bind(user_id.map(UserId::into_inner))
        .fetch_one(self.pool)
        .await
        .map_err(classify)?;

        tracing::debug!(chirp_id = %row.id, "Inserted chirp");

        Ok(row.into())
    }

    /// All chirps, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn list(&self) -> Result<Vec<Chirp>, DbError> {
        let rows = sqlx::query_as::<_, ChirpRow>(
            r"SELECT id, created_at, updated_at, body, user_id
              FROM chirps
              ORDER BY created_at ASC, id ASC",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Chirp::from).collect())
    }

    /// Look up one chirp by ID.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn get(&self, id: ChirpId) -> Result<Option<Chirp>, DbError> {
        let row = sqlx::query_as::<_, ChirpRow>(
            r"SELECT id, created_at, updated_at, body, user_id
              FROM chirps
              WHERE id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Chirp::from))
    }

    /// Delete every chirp.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the delete fails.
    pub async fn delete_all(&self) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM chirps").execute(self.pool).await?;
        Ok(result.rows_affected())
    }
}

/// A row from the `chirps` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ChirpRow {
    /// Primary key.
    pub id: Uuid,
    /// Insert timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Sanitized chirp text.
    pub body: String,
    /// Owning user, nullable.
    pub user_id: Option<Uuid>,
}

impl From<ChirpRow> for Chirp {
    fn from(row: ChirpRow) -> Self {
        Self {
            id: ChirpId::from(row.id),
            created_at: row.created_at,
            updated_at: row.updated_at,
            body: row.body,
            user_id: row.user_id.map(UserId::from),
        }
    }
}
