//! Error types for the persistence layer.
//!
//! All adapters report failures through [`DbError`]. Callers at the HTTP
//! boundary log the detail and return a generic message, so variants may
//! carry internal information freely.

/// Errors that can occur in the persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A `PostgreSQL` operation failed.
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sqlx::Error),

    /// A `PostgreSQL` migration failed.
    #[error("PostgreSQL migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A uniqueness or foreign-key constraint was violated.
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// A configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
