//! Error types for the Chirpy binary.
//!
//! [`StartupError`] wraps every failure that aborts process start. None
//! of them are retried.

/// Fatal error during startup or while serving.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: chirpy_core::ConfigError,
    },

    /// The database could not be reached or migrated.
    #[error("database error: {source}")]
    Database {
        /// The underlying database error.
        #[from]
        source: chirpy_db::DbError,
    },

    /// The HTTP server failed to bind or crashed.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: chirpy_server::ServerError,
    },
}
