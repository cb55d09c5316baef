//! Persistence layer for the Chirpy message board.
//!
//! The request pipeline talks to storage only through the [`ChirpyStore`]
//! port. Two adapters implement it:
//!
//! ```text
//! ChirpyStore (async trait)
//!     |
//!     +-- PostgresPool  (production, sqlx)
//!     |     |-- UserStore   (users table)
//!     |     +-- ChirpStore  (chirps table)
//!     |
//!     +-- MemoryStore   (tests and local experiments)
//! ```
//!
//! # Modules
//!
//! - [`store`] -- The [`ChirpyStore`] port
//! - [`postgres`] -- `PostgreSQL` connection pool, configuration, migrations
//! - [`user_store`] -- User queries
//! - [`chirp_store`] -- Chirp queries
//! - [`memory`] -- In-process adapter with the same constraints as the schema
//! - [`error`] -- Shared error types

pub mod chirp_store;
pub mod error;
pub mod memory;
pub mod postgres;
pub mod store;
pub mod user_store;

pub use chirp_store::{ChirpRow, ChirpStore};
pub use error::DbError;
pub use memory::MemoryStore;
pub use postgres::{PostgresConfig, PostgresPool};
pub use store::{ChirpyStore, Cleared};
pub use user_store::{UserRow, UserStore};
