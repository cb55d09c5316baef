//! Request-independent building blocks for the Chirpy message board.
//!
//! Nothing in this crate performs I/O. The server crate composes these
//! pieces into the request pipeline.
//!
//! # Modules
//!
//! - [`counter`] -- Process-wide visit counter backed by an atomic.
//! - [`validator`] -- Chirp length check and forbidden-word masking.
//! - [`config`] -- Startup configuration loaded from file and environment.

pub mod config;
pub mod counter;
pub mod validator;

pub use self::config::{ChirpyConfig, ConfigError, PlatformMode};
pub use counter::VisitCounter;
pub use validator::{ContentValidator, SanitizedContent, ValidationError};
