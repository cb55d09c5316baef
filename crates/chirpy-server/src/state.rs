//! Shared application state for the Chirpy server.
//!
//! [`AppState`] is built once at startup and injected into every handler
//! through Axum's `State` extractor. Nothing in it is ambient global
//! state, which keeps handlers testable against substitute stores.

use std::path::PathBuf;
use std::sync::Arc;

use chirpy_core::{ContentValidator, PlatformMode, VisitCounter};
use chirpy_db::ChirpyStore;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] by the router. The counter and validator are
/// themselves `Arc`s so a caller can keep a handle for inspection.
#[derive(Clone)]
pub struct AppState {
    /// Visit tally for `/app/` requests.
    pub hits: Arc<VisitCounter>,
    /// Chirp length check and forbidden-word masking.
    pub validator: Arc<ContentValidator>,
    /// Storage port for users and chirps.
    pub store: Arc<dyn ChirpyStore>,
    /// Whether destructive admin operations are allowed.
    pub platform: PlatformMode,
    /// Directory served under `/app/`.
    pub filepath_root: PathBuf,
}

impl AppState {
    /// Create state with a fresh counter, the default validator, and
    /// static files served from the working directory.
    pub fn new(store: Arc<dyn ChirpyStore>, platform: PlatformMode) -> Self {
        Self {
            hits: Arc::new(VisitCounter::new()),
            validator: Arc::new(ContentValidator::new()),
            store,
            platform,
            filepath_root: PathBuf::from("."),
        }
    }

    /// Replace the validator, e.g. with a custom forbidden-word list.
    #[must_use]
    pub fn with_validator(mut self, validator: ContentValidator) -> Self {
        self.validator = Arc::new(validator);
        self
    }

    /// Serve static files from `root` instead of the working directory.
    #[must_use]
    pub fn with_filepath_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.filepath_root = root.into();
        self
    }
}
