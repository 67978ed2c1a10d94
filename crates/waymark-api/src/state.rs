//! Shared application state.

use std::sync::Arc;

use crate::routes::adventure::AdventureHandler;

/// Application state shared across all request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The chapter handler, immutable for the life of the process.
    pub adventure: Arc<AdventureHandler>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(adventure: AdventureHandler) -> Self {
        Self {
            adventure: Arc::new(adventure),
        }
    }
}
