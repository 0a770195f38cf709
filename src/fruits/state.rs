//! Application State
//!
//! The state handed to every route: the single fruit store plus the
//! configuration the router was built from.

use super::store::FruitStore;
use crate::config::AppConfig;
use std::sync::Arc;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state; exactly one exists per running server
#[derive(Debug)]
pub struct AppState {
    /// The process-wide fruit collection
    pub fruits: FruitStore,

    /// Settings used to build the router (CORS origins, bind address)
    pub config: AppConfig,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl AppState {
    /// Creates state with an empty fruit store
    pub fn new(config: AppConfig) -> Self {
        Self {
            fruits: FruitStore::new(),
            config,
        }
    }

    pub fn shared(config: AppConfig) -> SharedState {
        Arc::new(Self::new(config))
    }
}
