//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::{Catalog, Launcher};
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Everything in here is cheap to clone; handlers receive it through `web::Data`.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Read access to the tool tables
    pub catalog: Catalog,
    /// OS launch pipeline
    pub launcher: Launcher,
}

impl AppState {
    pub fn new(config: Config, catalog: Catalog, launcher: Launcher) -> Self {
        Self {
            config: Arc::new(config),
            catalog,
            launcher,
        }
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
