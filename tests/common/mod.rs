//! Common test utilities for cmdtools-rs
//!
//! This module provides shared test infrastructure for all tests:
//! - In-memory SQLite database support
//! - Seed fixtures
//! - Fake command runner and store
//! - Custom assertions and helpers

pub mod database;
pub mod fixtures;

// Re-export commonly used items
pub use database::TestDatabase;
pub use runner::{FailingStore, RecordingRunner};

use actix_web::web;
use cmdtools_rs::config::{Config, LauncherConfig, StoreErrorPolicy};
use cmdtools_rs::storage::ResourceStore;
use cmdtools_rs::{AppState, Catalog, Launcher};
use std::sync::Arc;

/// Handler commands used by every test launcher
pub const TEST_DEFAULT_HANDLER: &str = "open-default";
pub const TEST_TEXT_EDITOR: &str = "open-text";

/// Launcher configuration with recognisable handler commands
pub fn test_launcher_config() -> LauncherConfig {
    LauncherConfig {
        default_handler: TEST_DEFAULT_HANDLER.to_string(),
        text_editor: TEST_TEXT_EDITOR.to_string(),
        max_concurrent_launches: None,
    }
}

/// Application state over `store`, launching through `runner`
pub fn app_state(
    store: Arc<dyn ResourceStore>,
    policy: StoreErrorPolicy,
    runner: Arc<RecordingRunner>,
) -> web::Data<AppState> {
    let catalog = Catalog::new(store, policy);
    let launcher = Launcher::new(runner, test_launcher_config());
    web::Data::new(AppState::new(Config::default(), catalog, launcher))
}

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
