//! Test database utilities
//!
//! Provides in-memory SQLite database for testing without external dependencies.
//! Each test gets an isolated database instance using SeaORM.

use super::fixtures;
use cmdtools_rs::config::DatabaseConfig;
use cmdtools_rs::storage::ResourceStore;
use cmdtools_rs::storage::database::Database;
use sea_orm::{ActiveModelTrait, DatabaseConnection};
use std::sync::Arc;

/// Test database wrapper providing isolated in-memory SQLite instances
#[derive(Debug, Clone)]
pub struct TestDatabase {
    inner: Arc<Database>,
}

impl TestDatabase {
    /// Create a new in-memory test database with empty tool tables
    pub async fn new() -> Self {
        let db = Database::new(&test_db_config())
            .await
            .expect("Failed to create in-memory test database");

        db.migrate()
            .await
            .expect("Failed to run database migrations");

        Self {
            inner: Arc::new(db),
        }
    }

    /// Create a test database with the fixture rows
    pub async fn seeded() -> Self {
        let db = Self::new().await;
        db.seed_test_data().await;
        db
    }

    /// Get reference to the underlying database
    pub fn db(&self) -> &Database {
        &self.inner
    }

    /// The database as a store for the catalog
    pub fn store(&self) -> Arc<dyn ResourceStore> {
        self.inner.clone()
    }

    fn conn(&self) -> &DatabaseConnection {
        self.inner.connection()
    }

    async fn seed_test_data(&self) {
        for model in fixtures::cmd_tools() {
            model.insert(self.conn()).await.expect("seed CmdTools");
        }
        for model in fixtures::prompt_tools() {
            model.insert(self.conn()).await.expect("seed PromptTools");
        }
        for model in fixtures::win_programs() {
            model.insert(self.conn()).await.expect("seed WinProgram");
        }
        for model in fixtures::web_sites() {
            model.insert(self.conn()).await.expect("seed WebSite");
        }
    }
}

/// Helper to create a simple test database config
pub fn test_db_config() -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1, // In-memory DB only supports 1 connection
        connection_timeout: 5,
        ..DatabaseConfig::default()
    }
}
