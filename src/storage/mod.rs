//! Storage layer for the tool tables
//!
//! The service only reads; rows are produced by the desktop tool that owns the database.

/// Database storage module
pub mod database;

use crate::core::resources::{ResourceItem, ResourceTable};
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;

/// Read-only access to the tool tables
#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// Every row of `table`, ordered by sequence number ascending
    async fn list(&self, table: ResourceTable) -> Result<Vec<ResourceItem>>;

    /// Check that the store answers
    async fn ping(&self) -> Result<()>;
}

/// Stand-in used when the database could not be reached at startup
#[derive(Debug, Clone)]
pub struct UnavailableStore {
    reason: String,
}

impl UnavailableStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl ResourceStore for UnavailableStore {
    async fn list(&self, _table: ResourceTable) -> Result<Vec<ResourceItem>> {
        Err(AppError::StoreUnavailable(self.reason.clone()))
    }

    async fn ping(&self) -> Result<()> {
        Err(AppError::StoreUnavailable(self.reason.clone()))
    }
}
