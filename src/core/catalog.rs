//! Listing, filtering and export of the tool tables

use crate::config::StoreErrorPolicy;
use crate::core::resources::{ResourceItem, ResourceTable};
use crate::storage::ResourceStore;
use crate::utils::error::Result;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, error};

/// Read access to the tool tables with the configured error policy applied
#[derive(Clone)]
pub struct Catalog {
    store: Arc<dyn ResourceStore>,
    policy: StoreErrorPolicy,
}

/// All four tables at once, as served by `/api/data`
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSnapshot {
    pub cmd_tools: Vec<ResourceItem>,
    pub prompt_tools: Vec<ResourceItem>,
    pub win_programs: Vec<ResourceItem>,
    pub websites: Vec<ResourceItem>,
}

impl Catalog {
    pub fn new(store: Arc<dyn ResourceStore>, policy: StoreErrorPolicy) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> StoreErrorPolicy {
        self.policy
    }

    /// Rows of `table` ordered by sequence number
    pub async fn list(&self, table: ResourceTable) -> Result<Vec<ResourceItem>> {
        match self.store.list(table).await {
            Ok(items) => {
                debug!(table = %table, count = items.len(), "Listed table");
                Ok(items)
            }
            Err(e) => {
                error!(table = %table, error = %e, "Failed to list table");
                match self.policy {
                    StoreErrorPolicy::Degrade => Ok(Vec::new()),
                    StoreErrorPolicy::Propagate => Err(e),
                }
            }
        }
    }

    /// Fetch the four tables concurrently
    pub async fn snapshot(&self) -> Result<CatalogSnapshot> {
        let (cmd_tools, prompt_tools, win_programs, websites) = futures::try_join!(
            self.list(ResourceTable::CmdTools),
            self.list(ResourceTable::PromptTools),
            self.list(ResourceTable::WinPrograms),
            self.list(ResourceTable::Websites),
        )?;

        Ok(CatalogSnapshot {
            cmd_tools,
            prompt_tools,
            win_programs,
            websites,
        })
    }

    /// Whether the data store answers
    pub async fn is_reachable(&self) -> bool {
        match self.store.ping().await {
            Ok(()) => true,
            Err(e) => {
                debug!(error = %e, "Data store ping failed");
                false
            }
        }
    }
}

/// Restriction applied to a listed table
#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    ids: Option<HashSet<i64>>,
    needle: Option<String>,
}

impl ItemFilter {
    /// Keep only items whose sequence number is listed; an empty list keeps everything
    pub fn with_ids(mut self, ids: &[i64]) -> Self {
        self.ids = (!ids.is_empty()).then(|| ids.iter().copied().collect());
        self
    }

    /// Keep only items with a field containing `text`, ignoring case
    pub fn with_text(mut self, text: &str) -> Self {
        let text = text.trim();
        self.needle = (!text.is_empty()).then(|| text.to_lowercase());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_none() && self.needle.is_none()
    }

    pub fn accepts(&self, item: &ResourceItem) -> bool {
        let id_ok = match &self.ids {
            Some(ids) => item.seq_no().is_some_and(|seq| ids.contains(&seq)),
            None => true,
        };
        id_ok && self.needle.as_deref().is_none_or(|needle| item.matches(needle))
    }

    pub fn apply(&self, items: Vec<ResourceItem>) -> Vec<ResourceItem> {
        if self.is_empty() {
            return items;
        }
        items.into_iter().filter(|item| self.accepts(item)).collect()
    }
}

/// 1-based page window over a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: u32,
    pub limit: u32,
}

impl Page {
    pub const MAX_LIMIT: u32 = 1000;

    /// Build a page, rejecting zero page numbers and out-of-range limits
    pub fn new(page: u32, limit: u32) -> std::result::Result<Self, String> {
        if page == 0 {
            return Err("Page must be greater than 0".to_string());
        }
        if limit == 0 {
            return Err("Limit must be greater than 0".to_string());
        }
        if limit > Self::MAX_LIMIT {
            return Err(format!("Limit cannot exceed {}", Self::MAX_LIMIT));
        }
        Ok(Self { page, limit })
    }

    pub fn offset(&self) -> usize {
        (self.page as usize - 1) * self.limit as usize
    }

    pub fn slice(&self, items: Vec<ResourceItem>) -> Vec<ResourceItem> {
        items
            .into_iter()
            .skip(self.offset())
            .take(self.limit as usize)
            .collect()
    }
}

/// Downloadable copy of a (possibly filtered) table
#[derive(Debug, Clone, Serialize)]
pub struct ExportDocument {
    pub export_time: String,
    pub table_name: String,
    pub total_records: usize,
    pub filtered_records: usize,
    pub data: Vec<ResourceItem>,
}

impl ExportDocument {
    pub fn new(table: ResourceTable, total_records: usize, data: Vec<ResourceItem>) -> Self {
        Self {
            export_time: chrono::Utc::now().to_rfc3339(),
            table_name: table.table_name().to_string(),
            total_records,
            filtered_records: data.len(),
            data,
        }
    }
}
