//! HTTP route modules
//!
//! This module contains all HTTP route handlers organized by functionality.

pub mod health;
pub mod opendoc;
pub mod resources;

use crate::core::catalog::Page;
use crate::utils::error::{AppError, Result};
use serde::Deserialize;

/// Header carrying the item count before pagination
pub const TOTAL_COUNT_HEADER: &str = "X-Total-Count";

/// Page size used when only `page` is given
pub const DEFAULT_PAGE_LIMIT: u32 = 20;

/// Query accepted by the listing and export routes
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    /// Case-insensitive substring over every field
    pub filter: Option<String>,
    /// 1-based page number
    pub page: Option<u32>,
    /// Items per page
    pub limit: Option<u32>,
}

impl ListQuery {
    pub fn filter(&self) -> &str {
        self.filter.as_deref().unwrap_or("")
    }

    /// Requested page window; `None` when the query asks for no paging
    pub fn page(&self) -> Result<Option<Page>> {
        if self.page.is_none() && self.limit.is_none() {
            return Ok(None);
        }
        Page::new(
            self.page.unwrap_or(1),
            self.limit.unwrap_or(DEFAULT_PAGE_LIMIT),
        )
        .map(Some)
        .map_err(AppError::validation)
    }
}
