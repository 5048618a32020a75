//! Request-scoped values of the launch pipeline

use crate::core::resources::{ResourceItem, ResourceTable};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Message recorded for items that resolve to no command
pub const INVALID_ITEM: &str = "invalid item";

/// How the launch target of an item is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchCategory {
    Websites,
    Programs,
    Files,
}

impl LaunchCategory {
    /// Item fields consulted for the launch target, in priority order
    pub fn target_fields(&self) -> &'static [&'static str] {
        match self {
            Self::Websites => &["Website", "url", "URL"],
            Self::Programs => &["ProgramPathAndName", "path"],
            Self::Files => &["filePath", "FilePath", "path"],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Websites => "websites",
            Self::Programs => "programs",
            Self::Files => "files",
        }
    }

    /// Category used when launching rows of a store table, if the table is launchable
    pub fn for_table(table: ResourceTable) -> Option<Self> {
        match table {
            ResourceTable::Websites => Some(Self::Websites),
            ResourceTable::WinPrograms => Some(Self::Programs),
            ResourceTable::CmdTools | ResourceTable::PromptTools => None,
        }
    }
}

impl fmt::Display for LaunchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LaunchCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "websites" => Ok(Self::Websites),
            "programs" => Ok(Self::Programs),
            "files" => Ok(Self::Files),
            other => Err(format!("unsupported category: {}", other)),
        }
    }
}

/// Per-item result of attempting a launch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchOutcome {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    item: ResourceItem,
}

impl LaunchOutcome {
    pub fn success(item: ResourceItem, command: impl Into<String>) -> Self {
        Self {
            success: true,
            command: Some(command.into()),
            error: None,
            item,
        }
    }

    pub fn failure(item: ResourceItem, error: impl Into<String>) -> Self {
        Self {
            success: false,
            command: None,
            error: Some(error.into()),
            item,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Executed command line, present on success
    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    /// Failure message, present on failure
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The item this outcome was produced for
    pub fn item(&self) -> &ResourceItem {
        &self.item
    }
}

/// Aggregated outcome of a batch open
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    /// True when at least one item launched
    pub success: bool,
    pub total: usize,
    pub success_count: usize,
    pub error_count: usize,
    pub results: Vec<LaunchOutcome>,
}
