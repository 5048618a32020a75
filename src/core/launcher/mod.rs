//! Opening resources on the host desktop
//!
//! The pipeline is split in three: the [`resolver`] turns a category tag and
//! an item into a command line, the [`executor`] runs a batch of them
//! concurrently, and [`aggregate`] summarises the outcomes.

pub mod aggregate;
pub mod executor;
pub mod resolver;
pub mod types;

pub use aggregate::aggregate;
pub use executor::{BatchExecutor, CommandRunner, ShellRunner};
pub use resolver::{HandlerKind, LaunchCommand, ResolveError, resolve, resolve_path};
pub use types::{BatchResult, INVALID_ITEM, LaunchCategory, LaunchOutcome};

use crate::config::LauncherConfig;
use crate::core::resources::ResourceItem;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

/// What a single open request asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenTarget {
    /// A command line run as given
    Command(String),
    /// A document opened by the extension policy
    Document(String),
}

/// Entry point used by the HTTP layer for every open operation
#[derive(Clone)]
pub struct Launcher {
    executor: BatchExecutor,
}

impl Launcher {
    pub fn new(runner: Arc<dyn CommandRunner>, config: LauncherConfig) -> Self {
        Self {
            executor: BatchExecutor::new(runner, config),
        }
    }

    /// Launcher backed by the platform shell
    pub fn with_shell(config: LauncherConfig) -> Self {
        Self::new(Arc::new(ShellRunner), config)
    }

    /// Launch every item and summarise the outcomes
    pub async fn open_batch(&self, category: &str, items: &[ResourceItem]) -> BatchResult {
        let batch_id = Uuid::new_v4();
        let span = info_span!("open_batch", %batch_id, category, total = items.len());

        async {
            let outcomes = self.executor.execute(category, items).await;
            let result = aggregate(outcomes);
            info!(
                success_count = result.success_count,
                error_count = result.error_count,
                "Batch open finished"
            );
            result
        }
        .instrument(span)
        .await
    }

    /// Render the command line for a single open request
    pub fn command_line(&self, target: &OpenTarget) -> String {
        match target {
            OpenTarget::Command(command) => command.clone(),
            OpenTarget::Document(path) => resolve_path(path).render(self.executor.config()),
        }
    }

    /// Run a single open request; returns the executed command line
    pub async fn open_one(&self, target: &OpenTarget) -> (String, Result<()>) {
        let command_line = self.command_line(target);
        let result = self.executor.run_command(&command_line).await;
        (command_line, result)
    }
}
