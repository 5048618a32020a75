//! Concurrent execution of resolved launch commands

use super::resolver::resolve;
use super::types::{INVALID_ITEM, LaunchOutcome};
use crate::config::LauncherConfig;
use crate::core::resources::ResourceItem;
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;
use futures::StreamExt;
use futures::stream::FuturesUnordered;
use std::process::Stdio;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

/// OS-level execution of a command line
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `command_line` to completion; errors carry the failure text
    async fn run(&self, command_line: &str) -> Result<()>;
}

/// Runs command lines through the platform shell
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellRunner;

impl ShellRunner {
    #[cfg(windows)]
    fn command(command_line: &str) -> tokio::process::Command {
        let mut command = tokio::process::Command::new("cmd");
        command.arg("/C").raw_arg(command_line);
        command
    }

    #[cfg(not(windows))]
    fn command(command_line: &str) -> tokio::process::Command {
        let mut command = tokio::process::Command::new("sh");
        command.arg("-c").arg(command_line);
        command
    }
}

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run(&self, command_line: &str) -> Result<()> {
        let output = Self::command(command_line)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| AppError::launch(format!("Failed to start '{}': {}", command_line, e)))?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if stderr.is_empty() {
            Err(AppError::launch(format!(
                "Command '{}' exited with {}",
                command_line, output.status
            )))
        } else {
            Err(AppError::launch(stderr))
        }
    }
}

/// Fans a batch of items out to the runner and collects one outcome per item
#[derive(Clone)]
pub struct BatchExecutor {
    runner: Arc<dyn CommandRunner>,
    config: LauncherConfig,
}

impl BatchExecutor {
    pub fn new(runner: Arc<dyn CommandRunner>, config: LauncherConfig) -> Self {
        Self { runner, config }
    }

    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }

    /// Launch every item concurrently and wait for all of them.
    ///
    /// Outcomes are returned in completion order, one per input item. The
    /// configured concurrency limit applies to this batch only.
    pub async fn execute(&self, category: &str, items: &[ResourceItem]) -> Vec<LaunchOutcome> {
        let limiter = self.config.max_concurrent_launches.map(Semaphore::new);

        let mut pending: FuturesUnordered<_> = items
            .iter()
            .map(|item| self.launch_item(category, item, limiter.as_ref()))
            .collect();

        let mut outcomes = Vec::with_capacity(items.len());
        while let Some(outcome) = pending.next().await {
            outcomes.push(outcome);
        }
        outcomes
    }

    /// Run one already-rendered command line
    pub async fn run_command(&self, command_line: &str) -> Result<()> {
        self.runner.run(command_line).await
    }

    async fn launch_item(
        &self,
        category: &str,
        item: &ResourceItem,
        limiter: Option<&Semaphore>,
    ) -> LaunchOutcome {
        let command_line = match resolve(category, item) {
            Ok(command) => command.render(&self.config),
            Err(e) => {
                debug!(reason = %e, item = %item.redacted(), "Skipping item without a launch target");
                return LaunchOutcome::failure(item.clone(), INVALID_ITEM);
            }
        };

        let _permit = match limiter {
            Some(limiter) => match limiter.acquire().await {
                Ok(permit) => Some(permit),
                Err(e) => return LaunchOutcome::failure(item.clone(), e.to_string()),
            },
            None => None,
        };

        match self.run_command(&command_line).await {
            Ok(()) => {
                debug!(command = %command_line, "Launch succeeded");
                LaunchOutcome::success(item.clone(), command_line)
            }
            Err(e) => {
                warn!(command = %command_line, error = %e, "Launch failed");
                LaunchOutcome::failure(item.clone(), e.detail())
            }
        }
    }
}
