//! Configuration management for the service
//!
//! This module handles loading, overriding and validation of the service configuration.

pub mod models;

pub use models::*;

use crate::utils::error::{AppError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Environment variable overriding the database URL
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
/// Environment variable overriding the bind host
pub const ENV_HOST: &str = "CMDTOOLS_HOST";
/// Environment variable overriding the bind port
pub const ENV_PORT: &str = "CMDTOOLS_PORT";
/// Environment variable overriding the log level
pub const ENV_LOG: &str = "CMDTOOLS_LOG";

/// Main configuration struct for the service
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Service configuration
    pub service: ServiceConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_yaml_str(&content)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let service: ServiceConfig = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { service };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Replace the database URL with one built from a desktop-tool `config.json`
    pub async fn with_legacy_db_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading legacy database settings from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::Config(format!("Failed to read legacy database config: {}", e))
        })?;
        let legacy: LegacyDbConfig = serde_json::from_str(&content).map_err(|e| {
            AppError::Config(format!("Failed to parse legacy database config: {}", e))
        })?;

        self.service.database.url = legacy.to_url().map_err(AppError::Config)?;
        Ok(self)
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_DATABASE_URL) {
            debug!("Database URL overridden from {}", ENV_DATABASE_URL);
            self.service.database.url = url;
        }
        if let Some(host) = lookup(ENV_HOST) {
            self.service.server.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.service.server.port = port
                .parse()
                .map_err(|e| AppError::Config(format!("Invalid {}: {}", ENV_PORT, e)))?;
        }
        if let Some(level) = lookup(ENV_LOG) {
            self.service.logging.level = level;
        }

        self.validate()?;
        Ok(self)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.service.server
    }

    /// Get database configuration
    pub fn database(&self) -> &DatabaseConfig {
        &self.service.database
    }

    /// Get launcher configuration
    pub fn launcher(&self) -> &LauncherConfig {
        &self.service.launcher
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.service.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        self.service.validate().map_err(AppError::Config)
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.service)
            .map_err(|e| AppError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
