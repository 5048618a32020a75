//! Root service configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Root of the YAML configuration file
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Data store configuration
    #[serde(default)]
    pub database: DatabaseConfig,
    /// OS launch configuration
    #[serde(default)]
    pub launcher: LauncherConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ServiceConfig {
    /// Validate every section, prefixing the failing section's name
    pub fn validate(&self) -> Result<(), String> {
        self.server
            .validate()
            .map_err(|e| format!("Server config error: {}", e))?;
        self.server
            .cors
            .validate()
            .map_err(|e| format!("CORS config error: {}", e))?;
        self.database
            .validate()
            .map_err(|e| format!("Database config error: {}", e))?;
        self.launcher
            .validate()
            .map_err(|e| format!("Launcher config error: {}", e))?;
        Ok(())
    }
}
