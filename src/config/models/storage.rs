//! Data store configuration

use super::*;
use serde::{Deserialize, Serialize};

/// What a listing does when the data store query fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreErrorPolicy {
    /// Log the failure and answer with an empty list
    #[default]
    Degrade,
    /// Surface the failure as a server error
    Propagate,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL
    #[serde(default = "default_database_url")]
    pub url: String,
    /// Maximum connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
    /// Create the tool tables on startup when they are missing
    #[serde(default)]
    pub run_migrations: bool,
    /// Listing behaviour on store errors
    #[serde(default)]
    pub on_list_error: StoreErrorPolicy,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            connection_timeout: default_connection_timeout(),
            run_migrations: false,
            on_list_error: StoreErrorPolicy::default(),
        }
    }
}

impl DatabaseConfig {
    /// Validate database configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.url.trim().is_empty() {
            return Err("Database URL is required".to_string());
        }
        if self.max_connections == 0 {
            return Err("Max connections cannot be 0".to_string());
        }
        Ok(())
    }

    /// Database URL with any password replaced, for logging
    pub fn redacted_url(&self) -> String {
        match url::Url::parse(&self.url) {
            Ok(mut parsed) if parsed.password().is_some() => {
                match parsed.set_password(Some("***")) {
                    Ok(()) => parsed.to_string(),
                    Err(()) => REDACTED_URL.to_string(),
                }
            }
            Ok(_) => self.url.clone(),
            // Unparsable but possibly carrying credentials
            Err(_) if self.url.contains('@') => REDACTED_URL.to_string(),
            Err(_) => self.url.clone(),
        }
    }
}

/// Logged in place of a URL whose password could not be masked
const REDACTED_URL: &str = "<redacted database url>";

/// Connection settings in the desktop tool's `config.json` layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyDbConfig {
    #[serde(rename = "DBServer")]
    pub server: String,
    #[serde(rename = "DBPort", default = "default_mysql_port")]
    pub port: u16,
    #[serde(rename = "DBUser")]
    pub user: String,
    #[serde(rename = "DBPassword", default)]
    pub password: String,
    #[serde(rename = "DataBase")]
    pub database: String,
}

impl LegacyDbConfig {
    /// Build a `mysql://` URL, percent-encoding the credentials
    pub fn to_url(&self) -> Result<String, String> {
        let mut url = url::Url::parse(&format!("mysql://{}:{}", self.server, self.port))
            .map_err(|e| format!("Invalid DBServer '{}': {}", self.server, e))?;
        url.set_username(&self.user)
            .map_err(|_| "DBUser cannot be set on this URL".to_string())?;
        if !self.password.is_empty() {
            url.set_password(Some(&self.password))
                .map_err(|_| "DBPassword cannot be set on this URL".to_string())?;
        }
        url.set_path(&self.database);
        Ok(url.to_string())
    }
}

fn default_mysql_port() -> u16 {
    3306
}
