//! Configuration loading and the run_server entry point

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::Result;
use crate::utils::logging;
use std::path::{Path, PathBuf};
use tracing::info;

/// Config file read when none is given explicitly
pub const DEFAULT_CONFIG_PATH: &str = "config/cmdtools.yaml";

/// Startup options collected from the command line
#[derive(Debug, Clone, Default)]
pub struct ServerOptions {
    /// Explicit YAML config file; must exist and parse
    pub config_path: Option<PathBuf>,
    /// Desktop-tool `config.json` supplying the database connection
    pub legacy_db_config: Option<PathBuf>,
    /// Bind host override
    pub host: Option<String>,
    /// Bind port override
    pub port: Option<u16>,
}

/// Resolve the effective configuration.
///
/// Precedence, lowest first: defaults, YAML file, legacy database file,
/// environment, command line.
pub async fn load_config(options: &ServerOptions) -> Result<Config> {
    let config = match &options.config_path {
        Some(path) => Config::from_file(path).await?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            Config::from_file(DEFAULT_CONFIG_PATH).await?
        }
        None => Config::default(),
    };

    let config = match &options.legacy_db_config {
        Some(path) => config.with_legacy_db_file(path).await?,
        None => config,
    };

    let mut config = config.with_env_overrides()?;

    if let Some(host) = &options.host {
        config.service.server.host = host.clone();
    }
    if let Some(port) = options.port {
        config.service.server.port = port;
    }

    config.validate()?;
    Ok(config)
}

/// Load configuration, install logging and serve until shutdown
pub async fn run_server(options: ServerOptions) -> Result<()> {
    let config = load_config(&options).await?;
    logging::init(config.logging())?;

    info!("Starting {} v{}", crate::NAME, crate::VERSION);
    info!("Database: {}", config.database().redacted_url());

    let server = HttpServer::new(&config).await?;
    info!(
        "Server starting at: http://{}",
        config.server().address()
    );
    info!("API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   GET  /api/data - All tool tables");
    info!("   GET  /api/{{cmd-tools|prompt-tools|win-programs|websites}} - One table");
    info!("   GET  /api/export/{{table}} - JSON export");
    info!("   POST /api/opendoc - Open one command or document");
    info!("   POST /api/opendoc/batch - Open a batch of items");
    info!("   POST /api/opendoc/from-db - Open stored items");

    server.start().await
}
