//! cmdtools-server - REST backend for the tool tables

#![allow(missing_docs)]

use clap::Parser;
use cmdtools_rs::server::builder::{ServerOptions, run_server};
use std::path::PathBuf;
use std::process::ExitCode;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "cmdtools-server", version, about)]
struct Args {
    /// YAML configuration file (defaults to config/cmdtools.yaml when present)
    #[arg(short, long, env = "CMDTOOLS_CONFIG")]
    config: Option<PathBuf>,

    /// Desktop-tool config.json holding DBServer/DBPort/DBUser/DBPassword/DataBase
    #[arg(long, env = "CMDTOOLS_LEGACY_DB_CONFIG")]
    legacy_db_config: Option<PathBuf>,

    /// Bind host
    #[arg(long, env = "CMDTOOLS_HOST")]
    host: Option<String>,

    /// Bind port
    #[arg(short, long, env = "CMDTOOLS_PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    let options = ServerOptions {
        config_path: args.config,
        legacy_db_config: args.legacy_db_config,
        host: args.host,
        port: args.port,
    };

    match run_server(options).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
