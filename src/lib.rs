//! # cmdtools-rs
//!
//! Read-only REST service over four tool tables (command snippets, prompts,
//! program shortcuts and websites) with an endpoint that opens those resources
//! on the host desktop.
//!
//! ## Features
//!
//! - **Listing**: every table as JSON, with filtering, paging and export
//! - **Batch open**: concurrent OS launches with per-item outcomes
//! - **Storage**: SeaORM over SQLite, MySQL or PostgreSQL
//!
//! ## Running
//!
//! ```rust,no_run
//! use cmdtools_rs::{Config, HttpServer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/cmdtools.yaml").await?;
//!     HttpServer::new(&config).await?.start().await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::{Catalog, Launcher, ResourceItem, ResourceTable};
pub use server::{AppState, HttpServer};
pub use utils::error::{AppError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
