//! Utility modules shared across the service
//!
//! - **error**: error type, result alias and HTTP error bodies
//! - **logging**: log subscriber setup

pub mod error;
pub mod logging;
