//! Core functionality for the service
//!
//! This module contains the resource model, the listing catalog and the
//! launch pipeline behind the open endpoints.

pub mod catalog;
pub mod launcher;
pub mod resources;

pub use catalog::Catalog;
pub use launcher::Launcher;
pub use resources::{ResourceItem, ResourceTable};
