//! Integration tests for cmdtools-rs
//!
//! These tests drive the HTTP application against a real in-memory SQLite
//! store; only the OS launch facility is faked.

pub mod database_tests;
pub mod health_tests;
pub mod listing_tests;
