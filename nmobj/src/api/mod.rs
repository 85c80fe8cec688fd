//! Public API module.
//!
//! The user-facing entry point, bus configuration, and the value types
//! shared across the crate.

pub mod config;
pub mod models;
pub mod network_manager;
