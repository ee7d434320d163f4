//! Common utilities shared across the service crates.
//!
//! This crate provides:
//! - Unified error handling with HTTP response mapping
//! - Configuration structures loaded from the environment
//! - Database connection management and migrations (feature `database`)

pub mod config;
pub mod error;

#[cfg(feature = "database")]
pub mod db;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};

#[cfg(feature = "database")]
pub use db::{Database, Migrator};
