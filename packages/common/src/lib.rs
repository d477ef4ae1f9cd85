//! Common infrastructure for the cdpauth crates
//!
//! This crate provides shared functionality used across the workspace:
//! - `env_logger` initialisation
//! - Logging helpers that never print key material

pub mod logging;

pub use logging::LoggingTransformer;
