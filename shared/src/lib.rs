//! Shared utilities and common types for the Verigate server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types (environment, server, verification, logging)
//! - Identity utilities (normalization, validation, masking)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, ConfigError, Environment, LogFormat, LoggingConfig, ServerConfig,
    VerificationConfig,
};
pub use utils::identity;
