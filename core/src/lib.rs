//! # Verigate Core
//!
//! Core business logic and domain layer for Verigate.
//! This crate contains the verification entry entity, the code store and
//! delivery contracts, the verification service, the sweep scheduler, and
//! the error types that form the foundation of the application.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
