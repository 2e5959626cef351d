//! Domain-specific error types and error handling.
//!
//! Expected verification outcomes (not found, expired, mismatch) and delivery
//! failures are typed results, not errors. `DomainError` covers the faults
//! that callers cannot recover from by retrying with different input.

use thiserror::Error;
use vg_shared::ConfigError;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// The secure random source could not produce a code
    #[error("Secure random source failure: {message}")]
    RandomSource { message: String },

    #[error("Code store error: {message}")]
    Store { message: String },

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),
}

impl DomainError {
    /// Whether the error was caused by caller input rather than the system
    pub fn is_client_error(&self) -> bool {
        matches!(self, DomainError::Validation { .. })
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests;
