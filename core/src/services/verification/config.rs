//! Configuration for the verification service

use std::time::Duration;
use vg_shared::VerificationConfig;

use crate::domain::entities::verification_entry::{DEFAULT_CODE_LENGTH, DEFAULT_TTL_SECONDS};

/// Configuration for the verification service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationServiceConfig {
    /// Number of digits in a generated code
    pub code_length: usize,
    /// Lifetime of an issued code
    pub code_ttl: Duration,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            code_ttl: Duration::from_secs(DEFAULT_TTL_SECONDS),
        }
    }
}

impl From<&VerificationConfig> for VerificationServiceConfig {
    fn from(config: &VerificationConfig) -> Self {
        Self {
            code_length: config.code_length,
            code_ttl: config.ttl(),
        }
    }
}
