//! Verification code configuration module

use serde::{Deserialize, Serialize};

use super::{parse_env, ConfigError};

/// Smallest accepted code length
pub const MIN_CODE_LENGTH: usize = 4;

/// Largest accepted code length (10^9 still fits in a u32)
pub const MAX_CODE_LENGTH: usize = 9;

/// Longest accepted sweep interval (one day)
pub const MAX_SWEEP_INTERVAL_SECONDS: u64 = 86_400;

/// Verification code issuance, expiry and sweep settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Number of digits in a generated code
    #[serde(default = "default_code_length")]
    pub code_length: usize,

    /// Lifetime of an issued code in seconds
    #[serde(default = "default_ttl_seconds")]
    pub ttl_seconds: u64,

    /// Interval between background sweeps of expired codes in seconds
    #[serde(default = "default_sweep_interval_seconds")]
    pub sweep_interval_seconds: u64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_length: default_code_length(),
            ttl_seconds: default_ttl_seconds(),
            sweep_interval_seconds: default_sweep_interval_seconds(),
        }
    }
}

impl VerificationConfig {
    /// Load from VERIFICATION_* environment variables, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            code_length: parse_env("VERIFICATION_CODE_LENGTH", default_code_length())?,
            ttl_seconds: parse_env("VERIFICATION_TTL_SECONDS", default_ttl_seconds())?,
            sweep_interval_seconds: parse_env(
                "VERIFICATION_SWEEP_INTERVAL_SECONDS",
                default_sweep_interval_seconds(),
            )?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is within its accepted range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&self.code_length) {
            return Err(ConfigError::OutOfRange {
                field: "code_length".to_string(),
                value: self.code_length.to_string(),
                expected: format!("{}..={}", MIN_CODE_LENGTH, MAX_CODE_LENGTH),
            });
        }
        if self.ttl_seconds == 0 {
            return Err(ConfigError::OutOfRange {
                field: "ttl_seconds".to_string(),
                value: "0".to_string(),
                expected: "> 0".to_string(),
            });
        }
        if !(1..=MAX_SWEEP_INTERVAL_SECONDS).contains(&self.sweep_interval_seconds) {
            return Err(ConfigError::OutOfRange {
                field: "sweep_interval_seconds".to_string(),
                value: self.sweep_interval_seconds.to_string(),
                expected: format!("1..={}", MAX_SWEEP_INTERVAL_SECONDS),
            });
        }
        Ok(())
    }

    /// Code lifetime as a std duration
    pub fn ttl(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.ttl_seconds)
    }

    /// Sweep interval as a std duration
    pub fn sweep_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.sweep_interval_seconds)
    }
}

fn default_code_length() -> usize {
    6
}

fn default_ttl_seconds() -> u64 {
    300 // 5 minutes
}

fn default_sweep_interval_seconds() -> u64 {
    300 // 5 minutes
}
