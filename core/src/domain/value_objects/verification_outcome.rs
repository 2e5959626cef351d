//! Outcome of checking a submitted code against the code store.

use serde::{Deserialize, Serialize};

/// Result of a check-and-consume against the code store
///
/// Every variant is an expected, user-facing outcome. None of them is a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationOutcome {
    /// The code matched a live entry, which has now been consumed
    Valid,
    /// No entry exists (never issued, already consumed, or swept)
    NotFound,
    /// The entry existed but had expired; it has been evicted
    Expired,
    /// The entry is live but the submitted code differs; it is kept
    Mismatch,
}

impl VerificationOutcome {
    /// Human-readable message for the outcome
    pub fn message(&self) -> &'static str {
        match self {
            VerificationOutcome::Valid => "OTP verified successfully",
            VerificationOutcome::NotFound => "OTP not found",
            VerificationOutcome::Expired => "OTP expired",
            VerificationOutcome::Mismatch => "Invalid OTP",
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, VerificationOutcome::Valid)
    }
}

impl std::fmt::Display for VerificationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
