//! Types for verification service results

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::VerificationOutcome;

/// Result of requesting a new code
///
/// The code itself never appears here; it only leaves the service through
/// the delivery collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestCodeResult {
    /// The code was stored and handed to the delivery collaborator
    Delivered {
        /// Seconds until the issued code expires
        expires_in_seconds: u64,
    },
    /// The code was stored but delivery failed; retrying reissues safely
    DeliveryFailed {
        /// Reason reported by the delivery collaborator
        reason: String,
    },
}

impl RequestCodeResult {
    /// Whether the delivery attempt succeeded
    pub fn is_delivered(&self) -> bool {
        matches!(self, RequestCodeResult::Delivered { .. })
    }

    /// Delivery failure reason, if any
    pub fn error(&self) -> Option<&str> {
        match self {
            RequestCodeResult::Delivered { .. } => None,
            RequestCodeResult::DeliveryFailed { reason } => Some(reason),
        }
    }
}

/// Result of verifying a code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyCodeResult {
    /// Outcome of the check-and-consume
    pub outcome: VerificationOutcome,
    /// Human-readable message for the outcome
    pub message: String,
}

impl VerifyCodeResult {
    pub fn is_valid(&self) -> bool {
        self.outcome.is_valid()
    }
}

impl From<VerificationOutcome> for VerifyCodeResult {
    fn from(outcome: VerificationOutcome) -> Self {
        Self {
            outcome,
            message: outcome.message().to_string(),
        }
    }
}
