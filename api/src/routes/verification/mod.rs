//! Verification route handlers
//!
//! - Requesting a code for an identity and purpose
//! - Verifying a submitted code

pub mod request_code;
pub mod verify_code;

use std::sync::Arc;

use vg_core::services::verification::{CodeDeliveryTrait, CodeStore, VerificationService};

/// Application state that holds shared services
pub struct AppState<S, D>
where
    S: CodeStore,
    D: CodeDeliveryTrait,
{
    pub verification_service: Arc<VerificationService<S, D>>,
}

impl<S: CodeStore, D: CodeDeliveryTrait> AppState<S, D> {
    pub fn new(verification_service: Arc<VerificationService<S, D>>) -> Self {
        Self {
            verification_service,
        }
    }
}
