//! Main verification service implementation

use std::sync::Arc;
use tracing::{debug, error, info, warn};
use vg_shared::identity::{mask_identity, normalize_identity};

use crate::domain::value_objects::{Purpose, VerificationOutcome};
use crate::errors::{DomainError, DomainResult};

use super::code_generator::generate_secure_code;
use super::config::VerificationServiceConfig;
use super::traits::{CodeDeliveryTrait, CodeStore};
use super::types::{RequestCodeResult, VerifyCodeResult};

/// Verification service issuing and validating single-use codes
///
/// The store and the delivery collaborator are injected so that tests can use
/// doubles and a networked store can replace the in-memory one without
/// changing this contract.
pub struct VerificationService<S: CodeStore, D: CodeDeliveryTrait> {
    /// Store of outstanding codes
    store: Arc<S>,
    /// Out-of-band delivery of issued codes
    delivery: Arc<D>,
    /// Service configuration
    config: VerificationServiceConfig,
}

impl<S: CodeStore, D: CodeDeliveryTrait> VerificationService<S, D> {
    /// Create a new verification service
    ///
    /// # Arguments
    ///
    /// * `store` - Code store implementation
    /// * `delivery` - Delivery collaborator implementation
    /// * `config` - Service configuration
    pub fn new(store: Arc<S>, delivery: Arc<D>, config: VerificationServiceConfig) -> Self {
        Self {
            store,
            delivery,
            config,
        }
    }

    /// Issue a new code for an identity and hand it to the delivery collaborator
    ///
    /// This method:
    /// 1. Normalizes the identity
    /// 2. Generates a code from the OS CSPRNG
    /// 3. Stores it, replacing any previous code for the identity
    /// 4. Delivers it (no store lock is held during delivery)
    ///
    /// A failed delivery leaves the stored code in place and is reported as
    /// [`RequestCodeResult::DeliveryFailed`].
    ///
    /// # Errors
    ///
    /// * `DomainError::Validation` - the identity is empty
    /// * `DomainError::RandomSource` - no secure code could be generated
    /// * `DomainError::Store` - the store rejected the write
    pub async fn request_code(
        &self,
        identity: &str,
        purpose: Purpose,
    ) -> DomainResult<RequestCodeResult> {
        let identity = Self::normalized(identity)?;
        let masked = mask_identity(&identity);

        let code = generate_secure_code(self.config.code_length).map_err(|e| {
            error!(
                identity = %masked,
                error = %e,
                event = "otp_generation_failed",
                "Failed to generate verification code"
            );
            e
        })?;

        self.store
            .put(&identity, &code, purpose, self.config.code_ttl)
            .await
            .map_err(|e| {
                error!(
                    identity = %masked,
                    error = %e,
                    event = "otp_storage_failed",
                    "Failed to store verification code"
                );
                DomainError::Store {
                    message: format!("Failed to store verification code: {}", e),
                }
            })?;

        info!(
            identity = %masked,
            purpose = %purpose,
            event = "otp_generated",
            "Issued new verification code"
        );

        match self.delivery.deliver(&identity, &code, purpose).await {
            Ok(()) => {
                debug!(identity = %masked, event = "otp_delivered", "Verification code delivered");
                Ok(RequestCodeResult::Delivered {
                    expires_in_seconds: self.config.code_ttl.as_secs(),
                })
            }
            Err(reason) => {
                warn!(
                    identity = %masked,
                    error = %reason,
                    event = "otp_delivery_failed",
                    "Verification code stored but delivery failed"
                );
                Ok(RequestCodeResult::DeliveryFailed { reason })
            }
        }
    }

    /// Verify a submitted code, consuming it on success
    ///
    /// # Returns
    ///
    /// * `Ok(VerifyCodeResult)` - one of Valid, NotFound, Expired or Mismatch
    /// * `Err(DomainError::Store)` - the store failed
    pub async fn verify_code(&self, identity: &str, submitted: &str) -> DomainResult<VerifyCodeResult> {
        let identity = normalize_identity(identity);
        let masked = mask_identity(&identity);

        let outcome = self
            .store
            .check_and_consume(&identity, submitted.trim())
            .await
            .map_err(|e| {
                error!(
                    identity = %masked,
                    error = %e,
                    event = "otp_verification_error",
                    "System error during code verification"
                );
                DomainError::Store {
                    message: format!("Failed to verify code: {}", e),
                }
            })?;

        match outcome {
            VerificationOutcome::Valid => {
                info!(identity = %masked, event = "otp_verified_success", "Verification code consumed");
            }
            VerificationOutcome::Mismatch => {
                warn!(identity = %masked, event = "otp_mismatch", "Submitted code does not match");
            }
            VerificationOutcome::Expired => {
                info!(identity = %masked, event = "otp_expired", "Submitted code had expired");
            }
            VerificationOutcome::NotFound => {
                debug!(identity = %masked, event = "otp_not_found", "No outstanding code for identity");
            }
        }

        Ok(VerifyCodeResult::from(outcome))
    }

    fn normalized(identity: &str) -> DomainResult<String> {
        let identity = normalize_identity(identity);
        if identity.is_empty() {
            return Err(DomainError::Validation {
                message: "Identity must not be empty".to_string(),
            });
        }
        Ok(identity)
    }
}
