//! Adapter delivering verification codes by email
//!
//! Bridges an infrastructure [`EmailService`] to the core
//! [`CodeDeliveryTrait`] so the verification service stays transport-agnostic.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

use vg_core::domain::value_objects::Purpose;
use vg_core::services::verification::CodeDeliveryTrait;
use vg_shared::identity::mask_identity;

use super::email_service::EmailService;
use super::message::compose_code_message;

/// Delivers codes through an email transport
pub struct EmailCodeDelivery<E: EmailService + ?Sized = dyn EmailService> {
    email: Arc<E>,
    from_address: String,
    code_ttl: Duration,
}

impl<E: EmailService + ?Sized> EmailCodeDelivery<E> {
    /// Create a new adapter
    ///
    /// `code_ttl` is only used to tell the recipient how long the code lives.
    pub fn new(email: Arc<E>, from_address: impl Into<String>, code_ttl: Duration) -> Self {
        Self {
            email,
            from_address: from_address.into(),
            code_ttl,
        }
    }
}

#[async_trait]
impl<E: EmailService + ?Sized> CodeDeliveryTrait for EmailCodeDelivery<E> {
    async fn deliver(&self, identity: &str, code: &str, purpose: Purpose) -> Result<(), String> {
        let message = compose_code_message(
            &self.from_address,
            identity,
            code,
            purpose,
            self.code_ttl.as_secs() / 60,
        );

        match self.email.send_email(&message).await {
            Ok(message_id) => {
                debug!(
                    identity = %mask_identity(identity),
                    provider = self.email.provider_name(),
                    message_id = %message_id,
                    "Verification email sent"
                );
                Ok(())
            }
            Err(e) => {
                error!(
                    identity = %mask_identity(identity),
                    provider = self.email.provider_name(),
                    error = %e,
                    "Failed to send verification email"
                );
                Err(e.to_string())
            }
        }
    }
}
