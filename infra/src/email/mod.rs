//! Email Service Module
//!
//! This module provides the email transports used to deliver verification
//! codes, and the adapter that plugs a transport into the verification
//! service's delivery seam.
//!
//! ## Features
//!
//! - **Email Service Trait**: Common interface for all email providers
//! - **Mock Implementation**: Console output for development
//! - **Message Composition**: Purpose-specific subject and body
//! - **Security**: Identity masking in logs

pub mod code_delivery;
pub mod email_service;
pub mod message;
pub mod mock_email;

pub use code_delivery::EmailCodeDelivery;
pub use email_service::{EmailMessage, EmailService};
pub use message::compose_code_message;
pub use mock_email::MockEmailService;

#[cfg(test)]
mod tests;

use tracing::{info, warn};
use vg_shared::config::Environment;

use crate::config::EmailConfig;
use crate::InfrastructureError;

/// Create an email service based on configuration
///
/// The mock transport never delivers anything, so production refuses it
/// outright. Elsewhere an unknown provider falls back to the mock with a
/// warning, and only development prints messages to the console.
pub fn create_email_service(
    config: &EmailConfig,
    environment: Environment,
) -> Result<Box<dyn EmailService>, InfrastructureError> {
    if environment.is_production() {
        return match config.provider.as_str() {
            "mock" => Err(InfrastructureError::Config(
                "The mock email provider cannot deliver codes in production".to_string(),
            )),
            other => Err(InfrastructureError::Config(format!(
                "Unknown email provider: {}",
                other
            ))),
        };
    }

    let console_output = environment.is_development();
    match config.provider.as_str() {
        "mock" => {
            info!(provider = "mock", console_output, "Using mock email service");
        }
        other => {
            warn!(
                provider = %other,
                environment = %environment,
                "Unknown email provider, falling back to mock service"
            );
        }
    }
    Ok(Box::new(MockEmailService::with_options(console_output, false)))
}
