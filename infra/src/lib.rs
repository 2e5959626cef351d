//! # Infrastructure Layer
//!
//! This crate provides the concrete implementations behind the traits
//! declared in `vg_core`:
//! - **Cache**: the in-memory, concurrency-safe verification code store
//! - **Email**: email transports and the adapter that delivers issued codes

/// Cache module - in-memory verification code store
pub mod cache;

/// Email module - email transports and code delivery
pub mod email;

/// Configuration module for infrastructure services
pub mod config {
    //! Configuration for infrastructure services
    //!
    //! Handles the email transport selection and sender address.

    use serde::{Deserialize, Serialize};

    /// Email service configuration
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct EmailConfig {
        /// Email service provider ("mock")
        pub provider: String,
        /// Sender address placed on outgoing messages
        pub from_address: String,
    }

    impl Default for EmailConfig {
        fn default() -> Self {
            Self {
                provider: "mock".to_string(),
                from_address: "no-reply@verigate.local".to_string(),
            }
        }
    }

    impl EmailConfig {
        /// Load email configuration from environment variables
        ///
        /// Reads `EMAIL_PROVIDER` and `EMAIL_FROM`, falling back to defaults.
        pub fn from_env() -> Self {
            let defaults = Self::default();
            Self {
                provider: std::env::var("EMAIL_PROVIDER")
                    .map(|p| p.trim().to_lowercase())
                    .unwrap_or(defaults.provider),
                from_address: std::env::var("EMAIL_FROM").unwrap_or(defaults.from_address),
            }
        }
    }
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Email service error
    #[error("Email service error: {0}")]
    Email(String),
}

pub use cache::InMemoryCodeStore;
pub use email::{create_email_service, EmailCodeDelivery, EmailMessage, EmailService, MockEmailService};
