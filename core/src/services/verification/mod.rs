//! Verification service module for out-of-band code verification
//!
//! This module provides the verification code workflow:
//! - Secure numeric code generation
//! - Issuance into an injected code store
//! - Delivery through an external collaborator
//! - Single-use check-and-consume verification

mod code_generator;
mod config;
mod service;
mod traits;
mod types;


pub use code_generator::generate_secure_code;
pub use config::VerificationServiceConfig;
pub use service::VerificationService;
pub use traits::{CodeDeliveryTrait, CodeStore};
pub use types::{RequestCodeResult, VerifyCodeResult};
