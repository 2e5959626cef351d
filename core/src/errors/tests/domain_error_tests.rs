//! Unit tests for domain error types

use vg_shared::ConfigError;

use crate::errors::DomainError;

#[test]
fn test_domain_error_messages() {
    let error = DomainError::Validation {
        message: "identity must not be empty".to_string(),
    };
    assert_eq!(error.to_string(), "Validation error: identity must not be empty");

    let error = DomainError::RandomSource {
        message: "entropy unavailable".to_string(),
    };
    assert!(error.to_string().contains("Secure random source failure"));
}

#[test]
fn test_config_error_conversion() {
    let config_error = ConfigError::InvalidValue {
        key: "VERIFICATION_TTL_SECONDS".to_string(),
        value: "soon".to_string(),
    };
    let error: DomainError = config_error.into();

    match error {
        DomainError::Configuration(ConfigError::InvalidValue { ref key, .. }) => {
            assert_eq!(key, "VERIFICATION_TTL_SECONDS");
        }
        _ => panic!("Expected configuration error"),
    }
    assert!(error.to_string().starts_with("Configuration error"));
}

#[test]
fn test_client_error_classification() {
    assert!(DomainError::Validation { message: String::new() }.is_client_error());
    assert!(!DomainError::Store { message: String::new() }.is_client_error());
    assert!(!DomainError::RandomSource { message: String::new() }.is_client_error());
}
