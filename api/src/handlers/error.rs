//! Mapping of domain and request errors to HTTP responses

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use std::collections::HashMap;
use tracing::{error, warn};
use validator::ValidationErrors;

use vg_core::errors::DomainError;

use crate::dto::ErrorResponse;

/// Translate a domain error into an HTTP response
///
/// Client errors carry their message. Everything else is a 500 with a
/// generic message so internals do not leak.
pub fn domain_error_response(err: &DomainError) -> HttpResponse {
    match err {
        DomainError::Validation { message } => {
            ErrorResponse::new("validation_error", message.clone()).to_response(StatusCode::BAD_REQUEST)
        }
        other => {
            error!(error = %other, "Request failed with an internal error");
            ErrorResponse::new("internal_error", "An internal error occurred")
                .to_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Response for a request body that failed validation
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let mut details = HashMap::new();
    details.insert("validation_errors".to_string(), serde_json::json!(errors));

    ErrorResponse::new("validation_error", "Invalid request data")
        .with_details(details)
        .to_response(StatusCode::BAD_REQUEST)
}

/// Error handler for malformed or mistyped JSON bodies
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!(error = %err, "Rejected malformed request body");
    let response = ErrorResponse::new("invalid_request", err.to_string())
        .to_response(StatusCode::BAD_REQUEST);
    InternalError::from_response(err, response).into()
}
