use actix_web::{web, HttpResponse};
use validator::Validate;

use vg_core::services::verification::{CodeDeliveryTrait, CodeStore};

use crate::dto::{VerifyCodeRequest, VerifyCodeResponse};
use crate::handlers::{domain_error_response, validation_error_response};

use super::AppState;

/// Handler for POST /api/v1/verification/verify-code
///
/// A matching code is consumed and cannot be verified again.
///
/// # Request Body
///
/// ```json
/// {
///     "identity": "a@x.com",
///     "code": "048213"
/// }
/// ```
///
/// # Response
///
/// Every outcome is a 200 with `valid` and one of the messages
/// "OTP verified successfully", "OTP not found", "OTP expired" or
/// "Invalid OTP".
///
/// ## Errors
/// - 400 Bad Request: malformed body or empty fields
/// - 500 Internal Server Error: the store failed
pub async fn verify_code<S, D>(
    state: web::Data<AppState<S, D>>,
    request: web::Json<VerifyCodeRequest>,
) -> HttpResponse
where
    S: CodeStore + 'static,
    D: CodeDeliveryTrait + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state
        .verification_service
        .verify_code(&request.identity, &request.code)
        .await
    {
        Ok(result) => HttpResponse::Ok().json(VerifyCodeResponse::from(result)),
        Err(e) => domain_error_response(&e),
    }
}
