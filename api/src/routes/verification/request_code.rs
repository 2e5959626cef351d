use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use tracing::{info, warn};
use validator::Validate;

use vg_core::services::verification::{CodeDeliveryTrait, CodeStore, RequestCodeResult};
use vg_shared::identity::{mask_identity, normalize_identity};

use crate::dto::{RequestCodeRequest, RequestCodeResponse};
use crate::handlers::{domain_error_response, validation_error_response};

use super::AppState;

/// Handler for POST /api/v1/verification/request-code
///
/// Issues a fresh code for the identity and emails it. Any code previously
/// issued for the identity stops being accepted.
///
/// # Request Body
///
/// ```json
/// {
///     "identity": "a@x.com",
///     "purpose": "registration" | "privileged-booking"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "requested": true }
/// ```
///
/// ## Errors
/// - 400 Bad Request: malformed body, unknown purpose, or invalid email
/// - 502 Bad Gateway: `{ "requested": false, "error": "..." }` when the code
///   was stored but could not be delivered
/// - 500 Internal Server Error: the code could not be generated or stored
pub async fn request_code<S, D>(
    state: web::Data<AppState<S, D>>,
    request: web::Json<RequestCodeRequest>,
) -> HttpResponse
where
    S: CodeStore + 'static,
    D: CodeDeliveryTrait + 'static,
{
    let mut request = request.into_inner();
    request.identity = normalize_identity(&request.identity);

    if let Err(errors) = request.validate() {
        warn!(
            identity = %mask_identity(&request.identity),
            "Validation failed for request_code"
        );
        return validation_error_response(&errors);
    }

    info!(
        identity = %mask_identity(&request.identity),
        purpose = %request.purpose,
        "Processing request_code"
    );

    match state
        .verification_service
        .request_code(&request.identity, request.purpose)
        .await
    {
        Ok(result) => {
            let status = match result {
                RequestCodeResult::Delivered { .. } => StatusCode::OK,
                RequestCodeResult::DeliveryFailed { .. } => StatusCode::BAD_GATEWAY,
            };
            HttpResponse::build(status).json(RequestCodeResponse::from(&result))
        }
        Err(e) => domain_error_response(&e),
    }
}
