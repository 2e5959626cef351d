//! Application factory
//!
//! Builds the Actix-web application around shared state so the binary and
//! the HTTP tests serve identical routes.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{middleware::Logger, web, App, HttpResponse};

use vg_core::services::verification::{CodeDeliveryTrait, CodeStore};

use crate::dto::ErrorResponse;
use crate::handlers::json_error_handler;
use crate::routes::health::health_check;
use crate::routes::verification::{request_code::request_code, verify_code::verify_code, AppState};

/// Register every route on a service config
pub fn configure_routes<S, D>(cfg: &mut web::ServiceConfig)
where
    S: CodeStore + 'static,
    D: CodeDeliveryTrait + 'static,
{
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1").service(
                web::scope("/verification")
                    .route("/request-code", web::post().to(request_code::<S, D>))
                    .route("/verify-code", web::post().to(verify_code::<S, D>)),
            ),
        );
}

/// Create the application with its state, middleware and routes
pub fn create_app<S, D>(
    app_state: web::Data<AppState<S, D>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    S: CodeStore + 'static,
    D: CodeDeliveryTrait + 'static,
{
    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .configure(configure_routes::<S, D>)
        .default_service(web::route().to(not_found))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "not_found",
        "The requested resource was not found",
    ))
}
