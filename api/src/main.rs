use actix_web::{web, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use tracing::info;

use vg_api::app::create_app;
use vg_api::routes::verification::AppState;
use vg_api::telemetry::init_tracing;
use vg_core::services::sweep::SweepScheduler;
use vg_core::services::verification::{VerificationService, VerificationServiceConfig};
use vg_infra::config::EmailConfig;
use vg_infra::{create_email_service, EmailCodeDelivery, EmailService, InMemoryCodeStore};
use vg_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("Invalid configuration")?;
    init_tracing(&config.logging)?;

    info!(
        environment = %config.environment,
        code_length = config.verification.code_length,
        ttl_seconds = config.verification.ttl_seconds,
        sweep_interval_seconds = config.verification.sweep_interval_seconds,
        "Starting Verigate API server"
    );

    let email_config = EmailConfig::from_env();
    let email: Arc<dyn EmailService> = Arc::from(
        create_email_service(&email_config, config.environment)
            .context("Email transport unavailable")?,
    );
    let delivery = Arc::new(EmailCodeDelivery::new(
        email,
        email_config.from_address,
        config.verification.ttl(),
    ));

    let store = Arc::new(InMemoryCodeStore::new());
    let verification_service = Arc::new(VerificationService::new(
        store.clone(),
        delivery,
        VerificationServiceConfig::from(&config.verification),
    ));
    let app_state = web::Data::new(AppState::new(verification_service));

    let bind_address = config.server.bind_address();
    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }
    let server = server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    info!(address = %bind_address, "Server listening");

    let sweep = Arc::new(SweepScheduler::new(
        store,
        config.verification.sweep_interval(),
    ))
    .start();

    let result = server.run().await;

    sweep.shutdown().await;
    info!("Server stopped");

    result.context("HTTP server terminated with an error")
}
