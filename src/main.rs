use actix_web::{App, HttpServer, web};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod model;
mod service;

use model::Config;
use service::TriageService;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present (ignore if missing)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let bind_addr = config.bind_addr();

    // The triage service is the only shared state between requests and is
    // immutable once constructed.
    let triage_service = web::Data::new(TriageService::from_config(&config));

    tracing::info!("Starting RedVector triage server on {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(triage_service.clone())
            .configure(api::triage::configure)
            .configure(api::health::configure)
            .configure(api::openapi::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
