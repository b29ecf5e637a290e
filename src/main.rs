use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hostedpay::config::Config;
use hostedpay::gateways::AuthorizeNetClient;
use hostedpay::middleware::RequestId;
use hostedpay::tokens::{self, TokenService};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hostedpay=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    tracing::info!("Starting hostedpay token issuance service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Gateway endpoint: {}", config.authorizenet.base_url);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Credentials are injected here once; request handlers never read the
    // environment.
    let gateway = Arc::new(AuthorizeNetClient::new(
        config.authorizenet.credentials.clone(),
        Some(config.authorizenet.base_url.clone()),
    ));
    let token_service = Arc::new(TokenService::new(gateway));

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(TracingLogger::default())
            .wrap(RequestId)
            .app_data(web::Data::new(token_service.clone()))
            .configure(tokens::configure)
            .route("/health", web::get().to(health_check))
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "hostedpay"
    }))
}
