//! LexRisk API service.
//!
//! A risk-management backend built with Axum: account signup, the shared
//! protocol library, and user-owned risk registers with derived metrics.

mod config;
mod health;
mod logging;

use axum::{routing::get, Extension, Router};
use config::Config;
use health::{health_handler, readyz_handler};
use lexrisk_api_auth::auth_router;
use lexrisk_api_protocols::{protocols_public_router, protocols_router};
use lexrisk_api_risks::risks_router;
use lexrisk_auth::JwtValidator;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

#[tokio::main]
async fn main() {
    // Fail fast on missing required configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    logging::init_logging(&config.rust_log);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.host,
        port = config.port,
        "Starting LexRisk API"
    );

    let pool = match lexrisk_db::connect(&config.database_url, config.db_max_connections).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, "Failed to connect to database");
            std::process::exit(1);
        }
    };

    if let Err(e) = lexrisk_db::run_migrations(&pool).await {
        tracing::error!(error = %e, "Failed to run migrations");
        std::process::exit(1);
    }

    let jwt_validator = JwtValidator::new(config.jwt_secret.as_bytes());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/readyz", get(readyz_handler))
        .merge(auth_router(pool.clone()))
        .merge(protocols_public_router(pool.clone()))
        .merge(protocols_router(pool.clone()))
        .merge(risks_router(pool.clone()))
        .layer(Extension(jwt_validator))
        .layer(Extension(pool))
        .layer(cors);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(error = %e, addr = %addr, "Failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %addr, "LexRisk API listening");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }

    info!("LexRisk API shut down cleanly");
}

/// Resolve when SIGINT or SIGTERM arrives.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
