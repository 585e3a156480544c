//! Accounts Service - Main Application Entry Point
//!
//! A REST API for creating financial accounts and listing them with offset
//! pagination.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries)
//! - **Balances**: `rust_decimal::Decimal`, never floats
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool
//! 3. Run database migrations
//! 4. Build HTTP router with routes and middleware
//! 5. Serve until Ctrl+C / SIGTERM, then close the pool

mod config;
mod db;
mod error;
mod extractors;
mod handlers;
mod models;
mod services;
mod state;

use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::{services::account_store::PgAccountStore, state::AppState};

/// Build the HTTP router for the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route(
            "/accounts",
            get(handlers::accounts::list_accounts).post(handlers::accounts::create_account),
        )
        .route("/accounts/{id}", get(handlers::accounts::get_account))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG (defaults to "info")
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env()?;
    tracing::info!(
        port = config.server_port,
        max_page_size = config.max_page_size,
        "Configuration loaded"
    );

    let pool = db::create_pool(&config.database_url, config.db_max_connections).await?;
    tracing::info!(max_connections = config.db_max_connections, "Database pool created");

    db::run_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    let store = Arc::new(PgAccountStore::new(pool.clone()));
    let app = router(AppState::new(store, config.max_page_size));

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // A client disconnect drops the handler future, which cancels any
    // in-flight query and returns its connection to the pool.
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db::close_pool(pool).await;
    tracing::info!("Server stopped");

    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::warn!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            tracing::warn!("Received SIGTERM, shutting down");
        }
    }
}
