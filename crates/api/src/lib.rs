//! `api` crate — HTTP REST API layer.
//!
//! Exposes:
//!   GET    /
//!   GET    /transporte
//!   POST   /transporte
//!   PUT    /transporte/:id
//!   DELETE /transporte/:id

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;

use axum::{
    http::{header, HeaderValue},
    routing::{get, put},
    Router,
};
use db::DbPool;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

pub use error::{ApiError, ServeError};
pub use handlers::AppState;

pub const DEFAULT_BIND: &str = "127.0.0.1:8000";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// HTTP-facing settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Socket address to listen on.
    pub bind: String,
    /// The single origin allowed to make credentialed cross-origin calls.
    pub allowed_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
        }
    }
}

/// CORS policy for the front-end.
///
/// Only `allowed_origin` gets an `Access-Control-Allow-Origin` back; other
/// origins get no CORS headers at all. Credentialed requests cannot use
/// wildcard methods or headers, so both are mirrored from the preflight.
pub fn cors_layer(allowed_origin: &str) -> Result<CorsLayer, ServeError> {
    let origin = HeaderValue::from_str(allowed_origin)
        .map_err(|_| ServeError::InvalidOrigin(allowed_origin.to_string()))?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .expose_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}

/// Build the router with every route, CORS and request tracing.
pub fn app(pool: DbPool, config: &ServerConfig) -> Result<Router, ServeError> {
    let cors = cors_layer(&config.allowed_origin)?;

    let router = Router::new()
        .route("/", get(handlers::health::root))
        .route(
            "/transporte",
            get(handlers::transports::list).post(handlers::transports::create),
        )
        .route(
            "/transporte/:id",
            put(handlers::transports::update).delete(handlers::transports::delete),
        )
        .with_state(AppState::new(pool))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(router)
}

/// Bind `config.bind` and serve until Ctrl-C.
pub async fn serve(config: &ServerConfig, pool: DbPool) -> Result<(), ServeError> {
    let router = app(pool, config)?;
    let listener = TcpListener::bind(&config.bind).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    info!("Allowed origin: {}", config.allowed_origin);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
