mod routes;
mod controllers;
mod services;
mod models;
mod api_docs;
mod shared_state;
mod config;
mod error;

use std::net::SocketAddr;
use axum::{Router, routing::get, response::Html};
use crate::routes::api_routes::api_routes;
use utoipa::OpenApi;
use utoipa_scalar::Scalar;
use crate::api_docs::ApiDoc;
use crate::shared_state::{AppState, SharedState};
use crate::config::Config;
use crate::services::location_service::HttpLocationService;

use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // 1. Load configuration
    let config_path = std::env::var("SIZING_CONFIG").unwrap_or_else(|_| "config.json".to_string());
    let config = match Config::load(&config_path) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(path = %config_path, error = %e, "failed to load configuration");
            return;
        }
    };
    tracing::info!(
        offline_mode = config.offline_mode,
        default_pr = config.sizing.default_performance_ratio,
        "configuration loaded"
    );

    // 2. Initialize shared state
    let locator = HttpLocationService::from_config(&config.providers);
    let state = AppState::new(config.offline_mode, locator);
    let shared = SharedState { app: state, config: config.clone() };

    // 3. Start Axum HTTP server
    let app = Router::new()
        .nest("/api", api_routes(shared))
        .route("/scalar", get(|| async {
            Html(Scalar::new(ApiDoc::openapi()).to_html())
        }))
        .fallback_service(ServeDir::new(&config.server.static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("API Server listening on http://{}", addr);
    tracing::info!("Scalar UI: http://{}/scalar", addr);

    if let Err(e) = axum_server::bind(addr)
        .serve(app.into_make_service())
        .await
    {
        tracing::error!(error = %e, "server terminated");
    }
}
