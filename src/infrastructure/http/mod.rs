use axum::{middleware, routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::controllers::{health, synthesis::SynthesisController};
use crate::infrastructure::config::Config;
use crate::infrastructure::middleware::request_id_middleware;

/// Build the application router with all routes configured.
///
/// Separated from server startup so tests can spawn the app on an
/// ephemeral port with a stubbed synthesis backend.
pub fn build_router(synthesis_controller: Arc<SynthesisController>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/synthesize", post(SynthesisController::synthesize))
        .with_state(synthesis_controller)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    synthesis_controller: Arc<SynthesisController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(synthesis_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
