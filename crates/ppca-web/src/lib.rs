//! PPCA Web Server
//!
//! Axum-based HTTP front for the analyze/verify pipeline.

pub mod routes;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use ppca_core::ServiceConfig;
use std::path::Path;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::{info, warn};

use state::AppState;

/// Create the application router.
///
/// With `static_dir`, requests matching no route are served from that
/// directory (the front end); otherwise they are 404s.
pub fn create_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/analyze", post(routes::analysis::analyze_code))
        .route("/verify", post(routes::verification::verify_code))
        .route("/health", get(routes::health::health_check))
        .with_state(state);

    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router.layer(TraceLayer::new_for_http()).layer(cors)
}

/// Run the web server.
pub async fn run_server(config: &ServiceConfig) -> anyhow::Result<()> {
    if !config.has_api_key() {
        warn!(
            "GROQ_API_KEY not configured; /analyze and /verify will fail until it is set"
        );
    }

    let state = AppState::from_config(config);
    let app = create_router(state, config.static_dir.as_deref());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(model = %config.model, "Web server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
