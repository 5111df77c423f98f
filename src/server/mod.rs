mod handlers;
mod state;

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/regions", get(handlers::regions))
        .route("/api/scopes", get(handlers::scopes))
        .route("/api/countries", get(handlers::countries))
        .route("/api/subnational", get(handlers::subnational))
        .route("/api/resolve/regions", get(handlers::resolve_regions))
        .route("/api/resolve/countries", get(handlers::resolve_countries))
        .route("/api/geography", post(handlers::derive_geography))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

pub async fn start(host: &str, port: u16) -> std::io::Result<()> {
    let app = build_router(AppState::default());
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("MELIAF geography API listening on http://{}", addr);

    axum::serve(listener, app).await
}
