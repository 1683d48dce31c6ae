//! Router configuration and server setup.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ApiConfig;
use crate::handlers;
use crate::state::AppState;

/// Creates the API router with all routes configured.
pub fn create_router(state: AppState) -> Router {
    let cors = state.config.cors.layer();

    Router::new()
        // Pages
        .route("/", get(handlers::editor_page))
        .route("/preview", get(handlers::preview_page))
        // Document
        .route("/save", post(handlers::save_document))
        .route("/api/document", get(handlers::get_document))
        .route("/api/document/edit", post(handlers::edit_document))
        // Versions
        .route("/backups", get(handlers::list_backups))
        .route("/api/versions", get(handlers::list_versions))
        // Health
        .route("/api/health", get(handlers::health))
        // Apply middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Starts the API server.
pub async fn serve(config: ApiConfig, state: AppState) -> Result<(), std::io::Error> {
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(
        document = %state.repository.path().display(),
        archive = %state.repository.version_store().dir().display(),
        "Resume editor listening on {}",
        config.url()
    );
    axum::serve(listener, create_router(state)).await
}
