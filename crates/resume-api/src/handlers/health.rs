//! Health check handler.

use axum::{extract::State, Json};

use crate::state::AppState;
use crate::types::HealthResponse;

/// GET /api/health - Reports whether the document store is reachable.
///
/// Always answers 200; an unreadable archive shows as `"degraded"`.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = state
        .with_repository(|repo| Ok((repo.exists(), repo.versions().ok().map(|v| v.len()))))
        .await;
    let (document_exists, versions) = store.unwrap_or((false, None));

    Json(HealthResponse {
        status: if versions.is_some() { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.config.uptime().as_secs(),
        document: state.repository.path().display().to_string(),
        document_exists,
        versions,
    })
}
