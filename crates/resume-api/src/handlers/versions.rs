//! Version listing handlers.

use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::Result;
use crate::state::AppState;
use crate::types::{VersionListQuery, VersionListResponse, VersionSummary};

/// GET /api/versions - Archived versions with metadata, newest first.
pub async fn list_versions(
    State(state): State<AppState>,
    Query(query): Query<VersionListQuery>,
) -> Result<Json<VersionListResponse>> {
    let records = state.with_repository(|repo| Ok(repo.versions()?)).await?;
    let total = records.len();
    let limit = query.limit.unwrap_or(total);

    Ok(Json(VersionListResponse {
        versions: records.iter().take(limit).map(VersionSummary::from).collect(),
        total,
    }))
}

/// GET /backups - Archived file names, newest first.
pub async fn list_backups(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    let records = state.with_repository(|repo| Ok(repo.versions()?)).await?;
    Ok(Json(records.into_iter().map(|r| r.file_name).collect()))
}
