//! Document handlers.

use axum::{body::Bytes, extract::State, Json};
use tracing::{debug, info};

use resume_models::{normalize, parse, ResumeDocument};

use crate::error::{ApiError, Result};
use crate::state::AppState;
use crate::types::{EditRequest, SaveResponse};

/// GET /api/document - Current document in canonical form.
pub async fn get_document(State(state): State<AppState>) -> Result<Json<ResumeDocument>> {
    let doc = state.with_repository(|repo| Ok(repo.load()?)).await?;
    Ok(Json(doc))
}

/// POST /save - Replace the current document, archiving the previous one.
///
/// The body must be a complete document; omitted fields are saved as
/// empty, not carried over from the stored version.
pub async fn save_document(State(state): State<AppState>, body: Bytes) -> Result<Json<SaveResponse>> {
    let doc = parse(&body)?.without_blank_lines();
    let archived = state.with_repository(move |repo| Ok(repo.save(&doc)?)).await?;

    info!(
        archived = archived.as_ref().map(|r| r.file_name.as_str()).unwrap_or("none"),
        "Document saved from editor"
    );

    Ok(Json(SaveResponse {
        success: true,
        archived: archived.map(|r| r.file_name),
    }))
}

/// POST /api/document/edit - Apply one edit and return the updated document.
///
/// Nothing is stored. The editor sends the document it holds and keeps the
/// result; without a document the stored one is edited.
pub async fn edit_document(State(state): State<AppState>, body: Bytes) -> Result<Json<ResumeDocument>> {
    let request: EditRequest = serde_json::from_slice(&body)
        .map_err(|e| ApiError::BadRequest(format!("invalid edit request: {e}")))?;

    let doc = match request.document {
        Some(raw) => normalize(&raw)?,
        None => state.with_repository(|repo| Ok(repo.load()?)).await?,
    };

    debug!(edit = ?request.edit, "Applying edit");
    Ok(Json(doc.apply(request.edit)?))
}
