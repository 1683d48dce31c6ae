//! HTML page handlers.

use axum::{extract::State, response::Html};

use crate::error::{ApiError, Result};
use crate::render::{render_editor, render_preview};
use crate::state::AppState;

/// GET / - Editor page with the current document loaded.
pub async fn editor_page(State(state): State<AppState>) -> Result<Html<String>> {
    let doc = state.with_repository(|repo| Ok(repo.load()?)).await?;
    let page = render_editor(&doc).map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Html(page))
}

/// GET /preview - Print-ready rendering of the current document.
pub async fn preview_page(State(state): State<AppState>) -> Result<Html<String>> {
    let doc = state.with_repository(|repo| Ok(repo.load()?)).await?;
    Ok(Html(render_preview(&doc)))
}
