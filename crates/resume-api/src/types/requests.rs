//! Request DTOs for the API.

use serde::Deserialize;
use serde_json::Value;

use resume_models::DocumentEdit;

/// Version list query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VersionListQuery {
    /// Maximum number of versions to return, newest first.
    pub limit: Option<usize>,
}

/// Body of `POST /api/document/edit`.
#[derive(Debug, Clone, Deserialize)]
pub struct EditRequest {
    /// Document held by the editor, normalized before the edit. The stored
    /// document is used when absent.
    #[serde(default)]
    pub document: Option<Value>,
    pub edit: DocumentEdit,
}
