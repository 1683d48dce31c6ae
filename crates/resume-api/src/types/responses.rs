//! Response DTOs for the API.

use chrono::NaiveDateTime;
use serde::Serialize;

use resume_persistence::VersionRecord;

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// `"ok"`, or `"degraded"` when the archive cannot be listed.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
    pub uptime_seconds: u64,
    /// Path of the current document.
    pub document: String,
    /// Whether a document has been saved yet.
    pub document_exists: bool,
    /// Number of archived versions, if the archive could be listed.
    pub versions: Option<usize>,
}

/// Save response.
#[derive(Debug, Clone, Serialize)]
pub struct SaveResponse {
    /// Always true; failures are reported as errors.
    pub success: bool,
    /// File name of the version archived by this save, if any.
    pub archived: Option<String>,
}

/// Version list response.
#[derive(Debug, Clone, Serialize)]
pub struct VersionListResponse {
    /// Archived versions, newest first.
    pub versions: Vec<VersionSummary>,
    /// Total number of archived versions.
    pub total: usize,
}

/// Version summary for list responses.
#[derive(Debug, Clone, Serialize)]
pub struct VersionSummary {
    /// Snapshot file name.
    pub file_name: String,
    /// Filename-safe timestamp.
    pub timestamp: String,
    /// When the snapshot was taken.
    pub created_at: NaiveDateTime,
    /// Snapshot size in bytes.
    pub size_bytes: u64,
}

impl From<&VersionRecord> for VersionSummary {
    fn from(record: &VersionRecord) -> Self {
        Self {
            file_name: record.file_name.clone(),
            timestamp: record.timestamp.clone(),
            created_at: record.created_at,
            size_bytes: record.size_bytes,
        }
    }
}
