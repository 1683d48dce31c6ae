//! Version store for archived document snapshots.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::{Local, NaiveDateTime};
use regex::Regex;
use serde::Serialize;
use tracing::{debug, info};

use crate::atomic::atomic_create;
use crate::error::{PersistenceError, Result};

/// Timestamp format embedded in snapshot names.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Extension of snapshot files.
pub const SNAPSHOT_EXTENSION: &str = "json";

/// Highest disambiguating suffix tried within one second.
const MAX_SEQUENCE: u32 = 99;

static SNAPSHOT_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<label>.+)_(?P<stamp>\d{8}_\d{6})(?:_(?P<seq>\d{2}))?\.json$")
        .expect("Invalid snapshot name regex")
});

/// Metadata of one archived snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionRecord {
    /// Snapshot file name, e.g. `resume-data_20260105_091500.json`.
    pub file_name: String,
    /// Source label the snapshot was archived under.
    pub label: String,
    /// Filename-safe timestamp, `YYYYMMDD_HHMMSS`.
    pub timestamp: String,
    /// When the snapshot was taken (local time, second resolution).
    pub created_at: NaiveDateTime,
    /// Same-second disambiguation counter; 0 for the first snapshot.
    pub sequence: u32,
    /// Snapshot size in bytes.
    pub size_bytes: u64,
    /// Full path of the snapshot.
    #[serde(skip)]
    pub path: PathBuf,
}

impl VersionRecord {
    /// Parses snapshot metadata from a file name.
    ///
    /// Returns None for names that do not follow the snapshot pattern.
    fn from_name(dir: &Path, file_name: &str, size_bytes: u64) -> Option<Self> {
        let caps = SNAPSHOT_NAME_REGEX.captures(file_name)?;
        let stamp = caps.name("stamp")?.as_str();
        let created_at = NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).ok()?;
        let sequence = match caps.name("seq") {
            Some(seq) => seq.as_str().parse().ok()?,
            None => 0,
        };

        Some(Self {
            file_name: file_name.to_string(),
            label: caps.name("label")?.as_str().to_string(),
            timestamp: stamp.to_string(),
            created_at,
            sequence,
            size_bytes,
            path: dir.join(file_name),
        })
    }
}

/// Builds the snapshot file name for a label, time and sequence number.
pub fn snapshot_name(label: &str, at: NaiveDateTime, sequence: u32) -> String {
    let stamp = at.format(TIMESTAMP_FORMAT);
    if sequence == 0 {
        format!("{label}_{stamp}.{SNAPSHOT_EXTENSION}")
    } else {
        format!("{label}_{stamp}_{sequence:02}.{SNAPSHOT_EXTENSION}")
    }
}

/// Append-only archive of document snapshots.
///
/// Snapshots are stored as individual files in one directory:
/// ```text
/// archive/
/// ├── resume-data_20260105_091500.json
/// ├── resume-data_20260105_091500_01.json
/// └── resume-data_20260104_182233.json
/// ```
///
/// A snapshot becomes visible only once fully written; existing snapshots
/// are never replaced.
#[derive(Debug, Clone)]
pub struct VersionStore {
    dir: PathBuf,
}

impl VersionStore {
    /// Creates a VersionStore rooted at the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the archive directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Archives `content` under `label`, stamped with the current local time.
    pub fn archive(&self, content: &[u8], label: &str) -> Result<VersionRecord> {
        self.archive_at(content, label, Local::now().naive_local())
    }

    /// Archives `content` under `label`, stamped with `at`.
    ///
    /// If a snapshot with the same label already exists for that second, a
    /// two-digit suffix is appended. Such names sort after the unsuffixed
    /// one when listed newest first.
    pub fn archive_at(&self, content: &[u8], label: &str, at: NaiveDateTime) -> Result<VersionRecord> {
        if label.is_empty() || label.contains(['/', '\\']) {
            return Err(self.archive_error(
                &self.dir,
                io::Error::new(io::ErrorKind::InvalidInput, format!("invalid label {label:?}")),
            ));
        }

        fs::create_dir_all(&self.dir).map_err(|source| self.archive_error(&self.dir, source))?;

        for sequence in 0..=MAX_SEQUENCE {
            let file_name = snapshot_name(label, at, sequence);
            let path = self.dir.join(&file_name);

            let created =
                atomic_create(&path, content).map_err(|source| self.archive_error(&path, source))?;
            if !created {
                debug!(path = %path.display(), "Snapshot name taken, trying next suffix");
                continue;
            }

            info!(path = %path.display(), bytes = content.len(), "Archived previous version");
            return Ok(VersionRecord {
                file_name,
                label: label.to_string(),
                timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
                created_at: at,
                sequence,
                size_bytes: content.len() as u64,
                path,
            });
        }

        Err(self.archive_error(
            &self.dir,
            io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("more than {} snapshots within one second", MAX_SEQUENCE + 1),
            ),
        ))
    }

    /// Lists all snapshots, most recent first.
    ///
    /// Sorted by file name descending. Files that are not snapshots,
    /// including in-flight temp files, are ignored.
    pub fn list(&self) -> Result<Vec<VersionRecord>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(PersistenceError::ReadError {
                    path: self.dir.clone(),
                    source,
                })
            }
        };

        let mut records = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| PersistenceError::ReadError {
                path: self.dir.clone(),
                source,
            })?;

            let Some(file_name) = entry.file_name().to_str().map(String::from) else {
                continue;
            };
            let metadata = match entry.metadata() {
                Ok(metadata) if metadata.is_file() => metadata,
                _ => continue,
            };

            match VersionRecord::from_name(&self.dir, &file_name, metadata.len()) {
                Some(record) => records.push(record),
                None => debug!(file = %file_name, "Skipping non-snapshot file in archive"),
            }
        }

        records.sort_by(|a, b| b.file_name.cmp(&a.file_name));
        Ok(records)
    }

    /// Reads the raw content of a snapshot.
    pub fn read(&self, record: &VersionRecord) -> Result<Vec<u8>> {
        fs::read(&record.path).map_err(|source| PersistenceError::ReadError {
            path: record.path.clone(),
            source,
        })
    }

    fn archive_error(&self, path: &Path, source: io::Error) -> PersistenceError {
        PersistenceError::ArchiveError {
            path: path.to_path_buf(),
            source,
        }
    }
}
