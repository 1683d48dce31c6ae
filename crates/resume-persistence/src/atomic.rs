//! Atomic file operations for crash-safe persistence.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{PersistenceError, Result};

/// Creates a directory and its parents if missing.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| PersistenceError::DirectoryError {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Writes `data` to a hidden temp file next to `path`, synced to disk.
///
/// The temp file lives in the same directory as the target so the final
/// rename or link stays on one filesystem.
fn stage(path: &Path, data: &[u8]) -> io::Result<NamedTempFile> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let mut temp_file = NamedTempFile::new_in(dir)?;
    temp_file.write_all(data)?;
    temp_file.flush()?;
    temp_file.as_file().sync_all()?;
    Ok(temp_file)
}

/// Writes data to a file atomically.
///
/// This function writes to a temporary file first, then renames it over the
/// target path. The target is never observed partially written, and on
/// failure it keeps its previous content.
///
/// # Errors
/// Returns an error if the parent directory cannot be created, or if the
/// write or rename fails.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }

    let write_error = |source: io::Error| PersistenceError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    let temp_file = stage(path, data).map_err(write_error)?;
    temp_file
        .persist(path)
        .map_err(|e| write_error(e.error))?;

    Ok(())
}

/// Writes data to a new file atomically, refusing to replace an existing one.
///
/// Returns `Ok(false)` without touching anything if `path` already exists.
/// Other failures are returned as raw I/O errors so callers can classify
/// them.
pub fn atomic_create(path: &Path, data: &[u8]) -> io::Result<bool> {
    let temp_file = stage(path, data)?;
    match temp_file.persist_noclobber(path) {
        Ok(_) => Ok(true),
        Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(e.error),
    }
}

/// Reads a file, returning None if it doesn't exist.
pub fn read_optional(path: &Path) -> Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(data) => Ok(Some(data)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(PersistenceError::ReadError {
            path: path.to_path_buf(),
            source,
        }),
    }
}
