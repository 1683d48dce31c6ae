//! Storage locations for the current document and its archive.
//!
//! # Layout
//!
//! ```text
//! data_dir/
//! ├── resume-data.json          # current document
//! └── archive/
//!     ├── resume-data_20260105_091500.json
//!     └── resume-data_20260104_182233.json
//! ```
//!
//! # Environment Variables (read by the `resume-editor` binary)
//!
//! - `RESUME_EDITOR_DIR`: data directory (default: current directory)
//! - `RESUME_EDITOR_FILE`: current document file name or path
//! - `RESUME_EDITOR_ARCHIVE`: archive directory name or path

use std::path::{Path, PathBuf};

/// Environment variable for the data directory.
pub const DATA_DIR_ENV: &str = "RESUME_EDITOR_DIR";

/// Environment variable for the current document file.
pub const DOCUMENT_FILE_ENV: &str = "RESUME_EDITOR_FILE";

/// Environment variable for the archive directory.
pub const ARCHIVE_DIR_ENV: &str = "RESUME_EDITOR_ARCHIVE";

/// Default current document file name.
pub const DEFAULT_DOCUMENT_FILE: &str = "resume-data.json";

/// Default archive directory name.
pub const DEFAULT_ARCHIVE_DIR: &str = "archive";

/// Where the repository keeps its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Base directory; relative file and archive paths resolve against it.
    pub data_dir: PathBuf,
    /// Current document file.
    pub document_file: PathBuf,
    /// Archive directory.
    pub archive_dir: PathBuf,
}

impl StoreConfig {
    /// Creates a configuration with default file names under `data_dir`.
    pub fn new(data_dir: impl AsRef<str>) -> Self {
        Self {
            data_dir: expand(data_dir.as_ref()),
            document_file: PathBuf::from(DEFAULT_DOCUMENT_FILE),
            archive_dir: PathBuf::from(DEFAULT_ARCHIVE_DIR),
        }
    }

    /// Sets the current document file.
    pub fn with_document_file(mut self, file: impl AsRef<str>) -> Self {
        self.document_file = expand(file.as_ref());
        self
    }

    /// Sets the archive directory.
    pub fn with_archive_dir(mut self, dir: impl AsRef<str>) -> Self {
        self.archive_dir = expand(dir.as_ref());
        self
    }

    /// Returns the resolved path of the current document.
    pub fn document_path(&self) -> PathBuf {
        resolve(&self.data_dir, &self.document_file)
    }

    /// Returns the resolved archive directory.
    pub fn archive_path(&self) -> PathBuf {
        resolve(&self.data_dir, &self.archive_dir)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).to_string())
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
