//! Persistence layer for the resume editor.
//!
//! This crate keeps one current document on disk and an append-only archive
//! of every version it replaced. All writes go through a temp file and a
//! rename, so readers never see a partially written file.
//!
//! # Example
//!
//! ```no_run
//! use resume_persistence::{DocumentRepository, StoreConfig};
//!
//! let repo = DocumentRepository::from_config(&StoreConfig::new("/home/user/resume"));
//!
//! let mut doc = repo.load().unwrap();
//! doc.profile.name = "Ann".to_string();
//! repo.save(&doc).unwrap();
//!
//! for version in repo.versions().unwrap() {
//!     println!("{}", version.file_name);
//! }
//! ```

pub mod atomic;
pub mod config;
pub mod error;
pub mod repository;
pub mod version_store;

pub use config::StoreConfig;
pub use error::{PersistenceError, Result};
pub use repository::DocumentRepository;
pub use version_store::{VersionRecord, VersionStore};
