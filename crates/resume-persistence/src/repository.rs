//! Repository for the current résumé document.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use resume_models::{parse, serialize, ResumeDocument};
use tracing::{debug, info};

use crate::atomic::{atomic_write, read_optional};
use crate::config::StoreConfig;
use crate::error::{PersistenceError, Result};
use crate::version_store::{VersionRecord, VersionStore};

/// Loads and saves the current document, archiving every version it replaces.
///
/// Saves run one at a time per repository; loads and version listings take
/// no lock.
#[derive(Debug)]
pub struct DocumentRepository {
    path: PathBuf,
    label: String,
    versions: VersionStore,
    save_lock: Mutex<()>,
}

impl DocumentRepository {
    /// Creates a repository for the document at `path`, archiving into `versions`.
    pub fn new(path: impl Into<PathBuf>, versions: VersionStore) -> Self {
        let path = path.into();
        let label = path
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .unwrap_or("document")
            .to_string();

        Self {
            path,
            label,
            versions,
            save_lock: Mutex::new(()),
        }
    }

    /// Creates a repository from a storage configuration.
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.document_path(), VersionStore::new(config.archive_path()))
    }

    /// Returns the path of the current document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the label snapshots are archived under.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the version store.
    pub fn version_store(&self) -> &VersionStore {
        &self.versions
    }

    /// Returns true if a current document has been saved.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Loads the current document, or the empty document if none is stored.
    ///
    /// # Errors
    /// Fails if the document exists but cannot be read, or if its content is
    /// not document-shaped.
    pub fn load(&self) -> Result<ResumeDocument> {
        match read_optional(&self.path)? {
            Some(bytes) => parse(&bytes).map_err(|source| PersistenceError::Malformed {
                path: self.path.clone(),
                source,
            }),
            None => {
                debug!(path = %self.path.display(), "No current document, using empty document");
                Ok(ResumeDocument::empty())
            }
        }
    }

    /// Saves `doc` as the current document.
    ///
    /// The stored bytes of the previous document, if any, are archived
    /// before the new content is written. Returns the archived version.
    ///
    /// # Errors
    /// Returns [`PersistenceError::ArchiveError`] if the backup fails,
    /// including when the previous document exists but cannot be read, or a
    /// write error if the new content cannot be committed. In both cases
    /// the current document is left as it was.
    pub fn save(&self, doc: &ResumeDocument) -> Result<Option<VersionRecord>> {
        let _guard = self.save_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let archived = match self.read_previous()? {
            Some(previous) => Some(self.versions.archive(&previous, &self.label)?),
            None => None,
        };

        let data = serialize(doc)?;
        atomic_write(&self.path, &data)?;

        info!(
            path = %self.path.display(),
            bytes = data.len(),
            archived = archived.as_ref().map(|r| r.file_name.as_str()).unwrap_or("none"),
            "Saved document"
        );

        Ok(archived)
    }

    /// Reads the bytes about to be archived. Failing to read them is a
    /// failure of the archive step.
    fn read_previous(&self) -> Result<Option<Vec<u8>>> {
        read_optional(&self.path).map_err(|err| match err {
            PersistenceError::ReadError { path, source } => {
                PersistenceError::ArchiveError { path, source }
            }
            other => other,
        })
    }

    /// Lists archived versions, most recent first.
    pub fn versions(&self) -> Result<Vec<VersionRecord>> {
        self.versions.list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resume_models::{Experience, SkillGroup};
    use std::fs;
    use std::sync::Arc;
    use tempfile::{tempdir, TempDir};

    fn make_repo() -> (TempDir, DocumentRepository) {
        let dir = tempdir().unwrap();
        let repo = DocumentRepository::from_config(&StoreConfig::new(dir.path().to_str().unwrap()));
        (dir, repo)
    }

    fn named(name: &str) -> ResumeDocument {
        let mut doc = ResumeDocument::default();
        doc.profile.name = name.to_string();
        doc
    }

    #[test]
    fn test_label_from_file_stem() {
        let repo = DocumentRepository::new("/data/resume-data.json", VersionStore::new("/data/archive"));
        assert_eq!(repo.label(), "resume-data");
    }

    #[test]
    fn test_load_missing_returns_default() {
        let (_dir, repo) = make_repo();

        assert!(!repo.exists());
        assert_eq!(repo.load().unwrap(), ResumeDocument::default());
    }

    #[test]
    fn test_first_save_creates_no_version() {
        let (_dir, repo) = make_repo();

        let archived = repo.save(&named("Ann")).unwrap();

        assert!(archived.is_none());
        assert!(repo.versions().unwrap().is_empty());
        assert_eq!(repo.load().unwrap(), named("Ann"));
    }

    #[test]
    fn test_save_archives_previous_bytes() {
        let (_dir, repo) = make_repo();
        repo.save(&named("First")).unwrap();
        let previous = fs::read(repo.path()).unwrap();

        let mut second = named("Second");
        second.skills.push(SkillGroup::new("Languages", "Rust"));
        let archived = repo.save(&second).unwrap().unwrap();

        let versions = repo.versions().unwrap();
        assert_eq!(versions.len(), 1);
        assert_eq!(versions[0], archived);
        assert_eq!(repo.version_store().read(&archived).unwrap(), previous);
        assert_eq!(fs::read(repo.path()).unwrap(), serialize(&second).unwrap());
    }

    #[test]
    fn test_archive_keeps_raw_bytes() {
        let (_dir, repo) = make_repo();
        // Hand-edited content with unknown fields and odd formatting.
        let raw = b"{\"profile\":{\"name\":\"Ann\"},\"extra\":true}";
        fs::write(repo.path(), raw).unwrap();

        let archived = repo.save(&named("Ann")).unwrap().unwrap();

        assert_eq!(repo.version_store().read(&archived).unwrap(), raw);
    }

    #[test]
    fn test_archive_label_is_document_stem() {
        let (_dir, repo) = make_repo();
        repo.save(&named("One")).unwrap();
        let archived = repo.save(&named("Two")).unwrap().unwrap();

        assert_eq!(archived.label, "resume-data");
        assert!(archived.file_name.starts_with("resume-data_"));
    }

    #[test]
    fn test_same_second_saves_list_newest_first() {
        // These saves land within one second, so ordering comes from the
        // collision suffix. Ordering across distinct timestamps is covered
        // in version_store.
        let (_dir, repo) = make_repo();
        for name in ["One", "Two", "Three", "Four"] {
            repo.save(&named(name)).unwrap();
        }

        let versions = repo.versions().unwrap();
        assert_eq!(versions.len(), 3);
        assert!(versions.windows(2).all(|w| w[0].file_name > w[1].file_name));

        // Newest archived version holds the document replaced last.
        let newest = parse(&repo.version_store().read(&versions[0]).unwrap()).unwrap();
        assert_eq!(newest.profile.name, "Three");
        let oldest = parse(&repo.version_store().read(&versions[2]).unwrap()).unwrap();
        assert_eq!(oldest.profile.name, "One");
    }

    #[test]
    fn test_failed_archive_leaves_document_untouched() {
        let dir = tempdir().unwrap();
        let config = StoreConfig::new(dir.path().to_str().unwrap());
        let repo = DocumentRepository::from_config(&config);
        repo.save(&named("Kept")).unwrap();
        let before = fs::read(repo.path()).unwrap();

        // A regular file where the archive directory should be.
        fs::write(config.archive_path(), b"blocked").unwrap();

        let err = repo.save(&named("Lost")).unwrap_err();
        assert!(err.is_archive_failure());
        assert_eq!(fs::read(repo.path()).unwrap(), before);
        assert_eq!(repo.load().unwrap(), named("Kept"));
    }

    #[test]
    fn test_unreadable_previous_is_archive_failure() {
        let dir = tempdir().unwrap();
        // The document path is a directory, so the previous version cannot be read.
        let doc_path = dir.path().join("resume-data.json");
        fs::create_dir(&doc_path).unwrap();
        fs::write(doc_path.join("keep"), b"x").unwrap();
        let repo = DocumentRepository::new(&doc_path, VersionStore::new(dir.path().join("archive")));

        let err = repo.save(&named("Ann")).unwrap_err();
        assert!(err.is_archive_failure(), "unexpected error: {err:?}");
        assert!(matches!(
            &err,
            PersistenceError::ArchiveError { path, .. } if path == &doc_path
        ));
        assert!(doc_path.join("keep").exists());
        assert!(!dir.path().join("archive").exists());
    }

    #[test]
    fn test_load_malformed_document() {
        let (_dir, repo) = make_repo();
        fs::write(repo.path(), b"[1, 2, 3]").unwrap();

        let err = repo.load().unwrap_err();
        assert!(matches!(err, PersistenceError::Malformed { .. }));
    }

    #[test]
    fn test_load_invalid_json() {
        let (_dir, repo) = make_repo();
        fs::write(repo.path(), b"{ not json").unwrap();

        assert!(matches!(
            repo.load(),
            Err(PersistenceError::Malformed { .. })
        ));
    }

    #[test]
    fn test_load_normalizes_partial_document() {
        let (_dir, repo) = make_repo();
        fs::write(
            repo.path(),
            r#"{"profile": {"name": "Ann"}, "experience": [{"title": "Dev"}]}"#,
        )
        .unwrap();

        let doc = repo.load().unwrap();
        assert_eq!(doc.profile.name, "Ann");
        assert_eq!(doc.experience, vec![Experience::new("Dev", "", "")]);
        assert!(doc.skills.is_empty());
    }

    #[test]
    fn test_concurrent_saves_archive_every_version() {
        let (_dir, repo) = make_repo();
        repo.save(&named("Start")).unwrap();
        let repo = Arc::new(repo);

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let repo = Arc::clone(&repo);
                std::thread::spawn(move || repo.save(&named(&format!("Writer {i}"))).unwrap())
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // Every save found a predecessor, so every save archived one.
        assert_eq!(repo.versions().unwrap().len(), 8);
    }
}
