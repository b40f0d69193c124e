//! File-backed [`SnapshotStore`].

use scrum_poker_application::{SnapshotStore, SnapshotStoreError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Stores the snapshot as a single JSON file.
///
/// Writes go to a sibling temp file first and are then renamed over the
/// target, so a crash mid-write leaves the previous snapshot intact.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> SnapshotStoreError {
        SnapshotStoreError::Io {
            location: self.location(),
            source,
        }
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn save(&self, bytes: &[u8]) -> Result<(), SnapshotStoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        std::fs::write(&tmp, bytes).map_err(|e| self.io_error(e))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;

        debug!("Saved snapshot ({} bytes) to {}", bytes.len(), self.path.display());
        Ok(())
    }

    fn load(&self) -> Result<Vec<u8>, SnapshotStoreError> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(SnapshotStoreError::NotFound(self.location()))
            }
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSnapshotStore::new(dir.path().join("deep").join("session.json"));

        store.save(b"{\"gameStarted\":true}").unwrap();
        assert_eq!(store.load().unwrap(), b"{\"gameStarted\":true}");

        store.save(b"{}").unwrap();
        assert_eq!(store.load().unwrap(), b"{}");
        assert!(!dir.path().join("deep").join("session.json.tmp").exists());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSnapshotStore::new(dir.path().join("missing.json"));

        let err = store.load().unwrap_err();
        assert!(matches!(err, SnapshotStoreError::NotFound(_)));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_directory_target_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSnapshotStore::new(dir.path());

        assert!(matches!(
            store.load().unwrap_err(),
            SnapshotStoreError::Io { .. }
        ));
    }
}
