//! File-backed snapshot store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::snapshot::{PersistedSnapshot, SnapshotError, decode, encode};
use super::SnapshotStore;

/// Stores the snapshot as one TOML document at a fixed path.
///
/// The path plays the role of the single storage key: there is exactly one
/// record, and every save overwrites it. Writes go through a sibling
/// temporary file and a rename, so a failed write cannot clobber the
/// previous document.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store backed by the given file path. The file need not
    /// exist yet; `load` reports an absent file as `None`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fallible load, for callers (and tests) that care why it failed.
    pub fn try_load(&self) -> Result<Option<PersistedSnapshot>, SnapshotError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(decode(&text)?))
    }

    /// Fallible save. On any error the previously stored document is left
    /// untouched.
    pub fn try_save(
        &self,
        snapshot: &PersistedSnapshot,
    ) -> Result<(), SnapshotError> {
        let text = encode(snapshot)?;
        let tmp = self.path.with_extension("toml.tmp");
        fs::write(&tmp, text)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> Option<PersistedSnapshot> {
        match self.try_load() {
            Ok(snapshot) => snapshot,
            Err(error) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %error,
                    "ignoring unreadable snapshot, starting from defaults"
                );
                None
            }
        }
    }

    fn save(
        &self,
        snapshot: &PersistedSnapshot,
    ) {
        if let Err(error) = self.try_save(snapshot) {
            tracing::warn!(
                path = %self.path.display(),
                %error,
                "snapshot not saved"
            );
        }
    }
}
