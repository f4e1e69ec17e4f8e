//! In-memory snapshot store.

use std::sync::Mutex;

use super::snapshot::{PersistedSnapshot, decode, encode};
use super::SnapshotStore;

/// Snapshot store backed by a single in-memory slot.
///
/// Drop-in stand-in for [`FileStore`](super::FileStore) in tests and dry
/// runs. It holds the encoded document rather than the struct, so loads
/// exercise the same parse-and-migrate path as the file store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw stored document, if any. Test hook.
    pub fn document(&self) -> Option<String> {
        self.slot.lock().unwrap().clone()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Option<PersistedSnapshot> {
        let slot = self.slot.lock().unwrap();
        let text = slot.as_deref()?;
        match decode(text) {
            Ok(snapshot) => Some(snapshot),
            Err(error) => {
                tracing::warn!(%error, "ignoring unreadable snapshot, starting from defaults");
                None
            }
        }
    }

    fn save(
        &self,
        snapshot: &PersistedSnapshot,
    ) {
        match encode(snapshot) {
            Ok(text) => *self.slot.lock().unwrap() = Some(text),
            Err(error) => tracing::warn!(%error, "snapshot not saved"),
        }
    }
}
