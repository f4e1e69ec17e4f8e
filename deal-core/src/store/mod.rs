//! Persistence for the single state snapshot.
//!
//! The whole application state (mode flag, minimum floor, deal inputs) is
//! one record, written in full after every change and read once at startup.
//! Failures on either side are deliberately swallowed: a snapshot that
//! cannot be read means "start from defaults", a snapshot that cannot be
//! written means "keep going without saving". Nothing here is allowed to
//! interrupt the user.

mod file;
mod memory;
mod snapshot;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use snapshot::{MigrationError, PersistedSnapshot, SnapshotError};

/// Key-value persistence seam for the state snapshot.
///
/// Both operations are best-effort by contract: `load` answers `None` for
/// any failure and `save` silently drops a write it cannot complete. The
/// fallible internals live on the concrete stores for tests that care about
/// the actual error.
pub trait SnapshotStore {
    /// Reads the one persisted record, or `None` when it is absent or
    /// unreadable for any reason.
    fn load(&self) -> Option<PersistedSnapshot>;

    /// Serializes and writes the full snapshot, overwriting any prior
    /// value. A failed write leaves the prior stored state untouched.
    fn save(
        &self,
        snapshot: &PersistedSnapshot,
    );
}
