pub mod calculations;
pub mod models;
pub mod store;

pub use calculations::MarginWorksheet;
pub use models::{DealInputs, MarginResult};
pub use store::{FileStore, MemoryStore, PersistedSnapshot, SnapshotStore};
