//! Local storage for board data
//!
//! Everything is kept as one JSON string under a single key of a
//! key-value store:
//! - [`KeyValueStore`] - async get/set/remove string store
//! - [`FileStore`] / [`MemoryStore`] - file-backed and volatile stores
//! - [`BoardStorage`] - the board array on top of a store

pub mod boards;
pub mod store;

pub use boards::BoardStorage;
pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Common error types for storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
