//! Snapshot storage port
//!
//! Abstracts where snapshot bytes live. The session service encodes and
//! validates; the store only moves bytes.

use thiserror::Error;

/// Errors that can occur while storing or fetching a snapshot
#[derive(Error, Debug)]
pub enum SnapshotStoreError {
    #[error("No snapshot found at {0}")]
    NotFound(String),

    #[error("I/O error on {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },
}

/// Storage for a single session snapshot
pub trait SnapshotStore: Send + Sync {
    /// Replace the stored snapshot
    fn save(&self, bytes: &[u8]) -> Result<(), SnapshotStoreError>;

    /// Fetch the stored snapshot
    fn load(&self) -> Result<Vec<u8>, SnapshotStoreError>;

    /// Human-readable location, for messages
    fn location(&self) -> String;
}
