//! Infrastructure layer for scrum-poker
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod snapshot;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileGameConfig, FileOutputConfig, FileSessionConfig};
pub use logging::JsonlSessionLogger;
pub use snapshot::FileSnapshotStore;
