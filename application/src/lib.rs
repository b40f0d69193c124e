//! Application layer for scrum-poker
//!
//! This crate contains the session use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SessionParams;
pub use ports::{
    session_logger::{EventPosition, NoSessionEventLogger, SessionEvent, SessionEventLogger},
    snapshot_store::{SnapshotStore, SnapshotStoreError},
};
pub use use_cases::run_session::{RunSessionError, RunSessionUseCase};
