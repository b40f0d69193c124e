//! Planning poker session domain.
//!
//! - [`store::Session`]: the aggregate root and its guarded operations
//! - [`entities::Player`], [`entities::Feature`], [`entities::CompletedFeature`]
//! - [`backlog::parse_backlog`]: backlog import
//! - [`export::ResultsExport`]: the downloadable results projection

pub mod backlog;
pub mod entities;
pub mod export;
pub mod store;
