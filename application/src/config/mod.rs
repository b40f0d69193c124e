//! Application-level configuration.
//!
//! - [`SessionParams`]: default mode, snap tie-break and autosave

pub mod session_params;

pub use session_params::SessionParams;
