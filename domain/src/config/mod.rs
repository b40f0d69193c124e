//! Configuration domain types.
//!
//! - [`validation::ConfigIssue`]: a problem detected while validating settings

pub mod validation;
