//! Backlog import
//!
//! A backlog document is either a single feature object or an array of them.

use super::entities::{Feature, validate_backlog};
use crate::core::error::DomainError;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum BacklogDocument {
    Many(Vec<Feature>),
    One(Feature),
}

/// Parse a JSON backlog, normalizing a single object to a one-element list
///
/// # Example
///
/// ```
/// use scrum_poker_domain::parse_backlog;
///
/// let one = parse_backlog(br#"{"name": "Login", "description": "Sign in"}"#).unwrap();
/// assert_eq!(one.len(), 1);
///
/// let many = parse_backlog(br#"[{"name": "A"}, {"name": "B"}]"#).unwrap();
/// assert_eq!(many.len(), 2);
/// ```
pub fn parse_backlog(bytes: &[u8]) -> Result<Vec<Feature>, DomainError> {
    let document: BacklogDocument = serde_json::from_slice(bytes).map_err(|e| {
        DomainError::format(format!(
            "backlog must be a feature object or an array of feature objects ({})",
            e
        ))
    })?;

    let features = match document {
        BacklogDocument::Many(features) => features,
        BacklogDocument::One(feature) => vec![feature],
    };

    validate_backlog(&features)?;
    Ok(features)
}
