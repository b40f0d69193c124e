//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Every session, engine and codec operation reports failures through one of
/// these four categories. None of them is retryable: the operations are local
/// and deterministic, so the caller is expected to correct its input instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed or out-of-range caller input
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Operation invoked while the session is in an incompatible state
    #[error("Invalid session state: {0}")]
    State(String),

    /// Numeric aggregation requested without any numeric vote
    #[error("Cannot aggregate votes: {0}")]
    Aggregation(String),

    /// Snapshot or backlog bytes do not have the expected structure
    #[error("Malformed document: {0}")]
    Format(String),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation(message.into())
    }

    pub fn state(message: impl Into<String>) -> Self {
        DomainError::State(message.into())
    }

    pub fn aggregation(message: impl Into<String>) -> Self {
        DomainError::Aggregation(message.into())
    }

    pub fn format(message: impl Into<String>) -> Self {
        DomainError::Format(message.into())
    }

    /// Check if this error was caused by invalid caller input
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation(_))
    }

    /// Check if this error was caused by an incompatible session state
    pub fn is_state(&self) -> bool {
        matches!(self, DomainError::State(_))
    }

    /// Check if this error was caused by a missing numeric basis
    pub fn is_aggregation(&self) -> bool {
        matches!(self, DomainError::Aggregation(_))
    }

    /// Check if this error was caused by an unparseable document
    pub fn is_format(&self) -> bool {
        matches!(self, DomainError::Format(_))
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Format(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = DomainError::state("no feature left to complete");
        assert_eq!(
            error.to_string(),
            "Invalid session state: no feature left to complete"
        );
    }

    #[test]
    fn test_category_checks() {
        assert!(DomainError::validation("x").is_validation());
        assert!(DomainError::state("x").is_state());
        assert!(DomainError::aggregation("x").is_aggregation());
        assert!(DomainError::format("x").is_format());
        assert!(!DomainError::format("x").is_validation());
    }

    #[test]
    fn test_from_json_error_is_format() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert!(DomainError::from(err).is_format());
    }
}
