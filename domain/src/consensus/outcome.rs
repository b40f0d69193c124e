//! Outcome of a round evaluation

use crate::core::card::Card;
use serde::{Deserialize, Serialize};

/// Result of aggregating one round of votes
///
/// When `consensus` is false the round must be replayed and `value` is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub consensus: bool,
    pub value: Option<Card>,
}

impl RoundOutcome {
    /// Consensus reached on `value`
    pub fn reached(value: Card) -> Self {
        Self {
            consensus: true,
            value: Some(value),
        }
    }

    /// No consensus, a new round is needed
    pub fn no_consensus() -> Self {
        Self {
            consensus: false,
            value: None,
        }
    }

    pub fn is_consensus(&self) -> bool {
        self.consensus
    }

    /// The value to record for the feature, if the round was accepted
    pub fn accepted_value(&self) -> Option<Card> {
        if self.consensus { self.value } else { None }
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.accepted_value() {
            Some(value) => write!(f, "Consensus on {}", value),
            None => write!(f, "No consensus"),
        }
    }
}
