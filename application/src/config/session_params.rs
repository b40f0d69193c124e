//! Session parameters: how the session use case drives a play-through.
//!
//! These are application-layer choices layered on top of the domain rules:
//! which tie-break snaps computed estimates, and whether the snapshot is
//! written after every completed feature.

use scrum_poker_domain::{GameMode, TieBreak};
use serde::{Deserialize, Serialize};

/// Play-through control parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionParams {
    /// Mode used when the caller does not pick one.
    pub default_mode: GameMode,
    /// Neighbour chosen when an average or median sits between two cards.
    pub tie_break: TieBreak,
    /// Save the snapshot after each completed feature.
    pub autosave: bool,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            default_mode: GameMode::Strict,
            tie_break: TieBreak::Lower,
            autosave: false,
        }
    }
}

impl SessionParams {
    // ==================== Builder Methods ====================

    pub fn with_default_mode(mut self, mode: GameMode) -> Self {
        self.default_mode = mode;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_autosave(mut self, autosave: bool) -> Self {
        self.autosave = autosave;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = SessionParams::default();
        assert_eq!(params.default_mode, GameMode::Strict);
        assert_eq!(params.tie_break, TieBreak::Lower);
        assert!(!params.autosave);
    }

    #[test]
    fn test_builder_chain() {
        let params = SessionParams::default()
            .with_default_mode(GameMode::Median)
            .with_tie_break(TieBreak::Higher)
            .with_autosave(true);

        assert_eq!(params.default_mode, GameMode::Median);
        assert_eq!(params.tie_break, TieBreak::Higher);
        assert!(params.autosave);
    }
}
