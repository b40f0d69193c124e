//! Game modes for consensus determination
//!
//! This module defines the rules used to turn a round of votes into an estimate.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Rule for determining whether a round reached consensus
///
/// - `Strict`: every vote must be identical (default)
/// - `Average`: mean of the numeric votes, snapped to the deck
/// - `Median`: median of the numeric votes, snapped to the deck
/// - `AbsoluteMajority`: one value must gather more than half of the players
/// - `RelativeMajority`: the most frequent value wins
///
/// # Example
///
/// ```
/// use scrum_poker_domain::GameMode;
///
/// let mode: GameMode = "absolute_majority".parse().unwrap();
/// assert_eq!(mode, GameMode::AbsoluteMajority);
/// assert!(!mode.always_reaches_consensus());
///
/// assert!(GameMode::Average.is_numeric());
/// assert!("unanimous".parse::<GameMode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// All players must agree
    #[default]
    Strict,

    /// Arithmetic mean of numeric votes
    Average,

    /// Median of numeric votes
    Median,

    /// Strictly more than half of the players
    AbsoluteMajority,

    /// Most frequent vote
    RelativeMajority,
}

impl GameMode {
    pub const ALL: [GameMode; 5] = [
        GameMode::Strict,
        GameMode::Average,
        GameMode::Median,
        GameMode::AbsoluteMajority,
        GameMode::RelativeMajority,
    ];

    /// Get the wire name of this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Strict => "strict",
            GameMode::Average => "average",
            GameMode::Median => "median",
            GameMode::AbsoluteMajority => "absolute_majority",
            GameMode::RelativeMajority => "relative_majority",
        }
    }

    /// Get a human-readable description of this mode
    pub fn description(&self) -> &'static str {
        match self {
            GameMode::Strict => "strict (every player must agree)",
            GameMode::Average => "average (mean of the votes)",
            GameMode::Median => "median (middle value of the votes)",
            GameMode::AbsoluteMajority => "absolute majority (more than 50% of the players)",
            GameMode::RelativeMajority => "relative majority (most frequent vote)",
        }
    }

    /// Whether the mode computes a number from the votes instead of counting them
    pub fn is_numeric(&self) -> bool {
        matches!(self, GameMode::Average | GameMode::Median)
    }

    /// Whether any non-empty round is accepted under this mode
    pub fn always_reaches_consensus(&self) -> bool {
        matches!(
            self,
            GameMode::Average | GameMode::Median | GameMode::RelativeMajority
        )
    }

    fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(GameMode::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for GameMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|mode| mode.as_str() == s.trim())
            .copied()
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "Unknown game mode: {}. Valid: {}",
                    s,
                    Self::valid_names()
                ))
            })
    }
}

/// Which neighbour wins when a computed estimate sits exactly between two cards
///
/// ```
/// use scrum_poker_domain::TieBreak;
///
/// assert_eq!(TieBreak::default(), TieBreak::Lower);
/// assert_eq!("higher".parse::<TieBreak>().unwrap(), TieBreak::Higher);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    #[default]
    Lower,
    Higher,
}

impl TieBreak {
    pub fn as_str(&self) -> &'static str {
        match self {
            TieBreak::Lower => "lower",
            TieBreak::Higher => "higher",
        }
    }
}

impl std::fmt::Display for TieBreak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TieBreak {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lower" | "down" => Ok(TieBreak::Lower),
            "higher" | "up" => Ok(TieBreak::Higher),
            _ => Err(DomainError::validation(format!(
                "Unknown tie-break rule: {}. Valid: lower, higher",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_mode() {
        for mode in GameMode::ALL {
            assert_eq!(mode.as_str().parse::<GameMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_parse_unknown_mode_is_validation_error() {
        let err = "majority".parse::<GameMode>().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("relative_majority"));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&GameMode::AbsoluteMajority).unwrap(),
            "\"absolute_majority\""
        );
        let mode: GameMode = serde_json::from_str("\"relative_majority\"").unwrap();
        assert_eq!(mode, GameMode::RelativeMajority);
    }

    #[test]
    fn test_default() {
        assert_eq!(GameMode::default(), GameMode::Strict);
    }

    #[test]
    fn test_mode_families() {
        assert!(GameMode::Median.is_numeric());
        assert!(!GameMode::Strict.is_numeric());
        assert!(GameMode::RelativeMajority.always_reaches_consensus());
        assert!(!GameMode::AbsoluteMajority.always_reaches_consensus());
    }

    #[test]
    fn test_parse_tie_break() {
        assert_eq!("lower".parse::<TieBreak>().unwrap(), TieBreak::Lower);
        assert_eq!("UP".parse::<TieBreak>().unwrap(), TieBreak::Higher);
        assert!("middle".parse::<TieBreak>().is_err());
    }
}
