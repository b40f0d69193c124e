//! Game configuration from TOML (`[game]` section)
//!
//! Example configuration:
//!
//! ```toml
//! [game]
//! mode = "median"        # strict, average, median, absolute_majority, relative_majority
//! tie_break = "higher"   # lower or higher
//! ```

use scrum_poker_domain::{ConfigIssue, ConfigIssueCode, GameMode, TieBreak};
use serde::{Deserialize, Serialize};

/// Raw game configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGameConfig {
    /// Default game mode when none is given on the command line
    pub mode: String,
    /// Snap direction when an average or median sits between two cards
    pub tie_break: String,
}

impl Default for FileGameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default().to_string(),
            tie_break: TieBreak::default().to_string(),
        }
    }
}

impl FileGameConfig {
    /// Parse mode string into GameMode enum, returning warnings on failure.
    pub fn parse_mode(&self) -> (GameMode, Vec<ConfigIssue>) {
        match self.mode.parse::<GameMode>() {
            Ok(mode) => (mode, vec![]),
            Err(_) => {
                let issue = ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "game.mode".to_string(),
                        value: self.mode.clone(),
                        valid_values: GameMode::ALL.iter().map(|m| m.to_string()).collect(),
                    },
                    format!(
                        "game.mode: unknown value '{}', falling back to '{}'",
                        self.mode,
                        GameMode::default()
                    ),
                );
                (GameMode::default(), vec![issue])
            }
        }
    }

    /// Parse tie_break string into TieBreak enum, returning warnings on failure.
    pub fn parse_tie_break(&self) -> (TieBreak, Vec<ConfigIssue>) {
        match self.tie_break.parse::<TieBreak>() {
            Ok(tie_break) => (tie_break, vec![]),
            Err(_) => {
                let issue = ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "game.tie_break".to_string(),
                        value: self.tie_break.clone(),
                        valid_values: vec!["lower".to_string(), "higher".to_string()],
                    },
                    format!(
                        "game.tie_break: unknown value '{}', falling back to '{}'",
                        self.tie_break,
                        TieBreak::default()
                    ),
                );
                (TieBreak::default(), vec![issue])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_config_default() {
        let config = FileGameConfig::default();
        assert_eq!(config.mode, "strict");
        assert_eq!(config.tie_break, "lower");
        assert!(config.parse_mode().1.is_empty());
        assert!(config.parse_tie_break().1.is_empty());
    }

    #[test]
    fn test_game_config_deserialize() {
        let toml_str = r#"
[game]
mode = "relative_majority"
tie_break = "higher"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.parse_mode().0, GameMode::RelativeMajority);
        assert_eq!(config.game.parse_tie_break().0, TieBreak::Higher);
    }

    #[test]
    fn test_unknown_values_fall_back_with_warning() {
        let config = FileGameConfig {
            mode: "unanimous".to_string(),
            tie_break: "sideways".to_string(),
        };

        let (mode, issues) = config.parse_mode();
        assert_eq!(mode, GameMode::Strict);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("game.mode"));

        let (tie_break, issues) = config.parse_tie_break();
        assert_eq!(tie_break, TieBreak::Lower);
        assert!(!issues[0].is_error());
    }
}
