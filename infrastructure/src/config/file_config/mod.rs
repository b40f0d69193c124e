//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application parameters
//! with [`FileConfig::to_session_params`].

mod game;
mod output;
mod session;

pub use game::FileGameConfig;
pub use output::FileOutputConfig;
pub use session::FileSessionConfig;

use scrum_poker_application::SessionParams;
use scrum_poker_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Game rules
    pub game: FileGameConfig,
    /// Snapshot and event log persistence
    pub session: FileSessionConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Unknown enum values fall back to defaults and are reported as
    /// warnings; empty paths are reported and ignored.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.game.parse_mode().1);
        issues.extend(self.game.parse_tie_break().1);
        issues.extend(self.session.validate());

        issues
    }

    /// Build session parameters, falling back to defaults for invalid values.
    pub fn to_session_params(&self) -> SessionParams {
        SessionParams::default()
            .with_default_mode(self.game.parse_mode().0)
            .with_tie_break(self.game.parse_tie_break().0)
            .with_autosave(self.session.autosave)
    }
}
