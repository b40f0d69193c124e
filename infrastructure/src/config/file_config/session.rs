//! Session configuration from TOML (`[session]` section)
//!
//! ```toml
//! [session]
//! autosave = true
//! snapshot_path = "~/poker/session.json"
//! event_log = "~/poker/session.events.jsonl"
//! ```

use scrum_poker_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw session persistence configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Save the snapshot after every completed feature
    pub autosave: bool,
    /// Where snapshots are written (defaults to the data directory)
    pub snapshot_path: Option<String>,
    /// JSONL session event log, disabled when unset
    pub event_log: Option<String>,
}

impl FileSessionConfig {
    /// Resolved snapshot path, falling back to `<data_dir>/scrum-poker/session.json`
    pub fn snapshot_path(&self) -> Option<PathBuf> {
        match self.snapshot_path.as_deref() {
            Some(path) if !path.trim().is_empty() => Some(expand_home(path)),
            _ => dirs::data_dir().map(|d| d.join("scrum-poker").join("session.json")),
        }
    }

    /// Resolved event log path, if enabled
    pub fn event_log_path(&self) -> Option<PathBuf> {
        self.event_log
            .as_deref()
            .filter(|path| !path.trim().is_empty())
            .map(expand_home)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        for (field, value) in [
            ("session.snapshot_path", &self.snapshot_path),
            ("session.event_log", &self.event_log),
        ] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::EmptyPath {
                        field: field.to_string(),
                    },
                    format!("{}: empty path is ignored", field),
                ));
            }
        }

        if let (Some(snapshot), Some(event_log)) = (self.snapshot_path(), self.event_log_path())
            && snapshot == event_log
        {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ConflictingPaths {
                    first: "session.snapshot_path".to_string(),
                    second: "session.event_log".to_string(),
                },
                format!(
                    "session.event_log would overwrite the snapshot at {}",
                    snapshot.display()
                ),
            ));
        }

        issues
    }
}

fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(path)),
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_config_deserialize() {
        let toml_str = r#"
[session]
autosave = true
snapshot_path = "/tmp/poker/session.json"
event_log = "/tmp/poker/events.jsonl"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.session.autosave);
        assert_eq!(
            config.session.snapshot_path(),
            Some(PathBuf::from("/tmp/poker/session.json"))
        );
        assert_eq!(
            config.session.event_log_path(),
            Some(PathBuf::from("/tmp/poker/events.jsonl"))
        );
    }

    #[test]
    fn test_event_log_disabled_by_default() {
        let config = FileSessionConfig::default();
        assert!(!config.autosave);
        assert!(config.event_log_path().is_none());
    }

    #[test]
    fn test_empty_paths_are_reported() {
        let config = FileSessionConfig {
            snapshot_path: Some("  ".to_string()),
            event_log: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(config.validate().len(), 2);
        assert!(config.event_log_path().is_none());
    }

    #[test]
    fn test_event_log_on_snapshot_is_an_error() {
        let config = FileSessionConfig {
            snapshot_path: Some("/tmp/poker/session.json".to_string()),
            event_log: Some("/tmp/poker/session.json".to_string()),
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert!(matches!(
            issues[0].code,
            ConfigIssueCode::ConflictingPaths { .. }
        ));
    }

    #[test]
    fn test_expand_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/poker.json"), home.join("poker.json"));
        }
        assert_eq!(expand_home("relative.json"), PathBuf::from("relative.json"));
    }
}
