//! CLI command definitions

use clap::{Parser, Subcommand};
use scrum_poker_domain::GameMode;
use std::path::PathBuf;

/// CLI arguments for scrum-poker
#[derive(Parser, Debug)]
#[command(name = "scrum-poker")]
#[command(author, version, about = "Planning poker in the terminal")]
#[command(long_about = r#"
Scrum Poker runs a planning poker session for a backlog of features.

Every player picks a card from the deck (0 1 2 3 5 8 13 21 ? coffee).
Once everyone has voted, the round is evaluated with the selected game mode:
consensus completes the feature, otherwise the table votes again.

Configuration files are loaded from (in priority order):
1. --config <path>           Explicit config file
2. ./scrum-poker.toml        Project-level config
3. ~/.config/scrum-poker/config.toml   Global config

Example:
  scrum-poker play --backlog backlog.json -p Alice -p Bob -p Carol --mode median
  scrum-poker resume
  scrum-poker export session.json --out results.json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Append session events to this JSONL file
    #[arg(long, value_name = "PATH", global = true)]
    pub event_log: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start a new session from a backlog file
    Play {
        /// Backlog JSON: a single feature object or an array of features
        #[arg(short, long, value_name = "FILE")]
        backlog: PathBuf,

        /// Player names, in seating order (repeat for each player)
        #[arg(short, long = "player", value_name = "NAME", required = true)]
        players: Vec<String>,

        /// Game mode: strict, average, median, absolute_majority, relative_majority
        #[arg(short, long, value_parser = parse_game_mode)]
        mode: Option<GameMode>,

        /// Where to save the session snapshot
        #[arg(short, long, value_name = "FILE")]
        snapshot: Option<PathBuf>,
    },

    /// Continue a saved session
    Resume {
        /// Snapshot file (defaults to the configured snapshot path)
        snapshot: Option<PathBuf>,
    },

    /// Write the estimated features of a snapshot as JSON
    Export {
        /// Snapshot file
        snapshot: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Print the results of a snapshot
    Summary {
        /// Snapshot file
        snapshot: PathBuf,
    },
}

fn parse_game_mode(value: &str) -> Result<GameMode, String> {
    value.parse::<GameMode>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_play() {
        let cli = Cli::try_parse_from([
            "scrum-poker",
            "-vv",
            "play",
            "--backlog",
            "backlog.json",
            "-p",
            "Alice",
            "-p",
            "Bob",
            "--mode",
            "absolute_majority",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Command::Play {
                backlog,
                players,
                mode,
                snapshot,
            }) => {
                assert_eq!(backlog, PathBuf::from("backlog.json"));
                assert_eq!(players, vec!["Alice", "Bob"]);
                assert_eq!(mode, Some(GameMode::AbsoluteMajority));
                assert!(snapshot.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_play_requires_players() {
        assert!(Cli::try_parse_from(["scrum-poker", "play", "--backlog", "b.json"]).is_err());
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let result = Cli::try_parse_from([
            "scrum-poker",
            "play",
            "-b",
            "b.json",
            "-p",
            "Alice",
            "-m",
            "unanimous",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_export_and_resume() {
        let cli =
            Cli::try_parse_from(["scrum-poker", "export", "s.json", "--out", "r.json"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Export { out: Some(_), .. })
        ));

        let cli = Cli::try_parse_from(["scrum-poker", "resume"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Resume { snapshot: None })
        ));
    }

    #[test]
    fn test_show_config_without_subcommand() {
        let cli = Cli::try_parse_from(["scrum-poker", "--show-config", "--no-config"]).unwrap();
        assert!(cli.show_config);
        assert!(cli.no_config);
        assert!(cli.command.is_none());
    }
}
