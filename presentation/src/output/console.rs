//! Console output formatter for planning poker sessions

use colored::Colorize;
use scrum_poker_domain::{Card, RoundOutcome, Session, Transition, Votes};

/// Formats session state for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Globally enable or disable ANSI colors
    pub fn set_color(enabled: bool) {
        if !enabled {
            colored::control::set_override(false);
        }
    }

    /// Title banner of a play-through
    pub fn banner(session: &Session) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Scrum Poker"));
        output.push_str(&format!(
            "{} {}\n",
            "Mode:".cyan().bold(),
            session.game_mode().description()
        ));
        let rule = if session.game_mode().always_reaches_consensus() {
            "a round is replayed only when no estimate can be computed"
        } else {
            "rounds without consensus are replayed"
        };
        output.push_str(&format!("{}\n", rule.dimmed()));
        output.push_str(&format!(
            "{} {}\n",
            "Players:".cyan().bold(),
            session
                .players()
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ));
        output.push_str(&format!(
            "{} {} features\n",
            "Backlog:".cyan().bold(),
            session.backlog().len()
        ));

        output
    }

    /// The feature on the table, with round and progress
    pub fn feature_header(session: &Session) -> String {
        let Some(feature) = session.current_feature() else {
            return String::new();
        };
        let progress = session.progress();

        let mut output = String::new();
        output.push_str(&Self::section_header(&format!(
            "Feature {}/{}: {}",
            progress.completed + 1,
            progress.total,
            feature.name
        )));
        if !feature.description.is_empty() {
            output.push_str(&format!("{}\n", feature.description.dimmed()));
        }
        output.push_str(&format!(
            "{} {}  {}\n",
            "Round".yellow().bold(),
            session.current_round(),
            format!("({:.0}% done)", progress.ratio() * 100.0).dimmed()
        ));

        output
    }

    /// The cards of the deck, for the prompt help
    pub fn deck() -> String {
        let cards = Card::DECK
            .iter()
            .map(|card| card.as_str().bold().to_string())
            .collect::<Vec<_>>()
            .join("  ");
        format!("Cards: {}\n", cards)
    }

    /// Who has voted so far; cards stay hidden until the reveal
    pub fn vote_status(session: &Session) -> String {
        let mut output = String::new();
        for player in session.players() {
            let mark = if session.has_voted(&player.id) {
                "voted".green()
            } else {
                "waiting".yellow()
            };
            output.push_str(&format!("  {:<16} {}\n", player.name, mark));
        }
        output
    }

    /// Revealed votes and the evaluation of the round
    ///
    /// The votes are passed in because the session has already moved past the round.
    pub fn round_result(session: &Session, votes: &Votes, outcome: &RoundOutcome) -> String {
        let mut output = String::new();

        output.push_str(&format!("\n{}\n", "Votes:".cyan().bold()));
        for (player_id, card) in votes.iter() {
            let name = session
                .player(player_id)
                .map(|p| p.name.as_str())
                .unwrap_or(player_id);
            output.push_str(&format!("  {:<16} {}\n", name, card.as_str().bold()));
        }

        let verdict = if outcome.is_consensus() {
            outcome.to_string().green().bold()
        } else {
            outcome.to_string().yellow().bold()
        };
        output.push_str(&format!("\n{}\n", verdict));

        output
    }

    /// What happened after the round
    pub fn transition(transition: &Transition) -> String {
        match transition {
            Transition::RoundAdvanced { round } => {
                format!("{} starting round {}\n", "Re-vote:".yellow(), round)
            }
            Transition::FeatureCompleted { feature, .. } => format!(
                "{} {} estimated at {}\n",
                "Done:".green().bold(),
                feature.name,
                feature.estimated_difficulty.as_str().bold()
            ),
        }
    }

    /// Completed features with their estimates and the point total
    pub fn summary(session: &Session) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Results"));
        output.push_str(&format!(
            "{} {}\n\n",
            "Mode:".cyan().bold(),
            session.game_mode()
        ));

        if session.completed_features().is_empty() {
            output.push_str("No feature estimated yet.\n");
        }
        for feature in session.completed_features() {
            output.push_str(&format!(
                "  {:>6}  {}\n",
                feature.estimated_difficulty.as_str().bold(),
                feature.name
            ));
        }

        output.push_str(&format!(
            "\n{} {}\n",
            "Total points:".cyan().bold(),
            session.total_points()
        ));

        if !session.is_finished() {
            let progress = session.progress();
            output.push_str(&format!(
                "{} {}/{} features estimated ({:.0}%)\n",
                "In progress:".yellow().bold(),
                progress.completed,
                progress.total,
                progress.ratio() * 100.0
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!(
            "\n{}\n{}\n{}\n\n",
            line.cyan(),
            format!("  {}", title).cyan().bold(),
            line.cyan()
        )
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n", format!("── {} ──", title).yellow().bold())
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrum_poker_domain::{Feature, GameMode, Player};

    fn session() -> Session {
        let mut session = Session::new();
        session
            .start(
                vec![Player::new("player-0", "Alice"), Player::new("player-1", "Bob")],
                GameMode::Strict,
                vec![
                    Feature::new("Login", "OAuth login"),
                    Feature::new("Search", ""),
                ],
            )
            .unwrap();
        session
    }

    #[test]
    fn test_feature_header_shows_progress() {
        let output = ConsoleFormatter::feature_header(&session());
        assert!(output.contains("Feature 1/2: Login"));
        assert!(output.contains("OAuth login"));
        assert!(output.contains("(0% done)"));
    }

    #[test]
    fn test_round_result_uses_player_names() {
        let mut session = session();
        session.record_vote("player-0", Card::Five).unwrap();
        session.record_vote("player-1", Card::Eight).unwrap();
        let outcome = session.evaluate_round().unwrap();
        let votes = session.votes().clone();
        session.advance(outcome).unwrap();

        let output = ConsoleFormatter::round_result(&session, &votes, &outcome);
        assert!(output.contains("Alice"));
        assert!(output.contains("Bob"));
        assert!(output.contains("No consensus"));
        assert!(session.votes().is_empty());
    }

    #[test]
    fn test_vote_status_hides_cards() {
        let mut session = session();
        session.record_vote("player-1", Card::Thirteen).unwrap();

        let output = ConsoleFormatter::vote_status(&session);
        assert!(output.contains("voted"));
        assert!(output.contains("waiting"));
        assert!(!output.contains("13"));
    }

    #[test]
    fn test_summary_lists_estimates() {
        let mut session = session();
        session.complete_feature(Card::Eight).unwrap();

        let output = ConsoleFormatter::summary(&session);
        assert!(output.contains("Login"));
        assert!(output.contains("Total points:"));
        assert!(output.contains("1/2 features estimated (50%)"));
    }

    #[test]
    fn test_banner_explains_when_rounds_are_replayed() {
        let strict = ConsoleFormatter::banner(&session());
        assert!(strict.contains("rounds without consensus are replayed"));

        let mut session = session();
        session.set_game_mode(GameMode::Median);
        let median = ConsoleFormatter::banner(&session);
        assert!(median.contains("only when no estimate can be computed"));
    }

    #[test]
    fn test_feature_header_empty_when_finished() {
        let mut session = session();
        session.complete_feature(Card::One).unwrap();
        session.complete_feature(Card::Two).unwrap();
        assert!(ConsoleFormatter::feature_header(&session).is_empty());
    }
}
