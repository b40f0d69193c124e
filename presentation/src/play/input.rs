//! Parsing of a line typed at the voting prompt

use scrum_poker_domain::Card;

/// What a player typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayInput {
    Empty,
    Card(Card),
    Help,
    Cards,
    Status,
    Save,
    Quit,
    Unknown(String),
}

/// Parse a prompt line: a card label or a slash command
pub fn parse_input(line: &str) -> PlayInput {
    let line = line.trim();
    if line.is_empty() {
        return PlayInput::Empty;
    }

    if line.starts_with('/') {
        return match line {
            "/help" | "/h" | "/?" => PlayInput::Help,
            "/cards" | "/deck" => PlayInput::Cards,
            "/status" | "/s" => PlayInput::Status,
            "/save" => PlayInput::Save,
            "/quit" | "/exit" | "/q" => PlayInput::Quit,
            _ => PlayInput::Unknown(line.to_string()),
        };
    }

    match line.to_lowercase().as_str() {
        "c" | "☕" => PlayInput::Card(Card::Coffee),
        label => label
            .parse::<Card>()
            .map(PlayInput::Card)
            .unwrap_or_else(|_| PlayInput::Unknown(line.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards() {
        assert_eq!(parse_input(" 13 "), PlayInput::Card(Card::Thirteen));
        assert_eq!(parse_input("?"), PlayInput::Card(Card::Unknown));
        assert_eq!(parse_input("Coffee"), PlayInput::Card(Card::Coffee));
        assert_eq!(parse_input("c"), PlayInput::Card(Card::Coffee));
    }

    #[test]
    fn test_commands() {
        assert_eq!(parse_input("/q"), PlayInput::Quit);
        assert_eq!(parse_input("/save"), PlayInput::Save);
        assert_eq!(parse_input("/deck"), PlayInput::Cards);
        assert_eq!(parse_input("/status"), PlayInput::Status);
        assert_eq!(parse_input("/?"), PlayInput::Help);
    }

    #[test]
    fn test_unknown_and_empty() {
        assert_eq!(parse_input("   "), PlayInput::Empty);
        assert_eq!(parse_input("4"), PlayInput::Unknown("4".to_string()));
        assert_eq!(parse_input("/undo"), PlayInput::Unknown("/undo".to_string()));
    }
}
