//! REPL (Read-Eval-Print Loop) for a planning poker session

use crate::ConsoleFormatter;
use crate::play::input::{PlayInput, parse_input};
use crate::play::round::{RoundClose, close_round};
use colored::Colorize;
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use scrum_poker_application::{RunSessionError, RunSessionUseCase};

/// How a play-through ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayExit {
    /// Every feature of the backlog was estimated
    Finished,
    /// The whole table asked for a coffee break
    CoffeeBreak,
    /// A player quit at the prompt
    Quit,
}

/// Interactive voting loop over the backlog
pub struct PlayRepl {
    use_case: RunSessionUseCase,
    editor: Reedline,
}

impl PlayRepl {
    pub fn new(use_case: RunSessionUseCase) -> Self {
        Self {
            use_case,
            editor: Reedline::create(),
        }
    }

    /// Give the use case back, e.g. to save after the loop
    pub fn into_use_case(self) -> RunSessionUseCase {
        self.use_case
    }

    /// Run until the backlog is done, a coffee break, or quit
    pub fn run(&mut self) -> std::io::Result<PlayExit> {
        println!("{}", ConsoleFormatter::banner(self.use_case.session()));
        println!("Type a card to vote, /help for commands.");

        if self.use_case.params().autosave {
            println!("Autosave is on: the snapshot is written after every feature.");
        }

        loop {
            if self.use_case.session().is_finished() {
                println!("{}", ConsoleFormatter::summary(self.use_case.session()));
                return Ok(PlayExit::Finished);
            }

            print!("{}", ConsoleFormatter::feature_header(self.use_case.session()));

            if let Some(exit) = self.collect_votes()? {
                return Ok(exit);
            }

            if self.close() {
                return Ok(PlayExit::CoffeeBreak);
            }
        }
    }

    /// Prompt every player who has not voted yet; `Some` when the loop must stop
    fn collect_votes(&mut self) -> std::io::Result<Option<PlayExit>> {
        loop {
            let Some((id, name)) = self
                .use_case
                .session()
                .pending_players()
                .first()
                .map(|p| (p.id.clone(), p.name.clone()))
            else {
                return Ok(None);
            };

            let prompt = DefaultPrompt::new(
                DefaultPromptSegment::Basic(name),
                DefaultPromptSegment::Empty,
            );

            match self.editor.read_line(&prompt)? {
                Signal::Success(line) => match parse_input(&line) {
                    PlayInput::Empty => {}
                    PlayInput::Card(card) => {
                        if let Err(e) = self.use_case.vote(&id, card) {
                            eprintln!("{} {}", "Error:".red().bold(), e);
                        }
                    }
                    PlayInput::Help => Self::print_help(),
                    PlayInput::Cards => print!("{}", ConsoleFormatter::deck()),
                    PlayInput::Status => {
                        print!("{}", ConsoleFormatter::vote_status(self.use_case.session()))
                    }
                    PlayInput::Save => self.save(),
                    PlayInput::Quit => return Ok(Some(PlayExit::Quit)),
                    PlayInput::Unknown(text) => {
                        println!("'{}' is not a card or command.", text);
                        print!("{}", ConsoleFormatter::deck());
                    }
                },
                Signal::CtrlD => return Ok(Some(PlayExit::Quit)),
                _ => println!("^C"),
            }
        }
    }

    /// Reveal the round and print what happened; `true` on a coffee break
    fn close(&mut self) -> bool {
        let coffee_break = match close_round(&mut self.use_case) {
            Ok(RoundClose::Pending) => false,
            Ok(RoundClose::CoffeeBreak { transition, saved }) => {
                println!("\n{}", "Everybody wants coffee. Taking a break.".yellow().bold());
                print!("{}", ConsoleFormatter::transition(&transition));
                Self::report_save(saved);
                true
            }
            Ok(RoundClose::Revealed {
                votes,
                outcome,
                transition,
            }) => {
                print!(
                    "{}",
                    ConsoleFormatter::round_result(self.use_case.session(), &votes, &outcome)
                );
                print!("{}", ConsoleFormatter::transition(&transition));
                false
            }
            Ok(RoundClose::Revote { reason, transition }) => {
                eprintln!("{} {}", "Error:".red().bold(), reason);
                print!("{}", ConsoleFormatter::transition(&transition));
                false
            }
            Err(e) => {
                eprintln!("{} {}", "Error:".red().bold(), e);
                false
            }
        };

        if let Some(e) = self.use_case.take_autosave_error() {
            eprintln!("{} {}", "Autosave failed:".red().bold(), e);
        }
        coffee_break
    }

    fn save(&self) {
        Self::report_save(self.use_case.save());
    }

    fn report_save(result: Result<(), RunSessionError>) {
        match result {
            Ok(()) => println!("{}", "Session saved.".green()),
            Err(RunSessionError::NoStore) => {
                println!("No snapshot file configured; pass --snapshot to save.")
            }
            Err(e) => eprintln!("{} {}", "Error:".red().bold(), e),
        }
    }

    fn print_help() {
        println!();
        println!("Type a card to vote:");
        print!("  {}", ConsoleFormatter::deck());
        println!("Commands:");
        println!("  /help, /h, /?     - Show this help");
        println!("  /cards            - Show the deck");
        println!("  /status           - Show who has voted");
        println!("  /save             - Save the session snapshot");
        println!("  /quit, /exit, /q  - Leave the table");
        println!();
    }
}
