//! Presentation layer for scrum-poker
//!
//! This crate contains CLI definitions, the console formatter and the
//! interactive play loop.

pub mod cli;
pub mod output;
pub mod play;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use output::console::ConsoleFormatter;
pub use play::{PlayExit, PlayRepl, RoundClose, close_round};
