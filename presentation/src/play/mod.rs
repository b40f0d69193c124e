//! Interactive play-through of a session

mod input;
mod repl;
mod round;

pub use input::{PlayInput, parse_input};
pub use repl::{PlayExit, PlayRepl};
pub use round::{RoundClose, close_round};
