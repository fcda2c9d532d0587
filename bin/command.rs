use derive_more::{Display, Error, From};
use lib::chess::{Move, ParseMoveError};
use std::str::FromStr;

/// A command entered during a game.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Command {
    Play(Move),
    Save(String),
    Load(String),
    Saves,
    New,
    Help,
    Quit,
}

impl Command {
    /// A short description of the available commands.
    pub const HELP: &'static str = "\
commands:
  <from> <to>   move a piece, e.g. `e2 e4`
  save <name>   save the game
  load <name>   load a saved game
  saves         list saved games
  new           start a new game
  help          show this message
  quit          leave";
}

/// The reason why parsing [`Command`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseCommandError {
    #[display(fmt = "missing name, try `{_0} <name>`")]
    #[from(ignore)]
    MissingName(#[error(not(source))] &'static str),

    #[display(fmt = "{_0}")]
    InvalidMove(ParseMoveError),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (head, tail) = match s.split_once(char::is_whitespace) {
            Some((head, tail)) => (head, tail.trim()),
            None => (s, ""),
        };

        match (head.to_ascii_lowercase().as_str(), tail) {
            ("save", "") => Err(ParseCommandError::MissingName("save")),
            ("load", "") => Err(ParseCommandError::MissingName("load")),
            ("save", name) => Ok(Command::Save(name.into())),
            ("load", name) => Ok(Command::Load(name.into())),
            ("saves" | "list", "") => Ok(Command::Saves),
            ("new", "") => Ok(Command::New),
            ("help" | "?", "") => Ok(Command::Help),
            ("quit" | "exit", "") => Ok(Command::Quit),
            _ => Ok(Command::Play(s.parse()?)),
        }
    }
}
