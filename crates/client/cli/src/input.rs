//! Parsing of the lines a player types during a game.

use sortquiz_core::UserAction;
use thiserror::Error;

/// One line of player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerCommand {
    Move(UserAction),
    Hint,
    Skip,
    Quit,
    Help,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("empty input")]
    Empty,

    #[error("unknown command {0:?} (type `help`)")]
    Unknown(String),

    #[error("`{command}` expects {expected}")]
    Arguments {
        command: &'static str,
        expected: &'static str,
    },
}

impl std::str::FromStr for PlayerCommand {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let command = words.next().ok_or(ParseCommandError::Empty)?;
        let args: Vec<&str> = words.collect();

        match command.to_ascii_lowercase().as_str() {
            "swap" | "s" => match args[..] {
                [first, second] => match (first.parse(), second.parse()) {
                    (Ok(first), Ok(second)) => Ok(Self::Move(UserAction::swap(first, second))),
                    _ => Err(swap_arguments()),
                },
                _ => Err(swap_arguments()),
            },
            "select" | "place" | "p" => match args[..] {
                [value] => value
                    .parse()
                    .map(|value| Self::Move(UserAction::select(value)))
                    .map_err(|_| select_arguments()),
                _ => Err(select_arguments()),
            },
            "hint" | "h" => Ok(Self::Hint),
            "skip" => Ok(Self::Skip),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            "help" | "?" => Ok(Self::Help),
            other => Err(ParseCommandError::Unknown(other.to_string())),
        }
    }
}

fn swap_arguments() -> ParseCommandError {
    ParseCommandError::Arguments {
        command: "swap",
        expected: "two positions, e.g. `swap 0 1`",
    }
}

fn select_arguments() -> ParseCommandError {
    ParseCommandError::Arguments {
        command: "select",
        expected: "one value, e.g. `select 27`",
    }
}

pub const HELP: &str = "\
commands:
  swap <i> <j>    exchange positions i and j   (alias: s)
  select <value>  place a value (merge sort)   (aliases: place, p)
  hint            show the expected move       (alias: h)
  skip            let the algorithm make this move, unscored
  quit            abandon the game             (alias: q)";
